use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONFIG_VERSION: u64 = 1;
pub const APP_ID: &str = "io.github.photo_browser.PhotoBrowser";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ThumbnailSize {
    pub const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    pub fn pixels(self) -> u32 {
        match self {
            ThumbnailSize::Small => 96,
            ThumbnailSize::Medium => 128,
            ThumbnailSize::Large => 192,
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailSize::Small => write!(f, "Small"),
            ThumbnailSize::Medium => write!(f, "Medium"),
            ThumbnailSize::Large => write!(f, "Large"),
        }
    }
}

/// Display flags for the photo browser.
///
/// Defaults match a freshly mounted browser: full-screen first, action
/// button and grid enabled, everything else off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Keep the bars visible instead of hiding them on photo tap.
    pub always_show_controls: bool,
    pub display_action_button: bool,
    pub display_nav_arrows: bool,
    /// Allow switching to the thumbnail grid.
    pub enable_grid: bool,
    pub start_on_grid: bool,
    pub display_selection_buttons: bool,
    pub thumbnail_size: ThumbnailSize,
    /// List dot-files when scanning a directory.
    pub show_hidden_files: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            always_show_controls: false,
            display_action_button: true,
            display_nav_arrows: false,
            enable_grid: true,
            start_on_grid: false,
            display_selection_buttons: false,
            thumbnail_size: ThumbnailSize::default(),
            show_hidden_files: false,
        }
    }
}

impl CosmicConfigEntry for BrowserConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("always_show_controls", self.always_show_controls)?;
        config.set("display_action_button", self.display_action_button)?;
        config.set("display_nav_arrows", self.display_nav_arrows)?;
        config.set("enable_grid", self.enable_grid)?;
        config.set("start_on_grid", self.start_on_grid)?;
        config.set("display_selection_buttons", self.display_selection_buttons)?;
        config.set("thumbnail_size", self.thumbnail_size)?;
        config.set("show_hidden_files", self.show_hidden_files)?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = BrowserConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("always_show_controls", always_show_controls, bool);
        get_field!("display_action_button", display_action_button, bool);
        get_field!("display_nav_arrows", display_nav_arrows, bool);
        get_field!("enable_grid", enable_grid, bool);
        get_field!("start_on_grid", start_on_grid, bool);
        get_field!("display_selection_buttons", display_selection_buttons, bool);
        get_field!("thumbnail_size", thumbnail_size, ThumbnailSize);
        get_field!("show_hidden_files", show_hidden_files, bool);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        macro_rules! update_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => {
                        self.$field = val;
                        updated.push($name);
                    }
                    Err(e) => errors.push(e),
                }
            };
        }

        for key in changed_keys {
            match key.as_ref() {
                "always_show_controls" => {
                    update_field!("always_show_controls", always_show_controls, bool)
                }
                "display_action_button" => {
                    update_field!("display_action_button", display_action_button, bool)
                }
                "display_nav_arrows" => {
                    update_field!("display_nav_arrows", display_nav_arrows, bool)
                }
                "display_selection_buttons" => update_field!(
                    "display_selection_buttons",
                    display_selection_buttons,
                    bool
                ),
                "thumbnail_size" => update_field!("thumbnail_size", thumbnail_size, ThumbnailSize),
                "show_hidden_files" => update_field!("show_hidden_files", show_hidden_files, bool),
                // enable_grid and start_on_grid only matter at startup
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}

/// Load the stored configuration, falling back to defaults for missing keys.
pub fn load() -> (BrowserConfig, Option<Config>) {
    match config() {
        Ok(handler) => {
            let config = match BrowserConfig::get_entry(&handler) {
                Ok(c) => c,
                Err((errors, c)) => {
                    tracing::debug!("config has {} unreadable keys, using defaults", errors.len());
                    c
                }
            };
            (config, Some(handler))
        }
        Err(e) => {
            tracing::warn!("config unavailable: {e}");
            (BrowserConfig::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = BrowserConfig::default();
        assert!(!cfg.always_show_controls);
        assert!(cfg.display_action_button);
        assert!(!cfg.display_nav_arrows);
        assert!(cfg.enable_grid);
        assert!(!cfg.start_on_grid);
        assert!(!cfg.display_selection_buttons);
        assert_eq!(cfg.thumbnail_size, ThumbnailSize::Medium);
        assert!(!cfg.show_hidden_files);
    }

    #[test]
    fn test_app_id_names_this_app() {
        assert_eq!(APP_ID, "io.github.photo_browser.PhotoBrowser");
    }

    #[test]
    fn test_thumbnail_pixels_increase() {
        let sizes: Vec<u32> = ThumbnailSize::ALL.iter().map(|s| s.pixels()).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }
}
