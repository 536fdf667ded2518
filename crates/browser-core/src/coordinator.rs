//! Photo browser root.
//!
//! [`PhotoBrowser`] owns every piece of mutable state: the media list, the
//! mode, the title and the top bar. The grid and full-screen children never
//! talk to each other; their events come back through
//! [`PhotoBrowser::handle_grid`] and [`PhotoBrowser::handle_full_screen`].

use crate::{
    full_screen::{FullScreenEvent, FullScreenMessage, FullScreenState},
    grid::{GridEvent, GridMessage, GridState},
    top_bar::{self, TopBar},
    transition::Tween,
};
use browser_config::BrowserConfig;
use shared::{BrowserError, BrowserResult, MediaItem, MediaList};
use std::{
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

pub const TOOLBAR_HEIGHT: f32 = 54.0;
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

pub type SelectionHandler = Arc<dyn Fn(&MediaItem, usize, bool) + Send + Sync>;
pub type ActionHandler = Arc<dyn Fn(&MediaItem) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Grid,
    #[default]
    FullScreen,
}

/// Work the embedding application has to do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEffect {
    None,
    /// No action handler is configured; show the built-in action sheet.
    OpenActionSheet { index: usize, item: Arc<MediaItem> },
}

/// Everything needed to mount a browser.
#[derive(Clone)]
pub struct BrowserProps {
    pub media: MediaList,
    pub initial_index: usize,
    pub config: BrowserConfig,
    pub on_selection_changed: SelectionHandler,
    pub on_action_button: Option<ActionHandler>,
}

impl BrowserProps {
    pub fn new(media: MediaList) -> Self {
        Self {
            media,
            initial_index: 0,
            config: BrowserConfig::default(),
            on_selection_changed: Arc::new(|_, _, _| {}),
            on_action_button: None,
        }
    }

    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_selection_changed(
        mut self,
        handler: impl Fn(&MediaItem, usize, bool) + Send + Sync + 'static,
    ) -> Self {
        self.on_selection_changed = Arc::new(handler);
        self
    }

    pub fn on_action_button(mut self, handler: impl Fn(&MediaItem) + Send + Sync + 'static) -> Self {
        self.on_action_button = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for BrowserProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserProps")
            .field("media", &self.media.len())
            .field("initial_index", &self.initial_index)
            .field("config", &self.config)
            .field("on_action_button", &self.on_action_button.is_some())
            .finish_non_exhaustive()
    }
}

pub struct PhotoBrowser {
    config: BrowserConfig,
    on_selection_changed: SelectionHandler,
    on_action_button: Option<ActionHandler>,
    media: MediaList,
    current_index: usize,
    mode: Mode,
    transition: Tween,
    title: Option<String>,
    top_bar: TopBar,
    grid: GridState,
    full_screen: FullScreenState,
}

impl fmt::Debug for PhotoBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoBrowser")
            .field("media", &self.media.len())
            .field("current_index", &self.current_index)
            .field("mode", &self.mode)
            .field("progress", &self.transition.value())
            .field("title", &self.title)
            .field("display_top_bar", &self.top_bar.displayed())
            .finish_non_exhaustive()
    }
}

impl PhotoBrowser {
    /// Mount a browser.
    ///
    /// The media list must be non-empty and `initial_index` must point into
    /// it.
    pub fn new(props: BrowserProps) -> BrowserResult<Self> {
        let BrowserProps {
            media,
            initial_index,
            config,
            on_selection_changed,
            on_action_button,
        } = props;

        if media.is_empty() {
            return Err(BrowserError::EmptyMediaList);
        }
        media.check_index(initial_index)?;

        let mode = if config.start_on_grid {
            Mode::Grid
        } else {
            Mode::FullScreen
        };
        let progress = match mode {
            Mode::Grid => 0.0,
            Mode::FullScreen => 1.0,
        };

        let full_screen = FullScreenState::new(initial_index, media.len(), &config);
        let mut grid = GridState::new(config.display_selection_buttons);
        grid.focus(initial_index);

        let mut browser = Self {
            on_selection_changed,
            on_action_button,
            current_index: initial_index,
            mode,
            transition: Tween::settled(progress, TRANSITION_DURATION),
            title: None,
            top_bar: TopBar::new(true),
            grid,
            full_screen,
            media,
            config,
        };
        browser.update_title(browser.full_screen.title());

        tracing::debug!(
            "browser mounted with {} photos at {initial_index} in {:?} mode",
            browser.media.len(),
            browser.mode
        );

        Ok(browser)
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn media(&self) -> &MediaList {
        &self.media
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_full_screen(&self) -> bool {
        self.mode == Mode::FullScreen
    }

    /// Transition progress: 0 shows the grid, 1 shows the full-screen viewer.
    pub fn progress(&self) -> f32 {
        self.transition.value()
    }

    pub fn progress_target(&self) -> f32 {
        self.transition.target()
    }

    /// Vertical offset of the grid for a screen of `screen_height`.
    ///
    /// The grid and the full-screen viewer are stacked; moving the grid up by
    /// one screen plus the toolbar reveals the viewer underneath.
    pub fn grid_offset(&self, screen_height: f32) -> f32 {
        self.progress() * -(screen_height + TOOLBAR_HEIGHT)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn top_bar(&self) -> &TopBar {
        &self.top_bar
    }

    pub fn display_top_bar(&self) -> bool {
        self.top_bar.displayed()
    }

    pub fn top_bar_title(&self) -> String {
        top_bar::display_title(self.is_full_screen(), self.title(), self.media.len())
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn full_screen(&self) -> &FullScreenState {
        &self.full_screen
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating() || self.top_bar.is_animating()
    }

    /// Switch between grid and full-screen mode.
    ///
    /// Only the mode and the transition target change; a request fired while
    /// a transition is running retargets it from the current progress.
    pub fn toggle_full_screen(&mut self, display: bool) {
        self.mode = if display {
            Mode::FullScreen
        } else {
            Mode::Grid
        };
        self.transition.retarget(if display { 1.0 } else { 0.0 });

        tracing::debug!(
            "mode -> {:?}, progress {:.2} -> {:.2}",
            self.mode,
            self.transition.value(),
            self.transition.target()
        );
    }

    /// Set the selection flag of the item at `index`.
    ///
    /// Builds a new media list; the previous list is left untouched and the
    /// selection handler fires once with the updated item.
    pub fn select_media(&mut self, index: usize, is_selected: bool) -> BrowserResult<Arc<MediaItem>> {
        let (media, item) = self.media.with_selection(index, is_selected)?;
        self.media = media;

        tracing::debug!("media {index} selected: {is_selected}");
        (self.on_selection_changed)(&item, index, is_selected);

        Ok(item)
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn toggle_top_bar(&mut self, displayed: bool) {
        self.top_bar.set_displayed(displayed);
    }

    /// Open the full-screen viewer at `index`, then slide to it.
    pub fn grid_photo_tapped(&mut self, index: usize) -> BrowserResult<()> {
        self.media.check_index(index)?;

        let event = self.full_screen.open_page(index);
        self.apply_full_screen_event(event)?;
        self.toggle_full_screen(true);
        Ok(())
    }

    pub fn grid_button_tapped(&mut self) {
        self.grid.focus(self.current_index);
        self.toggle_full_screen(false);
    }

    pub fn handle_grid(&mut self, message: GridMessage) -> BrowserResult<BrowserEffect> {
        match self.grid.handle(message, &self.media) {
            GridEvent::None => {}
            GridEvent::PhotoTapped(index) => self.grid_photo_tapped(index)?,
            GridEvent::SelectionToggled { index, selected } => {
                self.select_media(index, selected)?;
            }
        }

        Ok(BrowserEffect::None)
    }

    pub fn handle_full_screen(
        &mut self,
        message: FullScreenMessage,
    ) -> BrowserResult<BrowserEffect> {
        let event = self.full_screen.handle(message, &self.media);
        self.apply_full_screen_event(event)
    }

    fn apply_full_screen_event(&mut self, event: FullScreenEvent) -> BrowserResult<BrowserEffect> {
        match event {
            FullScreenEvent::None => {}
            FullScreenEvent::PageChanged { index, title } => {
                self.current_index = index;
                self.update_title(title);
            }
            FullScreenEvent::SelectionToggled { index, selected } => {
                self.select_media(index, selected)?;
            }
            FullScreenEvent::GridButtonTapped => self.grid_button_tapped(),
            FullScreenEvent::ControlsToggled(visible) => self.toggle_top_bar(visible),
            FullScreenEvent::ActionButton(index) => {
                let item = self
                    .media
                    .get(index)
                    .cloned()
                    .ok_or(BrowserError::IndexOutOfRange {
                        index,
                        len: self.media.len(),
                    })?;

                return Ok(match &self.on_action_button {
                    Some(handler) => {
                        handler(&item);
                        BrowserEffect::None
                    }
                    None => BrowserEffect::OpenActionSheet { index, item },
                });
            }
        }

        Ok(BrowserEffect::None)
    }

    /// Refresh display flags from a reloaded configuration. The mode is left
    /// alone; `start_on_grid` only applies at mount.
    pub fn apply_config(&mut self, config: BrowserConfig) {
        self.grid
            .set_display_selection_buttons(config.display_selection_buttons);
        self.full_screen.apply_config(&config);
        if config.always_show_controls {
            self.top_bar.set_displayed(true);
        }
        self.config = config;
    }

    /// Advance running animations. Returns true while any is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let transition = self.transition.tick(now);
        let top_bar = self.top_bar.tick(now);
        transition || top_bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(count: usize) -> MediaList {
        (0..count)
            .map(|i| MediaItem::new(format!("/photos/{i}.jpg")))
            .collect()
    }

    #[test]
    fn test_rejects_empty_media() {
        let err = PhotoBrowser::new(BrowserProps::new(MediaList::default())).unwrap_err();
        assert_eq!(err, BrowserError::EmptyMediaList);
    }

    #[test]
    fn test_rejects_out_of_range_initial_index() {
        let err = PhotoBrowser::new(BrowserProps::new(media(2)).initial_index(2)).unwrap_err();
        assert_eq!(err, BrowserError::IndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn test_initial_title_reflects_initial_page() {
        let browser = PhotoBrowser::new(BrowserProps::new(media(4)).initial_index(2)).unwrap();
        assert_eq!(browser.title(), Some("3 of 4"));
        assert_eq!(browser.current_index(), 2);
        assert_eq!(browser.grid().focused, Some(2));
    }

    #[test]
    fn test_grid_offset_follows_progress() {
        let mut browser = PhotoBrowser::new(BrowserProps::new(media(1))).unwrap();
        assert_eq!(browser.grid_offset(800.0), -(800.0 + TOOLBAR_HEIGHT));

        browser.toggle_full_screen(false);
        let start = Instant::now();
        browser.tick(start);
        browser.tick(start + TRANSITION_DURATION);
        assert_eq!(browser.grid_offset(800.0), 0.0);
    }

    #[test]
    fn test_controls_toggle_drives_top_bar() {
        let mut browser = PhotoBrowser::new(BrowserProps::new(media(2))).unwrap();
        assert!(browser.display_top_bar());

        browser
            .handle_full_screen(FullScreenMessage::PhotoTapped)
            .unwrap();
        assert!(!browser.display_top_bar());

        browser
            .handle_full_screen(FullScreenMessage::PhotoTapped)
            .unwrap();
        assert!(browser.display_top_bar());
    }

    #[test]
    fn test_always_show_controls_then_tap_hides_bar() {
        let mut browser = PhotoBrowser::new(BrowserProps::new(media(2))).unwrap();
        browser
            .handle_full_screen(FullScreenMessage::PhotoTapped)
            .unwrap();
        assert!(!browser.display_top_bar());

        browser.apply_config(BrowserConfig {
            always_show_controls: true,
            ..BrowserConfig::default()
        });
        assert!(browser.display_top_bar());
        assert!(browser.full_screen().controls_visible());

        browser.apply_config(BrowserConfig::default());
        browser
            .handle_full_screen(FullScreenMessage::PhotoTapped)
            .unwrap();
        assert!(!browser.display_top_bar());
        assert!(!browser.full_screen().controls_visible());
    }

    #[test]
    fn test_apply_config_keeps_mode() {
        let mut browser = PhotoBrowser::new(BrowserProps::new(media(2))).unwrap();
        browser.apply_config(BrowserConfig {
            start_on_grid: true,
            display_selection_buttons: true,
            ..BrowserConfig::default()
        });

        assert_eq!(browser.mode(), Mode::FullScreen);
        assert!(browser.grid().display_selection_buttons());
        assert!(browser.full_screen().shows_selection_button());
    }
}
