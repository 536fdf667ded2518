//! Command line parsing.

use browser_config::BrowserConfig;
use pico_args::Arguments;
use std::{ffi::OsString, path::PathBuf};

pub const HELP: &str = "\
Usage: photo-browser [OPTIONS] [PATH]

PATH is a directory of photos, a single photo, or a .json manifest.
Defaults to the user's Pictures directory.

Options:
  --index N               Open the photo at index N
  --grid                  Start on the thumbnail grid
  --always-show-controls  Never hide the controls when the photo is tapped
  --nav-arrows            Show previous/next arrows
  --no-action-button      Hide the action button
  --no-grid               Disable the thumbnail grid
  --selection             Show selection buttons
  --print-selection       Print selected photo paths on exit
  -h, --help              Print this help
";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),
    #[error("Unexpected argument: {0:?}")]
    Unexpected(OsString),
}

/// Flags given on the command line. Display flags are only applied when
/// present; otherwise the stored configuration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub path: Option<PathBuf>,
    pub index: Option<usize>,
    pub start_on_grid: bool,
    pub always_show_controls: bool,
    pub display_nav_arrows: bool,
    pub hide_action_button: bool,
    pub disable_grid: bool,
    pub display_selection_buttons: bool,
    pub print_selection: bool,
    pub help: bool,
}

impl Flags {
    pub fn from_env() -> Result<Self, CliError> {
        parse(Arguments::from_env())
    }

    /// Overlay the command line switches onto a stored configuration.
    pub fn apply(&self, mut config: BrowserConfig) -> BrowserConfig {
        if self.start_on_grid {
            config.start_on_grid = true;
        }
        if self.always_show_controls {
            config.always_show_controls = true;
        }
        if self.display_nav_arrows {
            config.display_nav_arrows = true;
        }
        if self.hide_action_button {
            config.display_action_button = false;
        }
        if self.disable_grid {
            config.enable_grid = false;
            config.start_on_grid = false;
        }
        if self.display_selection_buttons {
            config.display_selection_buttons = true;
        }
        config
    }
}

pub fn parse(mut args: Arguments) -> Result<Flags, CliError> {
    let flags = Flags {
        help: args.contains(["-h", "--help"]),
        index: args.opt_value_from_str("--index")?,
        start_on_grid: args.contains("--grid"),
        always_show_controls: args.contains("--always-show-controls"),
        display_nav_arrows: args.contains("--nav-arrows"),
        hide_action_button: args.contains("--no-action-button"),
        disable_grid: args.contains("--no-grid"),
        display_selection_buttons: args.contains("--selection"),
        print_selection: args.contains("--print-selection"),
        path: args.opt_free_from_str()?,
    };

    let remaining = args.finish();
    if let Some(extra) = remaining.into_iter().next() {
        return Err(CliError::Unexpected(extra));
    }

    Ok(flags)
}
