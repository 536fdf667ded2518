use browser_config::ThumbnailSize;
use browser_core::{FullScreenMessage, GridMessage};
use browser_nav::LoadedMedia;
use std::{path::PathBuf, sync::Arc, time::Instant};

pub use crate::key_binds::MenuAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPage {
    About,
    Settings,
}

#[derive(Debug, Clone)]
pub enum Message {
    Grid(GridMessage),
    FullScreen(FullScreenMessage),
    ActionSheet(ActionSheetMessage),
    Settings(SettingsMessage),
    KeyBind(MenuAction),
    ToggleContextPage(ContextPage),
    MediaLoaded(LoadedMedia),
    LoadError(Arc<String>),
    AnimationTick(Instant),
    StageScrolled { offset_y: f32, height: f32 },
    WindowResized { width: f32, height: f32 },
    SaveCopyTo { from: PathBuf, to: PathBuf },
    SaveResult(Result<PathBuf, String>),
    Cancelled,
    Quit,
}

/// Choices on the built-in action sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSheetMessage {
    SaveCopy,
    CopyPath,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMessage {
    AlwaysShowControls(bool),
    DisplayActionButton(bool),
    DisplayNavArrows(bool),
    EnableGrid(bool),
    StartOnGrid(bool),
    DisplaySelectionButtons(bool),
    ThumbnailSize(ThumbnailSize),
    ShowHiddenFiles(bool),
}
