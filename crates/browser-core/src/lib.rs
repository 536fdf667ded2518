pub mod coordinator;
pub mod full_screen;
pub mod grid;
pub mod top_bar;
pub mod transition;

pub use coordinator::{
    ActionHandler, BrowserEffect, BrowserProps, Mode, PhotoBrowser, SelectionHandler,
    TOOLBAR_HEIGHT, TRANSITION_DURATION,
};
pub use full_screen::{FullScreenEvent, FullScreenMessage, FullScreenState};
pub use grid::{FocusMove, GridEvent, GridMessage, GridState};
pub use top_bar::TopBar;
pub use transition::{Easing, Tween};
