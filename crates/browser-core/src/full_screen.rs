//! Paged full-screen viewer state.

use browser_config::BrowserConfig;
use shared::MediaList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScreenMessage {
    Next,
    Previous,
    /// Tap on the photo itself; shows or hides the controls.
    PhotoTapped,
    ToggleSelection,
    GridButton,
    ActionButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullScreenEvent {
    None,
    PageChanged { index: usize, title: String },
    SelectionToggled { index: usize, selected: bool },
    GridButtonTapped,
    ControlsToggled(bool),
    ActionButton(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullScreenState {
    page: usize,
    total: usize,
    controls_visible: bool,
    always_show_controls: bool,
    enable_grid: bool,
    display_action_button: bool,
    display_nav_arrows: bool,
    display_selection_buttons: bool,
}

impl FullScreenState {
    pub fn new(initial_page: usize, total: usize, config: &BrowserConfig) -> Self {
        Self {
            page: initial_page,
            total,
            controls_visible: true,
            always_show_controls: config.always_show_controls,
            enable_grid: config.enable_grid,
            display_action_button: config.display_action_button,
            display_nav_arrows: config.display_nav_arrows,
            display_selection_buttons: config.display_selection_buttons,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn title(&self) -> String {
        page_title(self.page, self.total)
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible || self.always_show_controls
    }

    pub fn shows_grid_button(&self) -> bool {
        self.enable_grid
    }

    pub fn shows_action_button(&self) -> bool {
        self.display_action_button
    }

    pub fn shows_nav_arrows(&self) -> bool {
        self.display_nav_arrows
    }

    pub fn shows_selection_button(&self) -> bool {
        self.display_selection_buttons
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total
    }

    /// Refresh display flags after a configuration change.
    pub fn apply_config(&mut self, config: &BrowserConfig) {
        self.always_show_controls = config.always_show_controls;
        if config.always_show_controls {
            self.controls_visible = true;
        }
        self.display_action_button = config.display_action_button;
        self.display_nav_arrows = config.display_nav_arrows;
        self.display_selection_buttons = config.display_selection_buttons;
    }

    /// Jump to `index` and report the new title. Desktop paging never
    /// animates, so opening a page is always immediate.
    pub fn open_page(&mut self, index: usize) -> FullScreenEvent {
        if index >= self.total {
            return FullScreenEvent::None;
        }

        self.page = index;
        FullScreenEvent::PageChanged {
            index,
            title: self.title(),
        }
    }

    pub fn handle(&mut self, message: FullScreenMessage, media: &MediaList) -> FullScreenEvent {
        match message {
            FullScreenMessage::Next if self.has_next() => self.open_page(self.page + 1),
            FullScreenMessage::Previous if self.has_previous() => self.open_page(self.page - 1),
            FullScreenMessage::Next | FullScreenMessage::Previous => FullScreenEvent::None,
            FullScreenMessage::PhotoTapped => {
                if self.always_show_controls {
                    return FullScreenEvent::None;
                }
                self.controls_visible = !self.controls_visible;
                FullScreenEvent::ControlsToggled(self.controls_visible)
            }
            FullScreenMessage::ToggleSelection if self.display_selection_buttons => media
                .get(self.page)
                .map(|item| FullScreenEvent::SelectionToggled {
                    index: self.page,
                    selected: !item.selected,
                })
                .unwrap_or(FullScreenEvent::None),
            FullScreenMessage::GridButton if self.enable_grid => FullScreenEvent::GridButtonTapped,
            FullScreenMessage::ActionButton if self.display_action_button => {
                FullScreenEvent::ActionButton(self.page)
            }
            FullScreenMessage::ToggleSelection
            | FullScreenMessage::GridButton
            | FullScreenMessage::ActionButton => FullScreenEvent::None,
        }
    }
}

pub fn page_title(index: usize, total: usize) -> String {
    format!("{} of {}", index + 1, total)
}
