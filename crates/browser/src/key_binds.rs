use crate::message::{ContextPage, Message};
use browser_core::{FocusMove, FullScreenMessage, GridMessage, Mode};
use cosmic::{
    iced::keyboard::{Key, key::Named},
    widget::menu::key_bind::{KeyBind, Modifier},
};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Quit,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Activate,
    ToggleSelection,
    Settings,
    About,
}

impl MenuAction {
    /// Resolve the action against the current mode. Arrows page in the
    /// full-screen viewer and move focus on the grid.
    pub fn message(self, mode: Mode) -> Message {
        match (self, mode) {
            (MenuAction::Quit, _) => Message::Quit,
            (MenuAction::Settings, _) => Message::ToggleContextPage(ContextPage::Settings),
            (MenuAction::About, _) => Message::ToggleContextPage(ContextPage::About),
            (MenuAction::Escape, Mode::FullScreen) => {
                Message::FullScreen(FullScreenMessage::GridButton)
            }
            (MenuAction::Left, Mode::FullScreen) => Message::FullScreen(FullScreenMessage::Previous),
            (MenuAction::Right, Mode::FullScreen) => Message::FullScreen(FullScreenMessage::Next),
            (MenuAction::Activate, Mode::FullScreen) => {
                Message::FullScreen(FullScreenMessage::PhotoTapped)
            }
            (MenuAction::ToggleSelection, Mode::FullScreen) => {
                Message::FullScreen(FullScreenMessage::ToggleSelection)
            }
            (MenuAction::Escape | MenuAction::Up | MenuAction::Down, Mode::FullScreen) => {
                Message::Cancelled
            }
            (MenuAction::Escape, Mode::Grid) => Message::Cancelled,
            (MenuAction::Left, Mode::Grid) => Message::Grid(GridMessage::MoveFocus(FocusMove::Left)),
            (MenuAction::Right, Mode::Grid) => {
                Message::Grid(GridMessage::MoveFocus(FocusMove::Right))
            }
            (MenuAction::Up, Mode::Grid) => Message::Grid(GridMessage::MoveFocus(FocusMove::Up)),
            (MenuAction::Down, Mode::Grid) => Message::Grid(GridMessage::MoveFocus(FocusMove::Down)),
            (MenuAction::Activate, Mode::Grid) => Message::Grid(GridMessage::ActivateFocused),
            (MenuAction::ToggleSelection, Mode::Grid) => {
                Message::Grid(GridMessage::ToggleFocusedSelection)
            }
        }
    }
}

pub fn init_key_binds() -> HashMap<KeyBind, MenuAction> {
    let mut binds = HashMap::new();

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Ctrl],
            key: Key::Character("q".into()),
        },
        MenuAction::Quit,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Alt],
            key: Key::Named(Named::F4),
        },
        MenuAction::Quit,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Ctrl],
            key: Key::Character(",".into()),
        },
        MenuAction::Settings,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::F1),
        },
        MenuAction::About,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::Escape),
        },
        MenuAction::Escape,
    );

    // Paging and grid focus
    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowLeft),
        },
        MenuAction::Left,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowRight),
        },
        MenuAction::Right,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowUp),
        },
        MenuAction::Up,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::ArrowDown),
        },
        MenuAction::Down,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::Enter),
        },
        MenuAction::Activate,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::Space),
        },
        MenuAction::ToggleSelection,
    );

    binds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(key: Key, modifiers: Vec<Modifier>) -> Option<MenuAction> {
        init_key_binds()
            .get(&KeyBind { modifiers, key })
            .copied()
    }

    #[test]
    fn test_arrow_and_quit_bindings() {
        assert_eq!(
            lookup(Key::Named(Named::ArrowLeft), vec![]),
            Some(MenuAction::Left)
        );
        assert_eq!(
            lookup(Key::Character("q".into()), vec![Modifier::Ctrl]),
            Some(MenuAction::Quit)
        );
        assert_eq!(lookup(Key::Character("q".into()), vec![]), None);
    }

    #[test]
    fn test_arrows_page_in_full_screen() {
        assert!(matches!(
            MenuAction::Right.message(Mode::FullScreen),
            Message::FullScreen(FullScreenMessage::Next)
        ));
        assert!(matches!(
            MenuAction::Escape.message(Mode::FullScreen),
            Message::FullScreen(FullScreenMessage::GridButton)
        ));
    }

    #[test]
    fn test_arrows_move_grid_focus() {
        assert!(matches!(
            MenuAction::Up.message(Mode::Grid),
            Message::Grid(GridMessage::MoveFocus(FocusMove::Up))
        ));
        assert!(matches!(
            MenuAction::Activate.message(Mode::Grid),
            Message::Grid(GridMessage::ActivateFocused)
        ));
        assert!(matches!(
            MenuAction::Escape.message(Mode::Grid),
            Message::Cancelled
        ));
    }
}
