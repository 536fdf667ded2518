//! Thumbnail grid state.
//!
//! The grid only keeps keyboard focus and its column count. Taps and
//! selection toggles are reported upward as [`GridEvent`]s.

use shared::MediaList;

/// Spacing between grid cells, in logical pixels.
pub const GRID_SPACING: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridMessage {
    PhotoTapped(usize),
    ToggleSelection(usize),
    Focus(usize),
    MoveFocus(FocusMove),
    ActivateFocused,
    ToggleFocusedSelection,
    Resized { width: f32, cell_size: f32 },
    Scrolled { offset_y: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    None,
    PhotoTapped(usize),
    SelectionToggled { index: usize, selected: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub focused: Option<usize>,
    pub columns: usize,
    display_selection_buttons: bool,
    cell_size: f32,
    /// Last reported scroll position and height of the grid viewport.
    scroll_offset: f32,
    viewport_height: f32,
}

impl GridState {
    pub fn new(display_selection_buttons: bool) -> Self {
        Self {
            focused: None,
            columns: 4,
            display_selection_buttons,
            cell_size: 0.0,
            scroll_offset: 0.0,
            viewport_height: 0.0,
        }
    }

    pub fn display_selection_buttons(&self) -> bool {
        self.display_selection_buttons
    }

    pub fn set_display_selection_buttons(&mut self, display: bool) {
        self.display_selection_buttons = display;
    }

    pub fn focus(&mut self, index: usize) {
        self.focused = Some(index);
    }

    pub fn handle(&mut self, message: GridMessage, media: &MediaList) -> GridEvent {
        let total = media.len();

        match message {
            GridMessage::PhotoTapped(index) if index < total => {
                self.focused = Some(index);
                GridEvent::PhotoTapped(index)
            }
            GridMessage::ToggleSelection(index) if self.display_selection_buttons => media
                .get(index)
                .map(|item| GridEvent::SelectionToggled {
                    index,
                    selected: !item.selected,
                })
                .unwrap_or(GridEvent::None),
            GridMessage::Focus(index) if index < total => {
                self.focused = Some(index);
                GridEvent::None
            }
            GridMessage::MoveFocus(direction) => {
                if total > 0 {
                    self.focused = Some(self.moved_focus(direction, total));
                }
                GridEvent::None
            }
            GridMessage::ActivateFocused => match self.focused {
                Some(index) if index < total => GridEvent::PhotoTapped(index),
                _ => GridEvent::None,
            },
            GridMessage::ToggleFocusedSelection => match self.focused {
                Some(index) => self.handle(GridMessage::ToggleSelection(index), media),
                None => GridEvent::None,
            },
            GridMessage::Resized { width, cell_size } => {
                self.cell_size = cell_size;
                self.columns = calculate_columns(width, cell_size, GRID_SPACING);
                GridEvent::None
            }
            GridMessage::Scrolled { offset_y, height } => {
                self.scroll_offset = offset_y;
                self.viewport_height = height;
                GridEvent::None
            }
            _ => GridEvent::None,
        }
    }

    /// Scroll offset that brings the focused row fully into view, or `None`
    /// when it is already visible. Rows are laid out below a `GRID_SPACING`
    /// padding, one `cell_size + GRID_SPACING` apart.
    pub fn scroll_target(&self) -> Option<f32> {
        let index = self.focused?;
        let row = (index / self.columns.max(1)) as f32;
        let top = row * (self.cell_size + GRID_SPACING);
        let bottom = top + self.cell_size + 2.0 * GRID_SPACING;

        if top < self.scroll_offset {
            Some(top)
        } else if self.viewport_height > 0.0 && bottom > self.scroll_offset + self.viewport_height
        {
            Some((bottom - self.viewport_height).max(0.0))
        } else {
            None
        }
    }

    fn moved_focus(&self, direction: FocusMove, total: usize) -> usize {
        let cols = self.columns.max(1);
        let Some(idx) = self.focused else {
            return 0;
        };

        match direction {
            FocusMove::Left => idx.saturating_sub(1),
            FocusMove::Right => (idx + 1).min(total - 1),
            FocusMove::Up if idx >= cols => idx - cols,
            FocusMove::Down if idx + cols < total => idx + cols,
            FocusMove::Up | FocusMove::Down => idx,
        }
    }
}

/// Number of cells of `cell_size` that fit in `available_width`.
pub fn calculate_columns(available_width: f32, cell_size: f32, spacing: f32) -> usize {
    if available_width <= 0.0 || cell_size <= 0.0 {
        return 1;
    }

    (((available_width + spacing) / (cell_size + spacing)).floor() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MediaItem;

    fn media(count: usize) -> MediaList {
        (0..count)
            .map(|i| MediaItem::new(format!("{i}.jpg")))
            .collect()
    }

    #[test]
    fn test_photo_tap_reports_index() {
        let media = media(3);
        let mut grid = GridState::new(false);

        assert_eq!(
            grid.handle(GridMessage::PhotoTapped(1), &media),
            GridEvent::PhotoTapped(1)
        );
        assert_eq!(grid.focused, Some(1));
        assert_eq!(grid.handle(GridMessage::PhotoTapped(7), &media), GridEvent::None);
    }

    #[test]
    fn test_selection_toggle_inverts_flag() {
        let media = media(3);
        let mut grid = GridState::new(true);

        assert_eq!(
            grid.handle(GridMessage::ToggleSelection(2), &media),
            GridEvent::SelectionToggled {
                index: 2,
                selected: true
            }
        );

        let (media, _) = media.with_selection(2, true).unwrap();
        assert_eq!(
            grid.handle(GridMessage::ToggleSelection(2), &media),
            GridEvent::SelectionToggled {
                index: 2,
                selected: false
            }
        );
    }

    #[test]
    fn test_selection_ignored_without_buttons() {
        let media = media(3);
        let mut grid = GridState::new(false);
        assert_eq!(
            grid.handle(GridMessage::ToggleSelection(0), &media),
            GridEvent::None
        );
    }

    #[test]
    fn test_focus_movement_stays_in_bounds() {
        let media = media(10);
        let mut grid = GridState::new(false);
        grid.columns = 4;

        grid.handle(GridMessage::MoveFocus(FocusMove::Right), &media);
        assert_eq!(grid.focused, Some(0));

        grid.handle(GridMessage::MoveFocus(FocusMove::Down), &media);
        assert_eq!(grid.focused, Some(4));
        grid.handle(GridMessage::MoveFocus(FocusMove::Down), &media);
        assert_eq!(grid.focused, Some(8));
        grid.handle(GridMessage::MoveFocus(FocusMove::Down), &media);
        assert_eq!(grid.focused, Some(8));

        grid.handle(GridMessage::MoveFocus(FocusMove::Right), &media);
        grid.handle(GridMessage::MoveFocus(FocusMove::Right), &media);
        assert_eq!(grid.focused, Some(9));

        grid.handle(GridMessage::MoveFocus(FocusMove::Up), &media);
        assert_eq!(grid.focused, Some(5));

        assert_eq!(
            grid.handle(GridMessage::ActivateFocused, &media),
            GridEvent::PhotoTapped(5)
        );
    }

    #[test]
    fn test_calculate_columns() {
        assert_eq!(calculate_columns(0.0, 128.0, 4.0), 1);
        assert_eq!(calculate_columns(100.0, 128.0, 4.0), 1);
        assert_eq!(calculate_columns(524.0, 128.0, 4.0), 4);
        assert_eq!(calculate_columns(523.0, 128.0, 4.0), 3);
    }

    #[test]
    fn test_resize_updates_columns() {
        let media = media(1);
        let mut grid = GridState::new(false);
        grid.handle(
            GridMessage::Resized {
                width: 1060.0,
                cell_size: 128.0,
            },
            &media,
        );
        assert_eq!(grid.columns, 8);
    }

    fn scrolled_grid(offset_y: f32, height: f32) -> (GridState, MediaList) {
        let media = media(40);
        let mut grid = GridState::new(false);
        grid.handle(
            GridMessage::Resized {
                width: 524.0,
                cell_size: 128.0,
            },
            &media,
        );
        grid.handle(GridMessage::Scrolled { offset_y, height }, &media);
        (grid, media)
    }

    #[test]
    fn test_focus_below_viewport_scrolls_down() {
        // 4 columns, rows 132px apart, 300px tall viewport at the top
        let (mut grid, media) = scrolled_grid(0.0, 300.0);
        grid.focus(4);
        assert_eq!(grid.scroll_target(), None);

        grid.handle(GridMessage::MoveFocus(FocusMove::Down), &media);
        assert_eq!(grid.focused, Some(8));
        // Row 2 spans 264..392 plus padding on both sides
        assert_eq!(grid.scroll_target(), Some(264.0 + 128.0 + 8.0 - 300.0));
    }

    #[test]
    fn test_focus_above_viewport_scrolls_up() {
        let (mut grid, media) = scrolled_grid(600.0, 300.0);
        grid.focus(21);
        grid.handle(GridMessage::MoveFocus(FocusMove::Up), &media);
        assert_eq!(grid.focused, Some(17));
        assert_eq!(grid.scroll_target(), Some(4.0 * 132.0));
    }

    #[test]
    fn test_no_scroll_without_focus() {
        let (grid, _) = scrolled_grid(600.0, 300.0);
        assert_eq!(grid.scroll_target(), None);
    }
}
