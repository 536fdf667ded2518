//! Thumbnail grid.

use browser_core::{GridMessage, GridState, grid::GRID_SPACING};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::stack,
    theme,
    widget::{Id, button, column, container, icon, image, image::Handle, row, scrollable},
};
use shared::{MediaItem, MediaList};

pub const GRID_SCROLL_ID: &str = "photo-grid-scroll";

/// Render the media list as rows of square thumbnails.
pub fn grid<'a>(media: &'a MediaList, state: &GridState, cell_size: u32) -> Element<'a, GridMessage> {
    let cols = state.columns.max(1);
    let show_selection = state.display_selection_buttons();

    let mut rows = column().spacing(GRID_SPACING);

    for (row_idx, chunk) in media.items().chunks(cols).enumerate() {
        let mut cells = row().spacing(GRID_SPACING);

        for (col_idx, item) in chunk.iter().enumerate() {
            let index = row_idx * cols + col_idx;
            let focused = state.focused == Some(index);
            cells = cells.push(cell(item, index, cell_size, focused, show_selection));
        }

        rows = rows.push(cells);
    }

    scrollable(container(rows).width(Length::Fill).padding(GRID_SPACING))
        .id(Id::new(GRID_SCROLL_ID))
        .on_scroll(|viewport| GridMessage::Scrolled {
            offset_y: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn cell<'a>(
    item: &'a MediaItem,
    index: usize,
    cell_size: u32,
    focused: bool,
    show_selection: bool,
) -> Element<'a, GridMessage> {
    let size = cell_size as f32;

    let thumb = image(Handle::from_path(item.thumb_path()))
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size));

    let tappable = button::custom(thumb)
        .padding(0)
        .selected(focused)
        .class(theme::Button::Image)
        .on_press(GridMessage::PhotoTapped(index));

    if !show_selection {
        return tappable.into();
    }

    let badge = container(
        button::icon(icon::from_name(selection_icon(item.selected)))
            .on_press(GridMessage::ToggleSelection(index)),
    )
    .width(Length::Fixed(size))
    .align_x(Alignment::End);

    stack![tappable, badge].into()
}

pub(crate) fn selection_icon(selected: bool) -> &'static str {
    if selected {
        "checkbox-checked-symbolic"
    } else {
        "checkbox-symbolic"
    }
}
