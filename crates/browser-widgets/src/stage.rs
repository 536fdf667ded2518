//! Vertical stage holding the grid above the full-screen viewer.
//!
//! The stage is a scrollable whose offset the app drives from the
//! transition progress: offset 0 shows the grid, one page plus the toolbar
//! shows the viewer. Each page starts below the toolbar, which is drawn
//! over the stage.

use browser_core::TOOLBAR_HEIGHT;
use cosmic::{
    Element,
    iced::{Length, Padding},
    iced_widget::scrollable::{Direction, Scrollbar, Viewport},
    widget::{Id, Space, column, container, scrollable},
};

pub const STAGE_SCROLL_ID: &str = "photo-browser-stage";

/// Inset that keeps page content clear of the toolbar overlay.
pub fn page_padding() -> Padding {
    Padding {
        top: TOOLBAR_HEIGHT,
        ..Padding::ZERO
    }
}

pub fn stage<'a, Message: 'a>(
    grid: Element<'a, Message>,
    viewer: Element<'a, Message>,
    page_height: f32,
    on_scroll: impl Fn(Viewport) -> Message + 'a,
) -> Element<'a, Message> {
    let page = Length::Fixed(page_height);

    let pages = column()
        .push(
            container(grid)
                .padding(page_padding())
                .width(Length::Fill)
                .height(page),
        )
        .push(Space::new(Length::Fill, Length::Fixed(TOOLBAR_HEIGHT)))
        .push(
            container(viewer)
                .padding(page_padding())
                .width(Length::Fill)
                .height(page),
        );

    scrollable(pages)
        .id(Id::new(STAGE_SCROLL_ID))
        .direction(Direction::Vertical(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(on_scroll)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_start_below_toolbar() {
        let padding = page_padding();
        assert_eq!(padding.top, TOOLBAR_HEIGHT);
        assert_eq!(padding.bottom, 0.0);
        assert_eq!(padding.left, 0.0);
        assert_eq!(padding.right, 0.0);
    }
}
