//! Paged full-screen viewer.

use crate::grid::selection_icon;
use browser_core::{FullScreenMessage, FullScreenState};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::stack,
    theme,
    widget::{
        Space, button, column, container, horizontal_space, icon, image, image::Handle,
        mouse_area, row, text,
    },
};
use shared::MediaList;

pub fn full_screen<'a>(
    media: &'a MediaList,
    state: &FullScreenState,
) -> Element<'a, FullScreenMessage> {
    let Some(item) = media.get(state.page()) else {
        return container(text("No photo"))
            .center(Length::Fill)
            .into();
    };

    let photo = mouse_area(
        container(
            image(Handle::from_path(&item.photo))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill),
    )
    .on_press(FullScreenMessage::PhotoTapped);

    if !state.controls_visible() {
        return photo.into();
    }

    let controls = column()
        .push(Space::new(Length::Fill, Length::Fill))
        .push(bottom_bar(item.caption.as_deref(), item.selected, state))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![photo, controls].into()
}

fn bottom_bar<'a>(
    caption: Option<&'a str>,
    selected: bool,
    state: &FullScreenState,
) -> Element<'a, FullScreenMessage> {
    let spacing = theme::active().cosmic().spacing;
    let mut bar = row()
        .spacing(spacing.space_xs)
        .padding(spacing.space_xs)
        .align_y(Alignment::Center)
        .width(Length::Fill);

    if state.shows_grid_button() {
        bar = bar.push(
            button::icon(icon::from_name("view-grid-symbolic"))
                .on_press(FullScreenMessage::GridButton),
        );
    }

    if state.shows_nav_arrows() {
        bar = bar.push(
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press_maybe(state.has_previous().then_some(FullScreenMessage::Previous)),
        );
    }

    bar = bar
        .push(horizontal_space())
        .push(text::body(caption.unwrap_or_default()))
        .push(horizontal_space());

    if state.shows_nav_arrows() {
        bar = bar.push(
            button::icon(icon::from_name("go-next-symbolic"))
                .on_press_maybe(state.has_next().then_some(FullScreenMessage::Next)),
        );
    }

    if state.shows_selection_button() {
        bar = bar.push(
            button::icon(icon::from_name(selection_icon(selected)))
                .on_press(FullScreenMessage::ToggleSelection),
        );
    }

    if state.shows_action_button() {
        bar = bar.push(
            button::icon(icon::from_name("document-send-symbolic"))
                .on_press(FullScreenMessage::ActionButton),
        );
    }

    container(bar)
        .width(Length::Fill)
        .class(theme::Container::Dialog)
        .into()
}
