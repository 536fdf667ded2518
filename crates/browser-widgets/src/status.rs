use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget::{column, container, icon, text},
};

/// Placeholder shown while photos load, or when they could not be loaded.
pub fn status<'a, Message: 'a>(error: Option<&'a str>) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let body = match error {
        Some(error) => column()
            .push(icon::from_name("image-missing-symbolic").size(64))
            .push(text("Could not open photos").size(16))
            .push(text(error).size(12)),
        None => column()
            .push(icon::from_name("content-loading-symbolic").size(48))
            .push(text("Loading...").size(14)),
    };

    container(body.spacing(spacing.space_s).align_x(Alignment::Center))
        .center(Length::Fill)
        .into()
}
