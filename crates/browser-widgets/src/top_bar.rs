use cosmic::{
    Element,
    iced::{Alignment, Color, Length},
    iced_widget::container::Style,
    theme,
    widget::{Space, container, text},
};

/// Header overlay. `opacity` fades both the backdrop and the title.
pub fn top_bar<'a, Message: 'a>(height: f32, opacity: f32, title: String) -> Element<'a, Message> {
    if opacity <= 0.0 {
        return Space::new(Length::Fill, Length::Fixed(height)).into();
    }

    let opacity = opacity.min(1.0);

    container(text::title4(title))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .class(theme::Container::custom(move |_theme| {
            let foreground = Color {
                a: opacity,
                ..Color::WHITE
            };
            Style {
                icon_color: Some(foreground),
                text_color: Some(foreground),
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6 * opacity).into()),
                ..Style::default()
            }
        }))
        .into()
}
