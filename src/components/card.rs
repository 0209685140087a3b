use iced::widget::{column, container, row, text, Column, Container};
use iced::{Background, Element, Length, Theme};

/// Rounded surface that groups a titled block of content.
pub fn card<'a, M: 'a>(
    title: impl text::IntoFragment<'a>,
    body: impl Into<Element<'a, M>>,
) -> Container<'a, M> {
    container(column![text(title).size(18), body.into()].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .style(card_style)
}

pub fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color.scale_alpha(0.35))),
        border: iced::border::Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: iced::border::Radius::new(12.0),
        },
        ..Default::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
}

/// Small rounded label, e.g. a status or a confidence score.
pub fn badge<'a, M: 'a>(label: impl text::IntoFragment<'a>, tone: Tone) -> Container<'a, M> {
    container(text(label).size(12))
        .padding([2, 8])
        .style(move |theme: &Theme| badge_style(theme, tone))
}

fn badge_style(theme: &Theme, tone: Tone) -> container::Style {
    let palette = theme.extended_palette();
    let pair = match tone {
        Tone::Neutral => palette.background.strong,
        Tone::Primary => palette.primary.strong,
        Tone::Success => palette.success.strong,
        Tone::Warning => palette.secondary.strong,
        Tone::Danger => palette.danger.strong,
    };

    container::Style {
        text_color: Some(pair.text),
        background: Some(Background::Color(pair.color)),
        border: iced::border::Border {
            radius: iced::border::Radius::new(999.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page heading with a subtitle and optional trailing controls.
pub fn page_header<'a, M: 'a>(
    title: &'a str,
    subtitle: &'a str,
    trailing: Option<Element<'a, M>>,
) -> Element<'a, M> {
    let heading: Column<'a, M> = column![text(title).size(30), text(subtitle).size(14)].spacing(4);
    let mut header = row![heading.width(Length::Fill)].spacing(12);
    if let Some(trailing) = trailing {
        header = header.push(trailing);
    }
    header.into()
}
