use crate::message::Message;
use crate::model::toast::{Toast, ToastKind};
use crate::model::Toasts;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Background, Element, Length, Theme};

/// Strip of live toasts, newest last.
pub fn toast_strip(toasts: &Toasts) -> Option<Element<'_, Message>> {
    if toasts.is_empty() {
        return None;
    }

    let strip = toasts
        .iter()
        .fold(Column::new().spacing(6), |strip, toast| strip.push(toast_card(toast)));

    Some(container(strip).padding([8, 20]).width(Length::Fill).into())
}

fn toast_card(toast: &Toast) -> Element<'_, Message> {
    let kind = toast.kind;

    container(
        row![
            column![
                text(&toast.title).size(15),
                text(&toast.description).size(13).wrapping(Wrapping::Word),
            ]
            .spacing(2)
            .width(Length::Fill),
            button("×")
                .style(button::text)
                .on_press(Message::DismissToast(toast.id)),
        ]
        .spacing(8),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(move |theme: &Theme| toast_style(theme, kind))
    .into()
}

fn toast_style(theme: &Theme, kind: ToastKind) -> container::Style {
    let palette = theme.extended_palette();
    let pair = match kind {
        ToastKind::Info => palette.background.strong,
        ToastKind::Success => palette.success.weak,
        ToastKind::Error => palette.danger.weak,
    };

    container::Style {
        text_color: Some(pair.text),
        background: Some(Background::Color(pair.color)),
        border: iced::border::Border {
            radius: iced::border::Radius::new(8.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
