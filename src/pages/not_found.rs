use crate::message::Message;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

pub fn view(path: &str) -> Element<'_, Message> {
    container(
        column![
            text("404").size(64),
            text("Oops! Page not found").size(22),
            text(format!("No page is registered at \"{path}\".")).size(14),
            button("Return to Home")
                .style(button::primary)
                .on_press(Message::Navigate("/".to_string())),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}
