use crate::config::{APP_SUBTITLE, APP_TITLE};
use crate::message::Message;
use crate::model::navigation::{active_item, bottom_bar_items, NAV_ITEMS};
use crate::model::NavItem;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Background, Element, Length, Theme};

const RAIL_WIDTH: f32 = 256.0;
const RAIL_COLLAPSED_WIDTH: f32 = 72.0;

/// Side rail listing every entry. Collapsed, it shows icons only.
pub fn side_rail(current_path: &str, collapsed: bool) -> Element<'_, Message> {
    let active = active_item(current_path);

    let brand: Element<'_, Message> = if collapsed {
        text("✚").size(24).into()
    } else {
        column![text(APP_TITLE).size(22), text(APP_SUBTITLE).size(12)]
            .spacing(2)
            .into()
    };

    let toggle_label = if collapsed { "»" } else { "«" };
    let header = row![
        container(brand).width(Length::Fill),
        button(toggle_label)
            .style(button::text)
            .on_press(Message::ToggleRail),
    ]
    .align_y(Alignment::Center);

    let entries = NAV_ITEMS.iter().fold(Column::new().spacing(4), |list, item| {
        let is_active = active.is_some_and(|current| current.path == item.path);
        list.push(rail_entry(item, is_active, collapsed))
    });

    let mut rail = column![header, entries].spacing(20);
    if !collapsed {
        rail = rail.push(Space::with_height(Length::Fill)).push(
            text("Powered by YOLOv8 & Advanced AI")
                .size(11)
                .wrapping(Wrapping::Word),
        );
    }

    let width = if collapsed {
        RAIL_COLLAPSED_WIDTH
    } else {
        RAIL_WIDTH
    };

    container(rail)
        .padding(12)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(rail_style)
        .into()
}

fn rail_entry(item: &'static NavItem, is_active: bool, collapsed: bool) -> Element<'static, Message> {
    let content: Element<'static, Message> = if collapsed {
        text(item.icon).size(20).into()
    } else {
        let mut heading = row![text(item.icon).size(18), text(item.label).width(Length::Fill)]
            .spacing(10)
            .align_y(Alignment::Center);
        if let Some(badge) = item.badge {
            heading = heading.push(crate::components::badge(badge, crate::components::Tone::Primary));
        }
        column![heading, text(item.description).size(11)]
            .spacing(2)
            .into()
    };

    button(content)
        .width(Length::Fill)
        .padding([8, 10])
        .style(move |theme, status| {
            if is_active {
                button::primary(theme, status)
            } else {
                button::text(theme, status)
            }
        })
        .on_press(Message::Navigate(item.path.to_string()))
        .into()
}

/// Fixed bar for narrow windows with the first few entries.
pub fn bottom_bar(current_path: &str) -> Element<'_, Message> {
    let active = active_item(current_path);

    let items = bottom_bar_items()
        .iter()
        .fold(Row::new().spacing(4), |bar, item| {
            let is_active = active.is_some_and(|current| current.path == item.path);
            bar.push(
                button(
                    column![text(item.icon).size(18), text(item.label).size(11)]
                        .align_x(Alignment::Center)
                        .spacing(2),
                )
                .width(Length::FillPortion(1))
                .style(move |theme, status| {
                    if is_active {
                        button::primary(theme, status)
                    } else {
                        button::text(theme, status)
                    }
                })
                .on_press(Message::Navigate(item.path.to_string())),
            )
        });

    container(items)
        .padding(6)
        .width(Length::Fill)
        .style(rail_style)
        .into()
}

fn rail_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: iced::border::Radius::new(0.0),
        },
        ..Default::default()
    }
}
