use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text, Button, Container};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// Pill-shaped row of mutually exclusive options; used for status tabs and
/// view switches.
pub fn segmented_control<'a, T, M>(
    options: &[(&'a str, T)],
    current: T,
    on_select: impl Fn(T) -> M,
) -> Container<'a, M>
where
    T: Copy + PartialEq + 'a,
    M: Clone + 'a,
{
    let last = options.len().saturating_sub(1);
    let segments = options
        .iter()
        .enumerate()
        .fold(row![].spacing(0), |segments, (index, (label, value))| {
            let position = match (index == 0, index == last) {
                (true, true) => SegmentPosition::Only,
                (true, false) => SegmentPosition::First,
                (false, true) => SegmentPosition::Last,
                (false, false) => SegmentPosition::Middle,
            };
            segments.push(
                segment(*label, *value == current, position, on_select(*value))
                    .width(Length::FillPortion(1)),
            )
        });

    container(segments)
        .padding(3)
        .width(Length::Fill)
        .style(segmented_container_style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Only,
    First,
    Middle,
    Last,
}

fn segment<'a, M: Clone + 'a>(
    label: &'a str,
    is_active: bool,
    position: SegmentPosition,
    on_press: M,
) -> Button<'a, M> {
    let content = container(text(label).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    button(content)
        .padding(0)
        .on_press(on_press)
        .style(move |theme, status| segmented_button_style(theme, status, is_active, position))
}

fn segmented_container_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segmented_button_style(
    theme: &Theme,
    status: button::Status,
    is_active: bool,
    position: SegmentPosition,
) -> button::Style {
    let palette = theme.extended_palette();

    let mut background_color = if is_active {
        palette.primary.strong.color
    } else {
        palette.background.strong.color.scale_alpha(0.4)
    };

    match status {
        button::Status::Hovered => {
            background_color = if is_active {
                palette.primary.base.color
            } else {
                palette.background.base.color.scale_alpha(0.8)
            };
        }
        button::Status::Pressed => {
            background_color = if is_active {
                palette.primary.base.color.scale_alpha(0.9)
            } else {
                palette.background.base.color.scale_alpha(0.9)
            };
        }
        button::Status::Disabled => {
            background_color = background_color.scale_alpha(0.5);
        }
        button::Status::Active => {}
    }

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    let (outer, inner) = (999.0, 10.0);
    let radius = match position {
        SegmentPosition::Only => iced::border::Radius::new(outer),
        SegmentPosition::First => iced::border::Radius {
            top_left: outer,
            top_right: inner,
            bottom_right: inner,
            bottom_left: outer,
        },
        SegmentPosition::Middle => iced::border::Radius::new(inner),
        SegmentPosition::Last => iced::border::Radius {
            top_left: inner,
            top_right: outer,
            bottom_right: outer,
            bottom_left: inner,
        },
    };

    button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius,
        },
        shadow: Shadow::default(),
    }
}
