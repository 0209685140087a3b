use super::card::{badge, Tone};
use iced::widget::Container;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Online,
    Offline,
    Syncing,
    Error,
}

impl SystemStatus {
    fn glyph(self) -> &'static str {
        match self {
            SystemStatus::Online => "✔",
            SystemStatus::Offline => "✖",
            SystemStatus::Syncing => "↻",
            SystemStatus::Error => "!",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SystemStatus::Online => "Online",
            SystemStatus::Offline => "Offline",
            SystemStatus::Syncing => "Syncing",
            SystemStatus::Error => "Error",
        }
    }

    fn tone(self) -> Tone {
        match self {
            SystemStatus::Online => Tone::Success,
            SystemStatus::Offline => Tone::Neutral,
            SystemStatus::Syncing => Tone::Warning,
            SystemStatus::Error => Tone::Danger,
        }
    }
}

pub fn status_indicator<'a, M: 'a>(status: SystemStatus, show_text: bool) -> Container<'a, M> {
    let label = if show_text {
        format!("{} {}", status.glyph(), status.label())
    } else {
        status.glyph().to_string()
    };
    badge(label, status.tone())
}
