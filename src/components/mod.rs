pub mod card;
pub mod segmented_toggle;
pub mod status_indicator;

pub use card::{badge, card, page_header, Tone};
pub use segmented_toggle::segmented_control;
pub use status_indicator::{status_indicator, SystemStatus};
