pub mod navigation;
pub mod toasts;

pub use navigation::{bottom_bar, side_rail};
pub use toasts::toast_strip;
