pub mod formatting;

pub use formatting::{byte_size, long_date, percent, preview, short_date};
