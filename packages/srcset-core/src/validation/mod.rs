mod quality;
mod range;

pub(crate) use range::MISSING_RANGE_MESSAGE;

pub use quality::validate_quality;
pub use range::{validate_range, ValidRange};
