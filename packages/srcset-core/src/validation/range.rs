use crate::breakpoints::RangeBreakpoints;
use crate::constants::MAX_WIDTH;
use crate::errors::SrcsetError;

pub(crate) const MISSING_RANGE_MESSAGE: &str = "Either valid (min_width, max_width, max_images) \
     or breakpoints must be provided to the image srcset attribute";

/// 検証済みのレンジ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRange {
    pub min_width: u32,
    pub max_width: u32,
    pub max_images: u32,
}

/// レンジ指定のパラメータを検証する
pub fn validate_range(range: &RangeBreakpoints) -> Result<ValidRange, SrcsetError> {
    let min_width = positive_u32("min_width", range.min_width)?;
    let max_width = positive_u32("max_width", range.max_width)?;
    let max_images = positive_u32("max_images", range.max_images)?;

    if min_width > max_width {
        return Err(SrcsetError::invalid("min_width must be less than max_width"));
    }

    if max_width > MAX_WIDTH {
        tracing::warn!(max_width, limit = MAX_WIDTH, "srcset max_width exceeds limit");
        return Err(SrcsetError::invalid(format!(
            "max_width must be at most {MAX_WIDTH}, got {max_width}"
        )));
    }

    Ok(ValidRange {
        min_width,
        max_width,
        max_images,
    })
}

fn positive_u32(name: &str, value: i64) -> Result<u32, SrcsetError> {
    if value <= 0 {
        tracing::warn!(field = name, value, "non-positive srcset parameter");
        return Err(SrcsetError::invalid(MISSING_RANGE_MESSAGE));
    }

    u32::try_from(value)
        .map_err(|_| SrcsetError::invalid(format!("{name} must be at most {}, got {value}", u32::MAX)))
}
