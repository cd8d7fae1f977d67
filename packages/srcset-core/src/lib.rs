pub mod attributes;
pub mod breakpoints;
pub mod constants;
pub mod errors;
pub mod options;
pub mod url;
pub mod validation;

// 公開API
pub use attributes::{
    build_sizes_attribute, build_srcset_attribute, build_srcset_attribute_with,
    responsive_attributes, sizes_attribute, srcset_attribute, srcset_entries, srcset_entries_with,
    ResponsiveAttributes, SrcsetEntry,
};
pub use breakpoints::{compute_breakpoints, BreakpointRequest, BreakpointSet, RangeBreakpoints};
pub use constants::{ATTRIBUTE_SEPARATOR, MAX_KEY_LENGTH, MAX_WIDTH};
pub use errors::SrcsetError;
pub use options::{SrcsetOptions, SrcsetSpec};
pub use url::{encode_key, OutputFormat, Scheme, SrcsetTransformation, UrlBuilder, WidthParamUrlBuilder};
pub use validation::{validate_quality, validate_range, ValidRange};
