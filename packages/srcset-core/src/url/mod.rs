mod builder;
mod format;
mod path;
mod scheme;
mod transformation;

pub use builder::{UrlBuilder, WidthParamUrlBuilder};
pub use format::OutputFormat;
pub use path::encode_key;
pub use scheme::Scheme;
pub use transformation::SrcsetTransformation;
