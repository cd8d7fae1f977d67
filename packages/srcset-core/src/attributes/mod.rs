mod responsive;
mod sizes;
mod srcset;

pub use responsive::{responsive_attributes, sizes_attribute, srcset_attribute, ResponsiveAttributes};
pub use sizes::build_sizes_attribute;
pub use srcset::{
    build_srcset_attribute, build_srcset_attribute_with, srcset_entries, srcset_entries_with,
    SrcsetEntry,
};
