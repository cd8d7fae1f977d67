use crate::breakpoints::BreakpointSet;
use crate::constants::ATTRIBUTE_SEPARATOR;

/// sizes 属性の値を生成する
pub fn build_sizes_attribute(breakpoints: &BreakpointSet) -> String {
    breakpoints
        .iter()
        .map(|width| format!("(max-width: {width}px) {width}px"))
        .collect::<Vec<_>>()
        .join(ATTRIBUTE_SEPARATOR)
}
