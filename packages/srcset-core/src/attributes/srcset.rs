use std::fmt;

use crate::breakpoints::BreakpointSet;
use crate::constants::ATTRIBUTE_SEPARATOR;
use crate::url::{SrcsetTransformation, UrlBuilder};

/// srcset の1要素（URL と幅）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcsetEntry {
    pub url: String,
    pub width: u32,
}

impl fmt::Display for SrcsetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}w", self.url, self.width)
    }
}

/// ブレークポイントごとに URL を生成する
///
/// `builder` はブレークポイントの順に1回ずつ呼ばれる。
pub fn srcset_entries<B>(breakpoints: &BreakpointSet, builder: &B) -> Vec<SrcsetEntry>
where
    B: UrlBuilder + ?Sized,
{
    srcset_entries_with(breakpoints, builder, None)
}

/// 各候補に `transformation` を適用して URL を生成する
pub fn srcset_entries_with<B>(
    breakpoints: &BreakpointSet,
    builder: &B,
    transformation: Option<&SrcsetTransformation>,
) -> Vec<SrcsetEntry>
where
    B: UrlBuilder + ?Sized,
{
    breakpoints
        .iter()
        .map(|width| SrcsetEntry {
            url: builder.url_for_candidate(width, transformation),
            width,
        })
        .collect()
}

/// srcset 属性の値を生成する
pub fn build_srcset_attribute<B>(breakpoints: &BreakpointSet, builder: &B) -> String
where
    B: UrlBuilder + ?Sized,
{
    build_srcset_attribute_with(breakpoints, builder, None)
}

pub fn build_srcset_attribute_with<B>(
    breakpoints: &BreakpointSet,
    builder: &B,
    transformation: Option<&SrcsetTransformation>,
) -> String
where
    B: UrlBuilder + ?Sized,
{
    srcset_entries_with(breakpoints, builder, transformation)
        .iter()
        .map(SrcsetEntry::to_string)
        .collect::<Vec<_>>()
        .join(ATTRIBUTE_SEPARATOR)
}
