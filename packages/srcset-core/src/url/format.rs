use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SrcsetError;

/// 出力フォーマット（クエリパラメータ `f`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[serde(alias = "jpg")]
    Jpeg,
    Png,
    WebP,
    Avif,
}

impl OutputFormat {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::WebP => "webp",
            Self::Avif => "avif",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SrcsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Jpeg, Self::Png, Self::WebP, Self::Avif]
            .into_iter()
            .find(|format| format.as_param().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("jpg").then_some(Self::Jpeg))
            .ok_or_else(|| SrcsetError::invalid(format!("unsupported format: {s}")))
    }
}
