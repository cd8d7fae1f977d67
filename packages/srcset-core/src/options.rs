use serde::{Deserialize, Serialize};

use crate::breakpoints::{BreakpointRequest, RangeBreakpoints};
use crate::errors::SrcsetError;
use crate::url::SrcsetTransformation;
use crate::validation::MISSING_RANGE_MESSAGE;

/// srcset の設定オプション
///
/// | option     | effect                                   |
/// |------------|------------------------------------------|
/// | breakpoints| 明示的な幅のリスト。レンジ計算を省略する |
/// | min_width  | レンジの下限                             |
/// | max_width  | レンジの上限。常に最後の要素になる       |
/// | max_images | 生成する枚数。1 なら max_width のみ      |
/// | sizes      | true のとき sizes 属性も生成する         |
/// | transformation | 各候補の URL に適用する変換          |
///
/// 未知のキーはエラーになる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SrcsetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_images: Option<i64>,
    #[serde(default)]
    pub sizes: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<SrcsetTransformation>,
}

impl SrcsetOptions {
    pub fn with_breakpoints(breakpoints: Vec<u32>) -> Self {
        Self {
            breakpoints: Some(breakpoints),
            ..Self::default()
        }
    }

    pub fn with_range(min_width: i64, max_width: i64, max_images: i64) -> Self {
        Self {
            min_width: Some(min_width),
            max_width: Some(max_width),
            max_images: Some(max_images),
            ..Self::default()
        }
    }

    /// sizes 属性の生成を有効にする
    pub fn sizes(mut self, sizes: bool) -> Self {
        self.sizes = sizes;
        self
    }

    /// 候補の URL に適用する変換を指定する
    pub fn transformation(mut self, transformation: SrcsetTransformation) -> Self {
        self.transformation = Some(transformation);
        self
    }

    /// どのキーも指定されていないか
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// オプションから BreakpointRequest を組み立てる
    ///
    /// `breakpoints` があればそれを優先し、レンジ指定は無視する。
    /// `transformation` もここで検証する。
    pub fn to_request(&self) -> Result<BreakpointRequest, SrcsetError> {
        if let Some(transformation) = &self.transformation {
            transformation.validate()?;
        }

        if let Some(breakpoints) = &self.breakpoints {
            return Ok(BreakpointRequest::Explicit(breakpoints.clone()));
        }

        match (self.min_width, self.max_width, self.max_images) {
            (Some(min_width), Some(max_width), Some(max_images)) => {
                Ok(BreakpointRequest::Range(RangeBreakpoints {
                    min_width,
                    max_width,
                    max_images,
                }))
            }
            _ => {
                tracing::warn!(options = ?self, "incomplete srcset range options");
                Err(SrcsetError::invalid(MISSING_RANGE_MESSAGE))
            }
        }
    }
}

/// srcset の指定
///
/// 文字列はそのまま srcset 属性として使われる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SrcsetSpec {
    Prebuilt(String),
    Options(SrcsetOptions),
}

impl SrcsetSpec {
    /// JSON 文字列から設定を読み込む
    ///
    /// 数値以外（文字列、小数など）のレンジ値は InvalidInput になる。
    pub fn from_json(json: &str) -> Result<Self, SrcsetError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse srcset options");
            SrcsetError::invalid(format!("{MISSING_RANGE_MESSAGE}: {e}"))
        })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Prebuilt(srcset) => srcset.is_empty(),
            Self::Options(options) => options.is_empty(),
        }
    }
}

impl From<SrcsetOptions> for SrcsetSpec {
    fn from(options: SrcsetOptions) -> Self {
        Self::Options(options)
    }
}

impl From<&str> for SrcsetSpec {
    fn from(srcset: &str) -> Self {
        Self::Prebuilt(srcset.to_string())
    }
}
