use serde::{Deserialize, Serialize};

use crate::errors::SrcsetError;
use crate::url::format::OutputFormat;
use crate::validation::validate_quality;

/// srcset の各候補に適用する変換
///
/// 指定された項目はビルダー本来の設定を置き換える。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SrcsetTransformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

impl SrcsetTransformation {
    pub fn validate(&self) -> Result<(), SrcsetError> {
        if let Some(quality) = self.quality {
            validate_quality(quality)?;
        }
        Ok(())
    }
}
