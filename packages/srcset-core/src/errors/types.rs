use thiserror::Error;

/// srcset 生成の統合エラー型
///
/// 入力の検証に失敗した場合のみ発生する。部分的な結果は返さない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SrcsetError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SrcsetError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
