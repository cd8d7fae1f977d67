/// レンジ指定（呼び出し元から渡された生の値）
///
/// 値の検証は [`crate::compute_breakpoints`] で行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBreakpoints {
    pub min_width: i64,
    pub max_width: i64,
    pub max_images: i64,
}

/// ブレークポイントの指定方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakpointRequest {
    /// 明示的な幅のリスト。検証・ソート・重複除去は行わない
    Explicit(Vec<u32>),
    /// 最小幅・最大幅・枚数から等間隔に計算する
    Range(RangeBreakpoints),
}

impl BreakpointRequest {
    pub fn explicit(widths: Vec<u32>) -> Self {
        Self::Explicit(widths)
    }

    pub fn range(min_width: i64, max_width: i64, max_images: i64) -> Self {
        Self::Range(RangeBreakpoints {
            min_width,
            max_width,
            max_images,
        })
    }
}
