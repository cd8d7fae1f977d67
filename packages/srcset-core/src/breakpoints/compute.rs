use crate::breakpoints::request::BreakpointRequest;
use crate::errors::SrcsetError;
use crate::validation::{validate_range, ValidRange};

/// 計算済みのブレークポイント列（ピクセル幅）
///
/// レンジ指定から得た場合は昇順で、末尾は必ず `max_width` になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointSet {
    widths: Vec<u32>,
}

impl BreakpointSet {
    pub fn as_slice(&self) -> &[u32] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn first(&self) -> Option<u32> {
        self.widths.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.widths.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.widths.iter().copied()
    }
}

impl<'a> IntoIterator for &'a BreakpointSet {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.widths.iter()
    }
}

/// ブレークポイントを計算する
///
/// 明示的なリストはそのまま返す。レンジ指定の場合は
/// `min_width` から `ceil((max - min) / (max_images - 1))` 刻みで
/// `max_width` 未満の値を列挙し、最後に `max_width` を追加する。
/// `max_images == 1` の場合は `max_width` のみになる。
pub fn compute_breakpoints(request: &BreakpointRequest) -> Result<BreakpointSet, SrcsetError> {
    let range = match request {
        BreakpointRequest::Explicit(widths) => {
            return Ok(BreakpointSet {
                widths: widths.clone(),
            });
        }
        BreakpointRequest::Range(range) => validate_range(range)?,
    };

    let widths = compute_range(range);
    tracing::debug!(
        min_width = range.min_width,
        max_width = range.max_width,
        max_images = range.max_images,
        breakpoints = ?widths,
        "computed srcset breakpoints"
    );

    Ok(BreakpointSet { widths })
}

fn compute_range(range: ValidRange) -> Vec<u32> {
    let ValidRange {
        mut min_width,
        max_width,
        max_images,
    } = range;

    // 1枚だけの場合は最大幅のみ
    if max_images == 1 {
        min_width = max_width;
    }

    let span = u64::from(max_width - min_width);
    let steps = u64::from(max_images.saturating_sub(1).max(1));
    let step_size = span.div_ceil(steps);

    let mut widths = Vec::new();
    let mut current = u64::from(min_width);
    // ループ内で max_width に到達しないため、末尾の max_width は重複しない
    while current < u64::from(max_width) {
        widths.push(current as u32);
        current += step_size;
    }
    widths.push(max_width);

    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min_width: i64, max_width: i64, max_images: i64) -> Vec<u32> {
        compute_breakpoints(&BreakpointRequest::range(min_width, max_width, max_images))
            .unwrap()
            .as_slice()
            .to_vec()
    }

    #[test]
    fn test_even_steps() {
        assert_eq!(range(100, 300, 3), vec![100, 200, 300]);
    }

    #[test]
    fn test_uneven_steps() {
        // ceil(150 / 2) = 75
        assert_eq!(range(100, 250, 3), vec![100, 175, 250]);
        // ceil(100 / 3) = 34
        assert_eq!(range(100, 200, 4), vec![100, 134, 168, 200]);
    }

    #[test]
    fn test_single_image() {
        assert_eq!(range(100, 300, 1), vec![300]);
        assert_eq!(range(1, 1, 1), vec![1]);
    }

    #[test]
    fn test_min_equals_max() {
        assert_eq!(range(375, 375, 1), vec![375]);
        assert_eq!(range(375, 375, 10), vec![375]);
    }

    #[test]
    fn test_more_images_than_pixels() {
        // 刻み幅は最低 1
        assert_eq!(range(10, 13, 100), vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_max_width_appears_once() {
        for (min_width, max_width, max_images) in
            [(100, 300, 3), (100, 250, 3), (50, 1000, 20), (1, 2, 2), (999, 1000, 7)]
        {
            let widths = range(min_width, max_width, max_images);
            let max = max_width as u32;
            assert_eq!(widths.iter().filter(|&&w| w == max).count(), 1);
            assert_eq!(widths.last(), Some(&max));
        }
    }

    #[test]
    fn test_non_decreasing_within_bounds() {
        let widths = range(320, 1920, 6);
        assert!(widths.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(widths.first(), Some(&320));
        assert_eq!(widths.last(), Some(&1920));
        assert!(widths.len() <= 6);
    }

    #[test]
    fn test_invalid_range() {
        assert!(compute_breakpoints(&BreakpointRequest::range(0, 300, 3)).is_err());
        assert!(compute_breakpoints(&BreakpointRequest::range(100, 0, 3)).is_err());
        assert!(compute_breakpoints(&BreakpointRequest::range(100, 300, 0)).is_err());
        assert!(compute_breakpoints(&BreakpointRequest::range(100, 300, -3)).is_err());
        assert!(compute_breakpoints(&BreakpointRequest::range(301, 300, 3)).is_err());
    }

    #[test]
    fn test_explicit_is_verbatim() {
        let unsorted = compute_breakpoints(&BreakpointRequest::explicit(vec![800, 200, 200]))
            .unwrap();
        assert_eq!(unsorted.as_slice(), &[800, 200, 200]);

        let empty = compute_breakpoints(&BreakpointRequest::explicit(Vec::new())).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_set_accessors() {
        let set = compute_breakpoints(&BreakpointRequest::range(100, 300, 3)).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.first(), Some(100));
        assert_eq!(set.last(), Some(300));
        assert_eq!(set.iter().sum::<u32>(), 600);
        assert_eq!((&set).into_iter().count(), 3);
    }
}
