use crate::errors::SrcsetError;

/// 品質パラメータ `q` は 1-100
pub fn validate_quality(quality: u8) -> Result<u8, SrcsetError> {
    if !(1..=100).contains(&quality) {
        return Err(SrcsetError::invalid(format!(
            "quality must be 1-100, got {quality}"
        )));
    }
    Ok(quality)
}
