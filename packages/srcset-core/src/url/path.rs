use crate::constants::MAX_KEY_LENGTH;
use crate::errors::SrcsetError;

/// オブジェクトキーを URL パスに埋め込める形に変換する
///
/// セグメントごとにパーセントエンコードする。空のセグメントや `.` / `..` は
/// パスの意味を変えてしまうため InvalidInput とする。
pub fn encode_key(key: &str) -> Result<String, SrcsetError> {
    if key.is_empty() || key.len() > MAX_KEY_LENGTH {
        return Err(SrcsetError::invalid(format!(
            "key length must be 1-{MAX_KEY_LENGTH}, got {}",
            key.len()
        )));
    }

    let segments = key
        .split('/')
        .map(|segment| match segment {
            "" | "." | ".." => Err(SrcsetError::invalid(format!(
                "key has an empty or relative segment: {key}"
            ))),
            segment => Ok(urlencoding::encode(segment).into_owned()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(segments.join("/"))
}
