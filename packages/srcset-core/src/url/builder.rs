use crate::constants::MEDIA_BASE_URL_ENV;
use crate::errors::SrcsetError;
use crate::url::format::OutputFormat;
use crate::url::path::encode_key;
use crate::url::scheme::Scheme;
use crate::url::transformation::SrcsetTransformation;
use crate::validation::validate_quality;

/// 幅を指定して画像 URL を生成する
pub trait UrlBuilder {
    fn url_for_width(&self, width: u32) -> String;

    /// srcset 候補の URL を生成する
    ///
    /// 変換を解釈しないビルダーは `url_for_width` と同じ結果を返す。
    fn url_for_candidate(
        &self,
        width: u32,
        _transformation: Option<&SrcsetTransformation>,
    ) -> String {
        self.url_for_width(width)
    }
}

impl<F> UrlBuilder for F
where
    F: Fn(u32) -> String,
{
    fn url_for_width(&self, width: u32) -> String {
        self(width)
    }
}

/// `w` / `f` / `q` クエリパラメータで変換を指定する URL ビルダー
///
/// `https://{host}/{key}?w=400&f=webp&q=80` の形式で URL を生成する。
#[derive(Debug, Clone)]
pub struct WidthParamUrlBuilder {
    host: String,
    path: String,
    scheme: Scheme,
    format: Option<OutputFormat>,
    quality: Option<u8>,
}

impl WidthParamUrlBuilder {
    /// 新しい WidthParamUrlBuilder を作成する
    ///
    /// `host` にスキームが含まれていれば取り除き、`scheme` を優先する。
    pub fn new(host: &str, key: &str, scheme: Scheme) -> Result<Self, SrcsetError> {
        let path = encode_key(key)?;

        let host = host
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        if host.is_empty() {
            return Err(SrcsetError::invalid("host is empty"));
        }

        Ok(Self {
            host: host.to_string(),
            path,
            scheme,
            format: None,
            quality: None,
        })
    }

    /// 環境変数から WidthParamUrlBuilder を作成する
    ///
    /// 必須の環境変数:
    /// - MEDIA_BASE_URL
    pub fn from_env(key: &str, scheme: Scheme) -> Result<Self, SrcsetError> {
        let host = std::env::var(MEDIA_BASE_URL_ENV)
            .map_err(|_| SrcsetError::invalid(format!("{MEDIA_BASE_URL_ENV} is not set")))?;
        Self::new(&host, key, scheme)
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn quality(mut self, quality: u8) -> Result<Self, SrcsetError> {
        self.quality = Some(validate_quality(quality)?);
        Ok(self)
    }

    fn build(&self, width: u32, format: Option<OutputFormat>, quality: Option<u8>) -> String {
        let mut url = format!(
            "{}://{}/{}?w={width}",
            self.scheme.as_str(),
            self.host,
            self.path
        );
        if let Some(format) = format {
            url.push_str("&f=");
            url.push_str(format.as_param());
        }
        if let Some(quality) = quality {
            url.push_str(&format!("&q={quality}"));
        }
        url
    }
}

impl UrlBuilder for WidthParamUrlBuilder {
    fn url_for_width(&self, width: u32) -> String {
        self.build(width, self.format, self.quality)
    }

    fn url_for_candidate(
        &self,
        width: u32,
        transformation: Option<&SrcsetTransformation>,
    ) -> String {
        match transformation {
            Some(transformation) => self.build(
                width,
                transformation.format.or(self.format),
                transformation.quality.or(self.quality),
            ),
            None => self.url_for_width(width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover() -> WidthParamUrlBuilder {
        WidthParamUrlBuilder::new("media.example.com", "cover.jpg", Scheme::Https).unwrap()
    }

    #[test]
    fn test_closure_builder() {
        let builder = |width: u32| format!("u{width}");
        assert_eq!(builder.url_for_width(100), "u100");

        // クロージャは変換を無視する
        let transformation = SrcsetTransformation {
            format: Some(OutputFormat::Png),
            quality: None,
        };
        assert_eq!(builder.url_for_candidate(100, Some(&transformation)), "u100");
    }

    #[test]
    fn test_width_param_url() {
        let builder =
            WidthParamUrlBuilder::new("media.example.com/", "albums/cover.jpg", Scheme::Https)
                .unwrap();
        assert_eq!(
            builder.url_for_width(400),
            "https://media.example.com/albums/cover.jpg?w=400"
        );
    }

    #[test]
    fn test_key_is_encoded() {
        let builder =
            WidthParamUrlBuilder::new("media.example.com", "albums/my photo.jpg", Scheme::Https)
                .unwrap();
        assert_eq!(
            builder.url_for_width(200),
            "https://media.example.com/albums/my%20photo.jpg?w=200"
        );
    }

    #[test]
    fn test_scheme_is_explicit() {
        // ホストに含まれるスキームより引数が優先される
        let builder =
            WidthParamUrlBuilder::new("https://media.example.com", "cover.jpg", Scheme::Http)
                .unwrap();
        assert_eq!(
            builder.url_for_width(100),
            "http://media.example.com/cover.jpg?w=100"
        );
    }

    #[test]
    fn test_format_and_quality() {
        let builder = cover().format(OutputFormat::WebP).quality(80).unwrap();
        assert_eq!(
            builder.url_for_width(800),
            "https://media.example.com/cover.jpg?w=800&f=webp&q=80"
        );
    }

    #[test]
    fn test_candidate_transformation_overrides() {
        let builder = cover().format(OutputFormat::Jpeg).quality(90).unwrap();

        let transformation = SrcsetTransformation {
            format: Some(OutputFormat::Avif),
            quality: None,
        };
        assert_eq!(
            builder.url_for_candidate(300, Some(&transformation)),
            "https://media.example.com/cover.jpg?w=300&f=avif&q=90"
        );
        assert_eq!(
            builder.url_for_candidate(300, None),
            "https://media.example.com/cover.jpg?w=300&f=jpeg&q=90"
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(WidthParamUrlBuilder::new("media.example.com", "../x.jpg", Scheme::Https).is_err());
        assert!(WidthParamUrlBuilder::new("https://", "x.jpg", Scheme::Https).is_err());

        assert!(cover().quality(0).is_err());
        assert!(cover().quality(101).is_err());
    }

    #[test]
    fn test_from_env_missing_var() {
        // 環境変数が設定されていない場合はエラー
        if std::env::var(MEDIA_BASE_URL_ENV).is_err() {
            assert!(WidthParamUrlBuilder::from_env("x.jpg", Scheme::Https).is_err());
        }
    }
}
