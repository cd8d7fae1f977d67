/// URL のスキーム
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    /// リクエスト情報からスキームを判定する
    ///
    /// `HTTPS` が `on`、または `X-Forwarded-Proto` が `https` の場合に HTTPS とする。
    /// 環境を直接参照せず、呼び出し元が値を渡す。
    pub fn detect(https: Option<&str>, forwarded_proto: Option<&str>) -> Self {
        if https == Some("on") || forwarded_proto == Some("https") {
            Self::Https
        } else {
            Self::Http
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}
