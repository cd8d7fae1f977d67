/// srcset / sizes の各要素を連結する区切り文字
pub const ATTRIBUTE_SEPARATOR: &str = ", ";

/// ブレークポイントとして扱う最大幅（ピクセル）
///
/// これを超えるレンジ指定は InvalidInput になる。生成される要素数もこの値で抑えられる。
pub const MAX_WIDTH: u32 = 16_384;

/// オブジェクトキーの最大長（バイト）
pub const MAX_KEY_LENGTH: usize = 1024;

/// URL ビルダーのベースホストを指定する環境変数
pub const MEDIA_BASE_URL_ENV: &str = "MEDIA_BASE_URL";
