use reqwest::Url;
use std::fmt;

/// ダウンロード対象の固定画像URL
pub const DEFAULT_IMAGE_URL: &str = "https://www.warrenphotographic.co.uk/photography/bigs/40790-Cute-chocolate-Border-Collie-puppy-7-weeks-old-white-background.jpg";

// エラー型を定義
#[derive(Debug, PartialEq)]
pub enum UrlError {
    InvalidUrl(String),
    UnsupportedScheme(String),
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::InvalidUrl(s) => write!(f, "無効なURLです: {}", s),
            UrlError::UnsupportedScheme(s) => {
                write!(f, "サポートされていないスキームです: {}", s)
            }
        }
    }
}

impl std::error::Error for UrlError {}

/// 検証済みの画像URL。
///
/// `new` を通じてのみ生成でき、http または https の絶対URLであることが保証されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl {
    raw: String,
    url: Url,
}

impl ImageUrl {
    // コンストラクタ: 文字列を受け取り、バリデーションを行う
    pub fn new(raw: impl Into<String>) -> Result<Self, UrlError> {
        let raw = raw.into();
        let url = Url::parse(&raw).map_err(|e| UrlError::InvalidUrl(format!("{} ({})", raw, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(Self { raw, url }),
            other => Err(UrlError::UnsupportedScheme(other.to_string())),
        }
    }

    /// 組み込みの固定URLを返します。
    pub fn default_image() -> Result<Self, UrlError> {
        Self::new(DEFAULT_IMAGE_URL)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// URL文字列の最後のパス要素から拡張子（最後の `.` より後ろ）を取り出します。
    ///
    /// 要素先頭のドットは無視し、ドットを含まない場合は空文字列を返します。
    /// 純粋な文字列操作で、クエリ文字列などは考慮しません。
    pub fn file_extension(&self) -> &str {
        file_extension_of(&self.raw)
    }
}

fn file_extension_of(raw: &str) -> &str {
    let last_segment = raw.rsplit('/').next().unwrap_or(raw);
    let stem = last_segment.trim_start_matches('.');
    match stem.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
