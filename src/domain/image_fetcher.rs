use super::image_url::ImageUrl;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

/// ネットワークから取得した画像のバイナリデータ。
///
/// デコード前の生データと、取得時のHTTPステータスコード（ログ用）を保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBytes {
    data: Vec<u8>,
    status: u16,
}

impl ImageBytes {
    pub fn new(data: Vec<u8>, status: u16) -> Self {
        Self { data, status }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// 画像取得時に発生するエラー
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTPクライアントの初期化に失敗しました")]
    Client(#[source] reqwest::Error),

    #[error("'{url}' へのリクエストに失敗しました")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' のレスポンス本文の読み込みに失敗しました")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 画像のバイナリデータを取得する手段を抽象化するトレイト。
pub trait ImageSource {
    fn fetch(&self, url: &ImageUrl) -> Result<ImageBytes, FetchError>;
}

/// 1回のブロッキングHTTP GETで画像を取得する実装。
///
/// タイムアウトとリトライは行いません。ステータスコードも検査せず、
/// 2xx以外のレスポンス本文もそのまま返します。
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new() -> Result<Self, FetchError> {
        // reqwest のブロッキングクライアントは既定で30秒のタイムアウトを持つため無効化する
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// 設定済みのクライアントを使う場合のコンストラクタ。
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self, url: &ImageUrl) -> Result<ImageBytes, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.as_url().clone())
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} が {} を返しました。本文をそのままデコードします", url, status);
        }

        let body = response.bytes().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        info!("{} から {} バイトを取得しました", url, body.len());

        Ok(ImageBytes::new(body.to_vec(), status.as_u16()))
    }
}
