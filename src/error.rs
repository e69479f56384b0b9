use crate::domain::image_fetcher::FetchError;
use crate::domain::image_inspector::InspectError;
use crate::domain::image_url::UrlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("出力の書き込みに失敗しました")]
    Io(#[from] std::io::Error),

    #[error("URL関連のエラー")]
    Url(#[from] UrlError),

    #[error("画像の取得エラー")]
    Fetch(#[from] FetchError),

    #[error("画像の検証エラー")]
    Inspect(#[from] InspectError),
}
