// use宣言：必要なクレートやモジュールをスコープに取り込む

use image::{self, GenericImageView, ImageFormat}; // 画像のデコードと寸法取得のために利用
use log::debug;
use std::fmt; // エラーメッセージのフォーマットのために fmt モジュールを利用

// --- 構造体定義 ---

/// デコード済み画像の寸法。
///
/// `inspect` を通じてのみ生成され、幅は列数、高さは行数を表します。
/// デコードに使用した画像フォーマットも保持します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    width: u32,
    height: u32,
    format: ImageFormat,
}

// --- エラー定義 ---

/// `inspect` の実行時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum InspectError {
    /// 渡されたデータが空の場合に返されるエラー。
    EmptyData,
    /// 内容からも拡張子からも画像フォーマットを判別できなかった場合に返されるエラー。
    UnsupportedFormat { extension: String },
    /// フォーマットは判別できたが、デコードに失敗した場合に返されるエラー。
    Decode { format: ImageFormat, reason: String },
}

// --- 実装ブロック ---

impl ImageDimensions {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

/// 画像のバイナリデータをデコードし、その寸法を返します。
///
/// フォーマットはまずデータ先頭のマジックバイトから自動判別し、
/// 判別できない場合に限り `extension_hint`（URLから得た拡張子）を使います。
///
/// # 引数
/// * `bytes`: エンコード済み画像のバイナリデータ。
/// * `extension_hint`: 判別失敗時に使う拡張子（例: `"jpg"`）。空文字列でもよい。
///
/// # 戻り値
/// * `Ok(ImageDimensions)`: デコードに成功した場合。
/// * `Err(InspectError)`: データが空、フォーマット不明、またはデコードに失敗した場合。
pub fn inspect(bytes: &[u8], extension_hint: &str) -> Result<ImageDimensions, InspectError> {
    if bytes.is_empty() {
        return Err(InspectError::EmptyData);
    }

    let format = resolve_format(bytes, extension_hint).ok_or_else(|| {
        InspectError::UnsupportedFormat {
            extension: extension_hint.to_string(),
        }
    })?;
    debug!("{:?} として {} バイトをデコードします", format, bytes.len());

    // ヘッダーだけでなく画素データまでデコードし、破損したデータを検出する
    let decoded = image::load_from_memory_with_format(bytes, format).map_err(|e| {
        InspectError::Decode {
            format,
            reason: e.to_string(),
        }
    })?;
    let (width, height) = decoded.dimensions();

    Ok(ImageDimensions {
        width,
        height,
        format,
    })
}

/// 内容による判別を優先し、失敗した場合は拡張子から推測する。
#[inline]
fn resolve_format(bytes: &[u8], extension_hint: &str) -> Option<ImageFormat> {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_extension(extension_hint))
}

// --- トレイト実装 ---

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::EmptyData => {
                write!(f, "データが空です。画像データを取得できませんでした。")
            }
            InspectError::UnsupportedFormat { extension } => {
                write!(
                    f,
                    "サポートされていない画像フォーマットです (拡張子: '{}')。",
                    extension
                )
            }
            InspectError::Decode { format, reason } => {
                write!(f, "{:?} 画像のデコードに失敗しました: {}", format, reason)
            }
        }
    }
}

impl std::error::Error for InspectError {}

// --- テストモジュール ---
