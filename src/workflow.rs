//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 引数の表示 → 画像の取得 → 寸法の表示 という一方向の処理フローを実装します。

use crate::cli::CliOptions;
use crate::domain::image_fetcher::ImageSource;
use crate::domain::image_inspector::{self, ImageDimensions};
use crate::domain::image_url::ImageUrl;
use crate::error::AppError;
use log::info;
use std::io::Write;

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `options`: コマンドラインからパースされた引数 (`cli::CliOptions`)。
/// * `source`: 画像データの取得手段。本番では `HttpImageSource`。
/// * `url`: 取得する画像のURL。
/// * `out`: 利用者向けの出力先。本番では標準出力。
///
/// # 戻り値
/// * `Ok(ImageDimensions)`: 画像の取得とデコードに成功した場合。
/// * `Err(AppError)`: 取得・デコード・出力のいずれかに失敗した場合。
pub fn run<S, W>(
    options: &CliOptions,
    source: &S,
    url: &ImageUrl,
    out: &mut W,
) -> Result<ImageDimensions, AppError>
where
    S: ImageSource + ?Sized,
    W: Write,
{
    // 1. 受け取った引数をそのまま表示
    report_arguments(options, out)?;

    // 2. URLから拡張子を取り出して表示（リクエスト前）
    let extension = url.file_extension();
    writeln!(out, "File extension: {}", extension)?;

    // 3. 画像をダウンロード
    let bytes = source.fetch(url)?;

    // 4. デコードして寸法を表示
    let dimensions = image_inspector::inspect(bytes.as_bytes(), extension)?;
    info!("{:?} 画像としてデコードしました", dimensions.format());
    writeln!(out, "File dimensions: {}", dimensions)?;

    Ok(dimensions)
}

/// パース済みの引数をラベル付きで表示します。
///
/// `optional` は値が指定され、かつ空でない場合だけ表示します。
pub fn report_arguments<W: Write>(options: &CliOptions, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Arg1: {}", options.arg1)?;
    writeln!(out, "Arg2: {}", options.arg2)?;
    if let Some(optional) = options.optional.as_deref().filter(|s| !s.is_empty()) {
        writeln!(out, "Optional arg: {}", optional)?;
    }
    Ok(())
}
