use clap::Parser;
use image_size_probe::cli::CliOptions;
use image_size_probe::domain::image_fetcher::HttpImageSource;
use image_size_probe::domain::image_url::ImageUrl;
use image_size_probe::error::AppError;
use image_size_probe::workflow;
use std::io;

fn main() -> Result<(), AppError> {
    env_logger::init();

    // コマンドライン引数を解析します（不足時は clap が使い方を表示して終了）
    let options = CliOptions::parse();

    let url = ImageUrl::default_image()?;
    let source = HttpImageSource::new()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    workflow::run(&options, &source, &url, &mut out)?;

    Ok(())
}
