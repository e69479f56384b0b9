use clap::Parser;

/// 2つの位置引数と1つのオプション引数を受け取り、固定URLの画像サイズを表示するツール
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct CliOptions {
    /// This is argument one
    #[arg(required = true)]
    pub arg1: String,

    /// This is argument two
    #[arg(required = true)]
    pub arg2: String,

    /// This is optional argument
    #[arg(long)]
    pub optional: Option<String>,
}
