// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "lowerlines",
    version = crate::VERSION,
    about = "ファイルの各行を前後の空白除去 + 小文字化して標準出力へ書き出す"
)]
pub struct Args {
    /// 処理対象のファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// 完了時に標準エラーへ `Done.` を出力しない
    #[arg(long)]
    pub no_done: bool,
}
