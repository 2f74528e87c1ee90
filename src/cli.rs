// src/cli.rs
//! CLI 引数定義

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser, Debug)]
#[command(
    name = "lines_counter",
    version,
    about = "コード行/コメント行/空行の集計ツール"
)]
pub struct Args {
    /// 解析対象のディレクトリ
    pub path: PathBuf,

    /// 結果を書き出す JSON ファイル
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 対象とする拡張子 (例: -e .py -e js)
    #[arg(short = 'e', long = "extensions")]
    pub extensions: Vec<String>,

    /// 除外パターン: パスへの部分一致 (既定: .git, __pycache__, node_modules, .pytest_cache)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// サブディレクトリを辿らない
    #[arg(short = 'n', long)]
    pub no_recursive: bool,

    /// 進行状況を stderr に出力
    #[arg(short, long)]
    pub verbose: bool,

    /// --output 指定時もコンソールに JSON を出力
    #[arg(short, long)]
    pub pretty: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// 行数の多い上位N件も表示 (table のみ)
    #[arg(long)]
    pub top: Option<usize>,

    /// 並列数
    #[arg(long)]
    pub jobs: Option<usize>,
}
