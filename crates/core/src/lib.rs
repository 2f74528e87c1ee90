// crates/core/src/lib.rs
//! lines_counter のコアエンジン
//!
//! 拡張子からコメント構文を引くレジストリ、行分類ステートマシン、
//! ファイル単位の解析、ディレクトリ集計、および JSON レポートを提供します。
#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
pub mod analyzer;
pub mod classifier;
pub mod counts;
pub mod error;
pub mod language;
pub mod report;

pub use aggregate::{ScanOptions, analyze_directory};
pub use analyzer::FileAnalyzer;
pub use counts::LineCounts;
pub use error::{CounterError, Result};
pub use report::AnalysisResult;
