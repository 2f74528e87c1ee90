// crates/core/src/error.rs
//! コアの失敗型
//!
//! 解析対象の不備 (未対応拡張子・読めないファイル・存在しないルート) は
//! エラーにしない。ここに載るのはレポートの入出力と、集計側が明示的に
//! 握りつぶすファイル読み取りの失敗のみ。

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a regular file: '{path}'")]
    NotRegularFile { path: PathBuf },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CounterError>;
