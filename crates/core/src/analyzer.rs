// crates/core/src/analyzer.rs
//! ファイル単位の解析
//!
//! 拡張子の許可リストとパスの除外パターンでフィルタし、レジストリで
//! 引いた構文を分類器に渡します。読めないファイルはゼロ集計に吸収する
//! ベストエフォート方針。

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::classifier;
use crate::counts::LineCounts;
use crate::error::{CounterError, Result};
use crate::language::{self, CommentSyntax};

/// 既定の除外パターン (VCS/依存/キャッシュ系)
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] =
    &[".git", "__pycache__", "node_modules", ".pytest_cache"];

/// ファイル解析器
pub struct FileAnalyzer {
    include_extensions: HashSet<String>,
    exclude_patterns: HashSet<String>,
}

impl FileAnalyzer {
    /// `include` が `None` ならレジストリ全体、`exclude` が `None` なら
    /// [`DEFAULT_EXCLUDE_PATTERNS`] を使う。
    pub fn new(include: Option<HashSet<String>>, exclude: Option<HashSet<String>>) -> Self {
        let include_extensions = include.unwrap_or_else(|| {
            language::supported_extensions().map(str::to_string).collect()
        });
        let exclude_patterns = exclude.unwrap_or_else(|| {
            DEFAULT_EXCLUDE_PATTERNS.iter().map(|p| (*p).to_string()).collect()
        });
        Self {
            include_extensions,
            exclude_patterns,
        }
    }

    /// 対象パスを解析すべきか
    ///
    /// 拡張子 (小文字化) が許可リストにあり、かつパス文字列が除外パターンの
    /// いずれも含まない (大文字小文字無視の部分一致) こと。
    pub fn is_supported(&self, path: &Path) -> bool {
        let Some(ext) = extension_of(path) else {
            return false;
        };
        if !self.include_extensions.contains(&ext) {
            return false;
        }

        let path_str = path.to_string_lossy().to_lowercase();
        !self
            .exclude_patterns
            .iter()
            .any(|pattern| path_str.contains(&pattern.to_lowercase()))
    }

    /// 単一ファイルの行数集計
    ///
    /// 未対応・存在しない・読めないファイルはすべてゼロ集計を返す。
    pub fn analyze(&self, path: &Path) -> LineCounts {
        if !self.is_supported(path) {
            return LineCounts::ZERO;
        }
        self.read_counts(path).unwrap_or(LineCounts::ZERO)
    }

    /// 読み取り失敗を呼び出し側に返す内部版
    ///
    /// 集計側はこれを使い、失敗したファイルを結果から明示的に落とす。
    pub(crate) fn read_counts(&self, path: &Path) -> Result<LineCounts> {
        if !path.is_file() {
            return Err(CounterError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| CounterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // 不正な UTF-8 は置換して続行する
        let text = String::from_utf8_lossy(&bytes);

        let syntax = extension_of(path)
            .and_then(|ext| language::lookup(&ext))
            .map_or(CommentSyntax::NONE, |entry| entry.syntax);

        Ok(classifier::classify_lines(text.lines(), syntax))
    }

    /// 言語の表示名 (未登録なら "Unknown")
    pub fn language_name(&self, path: &Path) -> &'static str {
        extension_of(path)
            .and_then(|ext| language::lookup(&ext))
            .map_or("Unknown", |entry| entry.display_name)
    }
}

impl Default for FileAnalyzer {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// パスから小文字の拡張子 (先頭ドット込み) を取り出す
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// 拡張子の表記ゆれを吸収する (小文字化・先頭ドット補完)
///
/// CLI から渡される `py` / `.PY` などをレジストリのキー形式に揃える。
pub fn normalize_extensions<'a, I>(extensions: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    extensions
        .into_iter()
        .map(|ext| {
            let ext = ext.trim().to_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}
