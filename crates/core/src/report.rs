// crates/core/src/report.rs
//! 解析結果の構造と JSON 永続化
//!
//! 保存した JSON を読み戻すと summary / languages は完全に一致する
//! (ラウンドトリップ保証)。languages は BTreeMap なので出力順も安定。

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::counts::LineCounts;
use crate::error::{CounterError, Result};

/// 全体サマリ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_files: usize,
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
}

impl Summary {
    pub fn add_file(&mut self, counts: &LineCounts) {
        self.total_files += 1;
        self.total_lines += counts.total;
        self.code_lines += counts.code;
        self.comment_lines += counts.comments;
        self.blank_lines += counts.blank;
    }
}

/// 言語別サマリ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub files: usize,
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
}

impl LanguageSummary {
    pub fn add_file(&mut self, counts: &LineCounts) {
        self.files += 1;
        self.total_lines += counts.total;
        self.code_lines += counts.code;
        self.comment_lines += counts.comments;
        self.blank_lines += counts.blank;
    }
}

/// ファイル1件分の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// ルートからの相対パス
    pub path: String,
    /// 言語の表示名 (未登録なら "Unknown")
    pub language: String,
    pub lines: LineCounts,
}

/// 解析結果全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: Summary,
    pub languages: BTreeMap<String, LanguageSummary>,
    pub files: Vec<FileResult>,
}

impl AnalysisResult {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 結果を JSON ファイルに保存する
pub fn save_json(result: &AnalysisResult, path: &Path) -> Result<()> {
    let json = result.to_json_pretty()?;
    fs::write(path, json).map_err(|source| CounterError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// JSON ファイルから結果を読み戻す
pub fn load_json(path: &Path) -> Result<AnalysisResult> {
    let json = fs::read_to_string(path).map_err(|source| CounterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        let mut result = AnalysisResult::default();
        let py = LineCounts { total: 10, code: 6, comments: 2, blank: 2 };
        let js = LineCounts { total: 5, code: 4, comments: 0, blank: 1 };

        for (path, language, counts) in [
            ("src/a.py", "Python", py),
            ("web/b.js", "JavaScript", js),
        ] {
            result.summary.add_file(&counts);
            result
                .languages
                .entry(language.to_string())
                .or_default()
                .add_file(&counts);
            result.files.push(FileResult {
                path: path.to_string(),
                language: language.to_string(),
                lines: counts,
            });
        }
        result
    }

    #[test]
    fn test_summary_accumulates() {
        let result = sample_result();
        assert_eq!(result.summary.total_files, 2);
        assert_eq!(result.summary.total_lines, 15);
        assert_eq!(result.summary.code_lines, 10);
        assert_eq!(result.summary.comment_lines, 2);
        assert_eq!(result.summary.blank_lines, 3);
    }

    #[test]
    fn test_json_shape() {
        let result = sample_result();
        let value: serde_json::Value =
            serde_json::from_str(&result.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["summary"]["total_files"], 2);
        assert_eq!(value["languages"]["Python"]["files"], 1);
        assert_eq!(value["languages"]["Python"]["comment_lines"], 2);
        assert_eq!(value["files"][0]["path"], "src/a.py");
        assert_eq!(value["files"][0]["language"], "Python");
        assert_eq!(value["files"][0]["lines"]["comments"], 2);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let result = sample_result();

        save_json(&result, &path).unwrap();
        let loaded = load_json(&path).unwrap();

        assert_eq!(loaded.summary, result.summary);
        assert_eq!(loaded.languages, result.languages);
        assert_eq!(loaded.files.len(), result.files.len());
        assert_eq!(loaded, result);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(load_json(Path::new("/no/such/report.json")).is_err());
    }

    #[test]
    fn test_empty_result_serializes() {
        let value: serde_json::Value =
            serde_json::from_str(&AnalysisResult::default().to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["summary"]["total_files"], 0);
        assert!(value["languages"].as_object().unwrap().is_empty());
        assert!(value["files"].as_array().unwrap().is_empty());
    }
}
