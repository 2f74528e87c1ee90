// crates/core/src/aggregate.rs
//! ディレクトリ走査と集計
//!
//! 候補ファイルを列挙してフィルタし、ファイルごとの解析を並列に回してから
//! 全体サマリと言語別サマリへ畳み込みます。読めなかったファイルは結果から
//! 黙って落とす。出力の files は相対パス順に整列するため、並列度や走査順に
//! よらず結果は決定的。

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::analyzer::FileAnalyzer;
use crate::report::{AnalysisResult, FileResult, LanguageSummary, Summary};

/// ディレクトリ解析のオプション
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 対象拡張子 (None ならレジストリ全体)
    pub include_extensions: Option<HashSet<String>>,
    /// 除外パターン (None なら既定セット)
    pub exclude_patterns: Option<HashSet<String>>,
    /// サブディレクトリも辿るか
    pub recursive: bool,
    /// 並列数 (None なら論理コア数)
    pub jobs: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_extensions: None,
            exclude_patterns: None,
            recursive: true,
            jobs: None,
        }
    }
}

/// ディレクトリ以下の対応ファイルをすべて解析する
///
/// ルートが存在しない・ディレクトリでない場合は空の結果を返す (エラーにしない)。
pub fn analyze_directory(root: &Path, options: &ScanOptions) -> AnalysisResult {
    if !root.is_dir() {
        return AnalysisResult::default();
    }

    let analyzer = FileAnalyzer::new(
        options.include_extensions.clone(),
        options.exclude_patterns.clone(),
    );

    let candidates = collect_files(root, options.recursive, &analyzer);
    let mut files = analyze_files(&candidates, root, &analyzer, options.jobs);
    files.sort_by(|a, b| a.path.cmp(&b.path));

    fold_results(files)
}

/// 候補ファイルの列挙
///
/// gitignore 等の標準フィルタは使わない。除外は FileAnalyzer の
/// パターン (部分一致) だけで決める。
fn collect_files(root: &Path, recursive: bool, analyzer: &FileAnalyzer) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    if !recursive {
        builder.max_depth(Some(1));
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if analyzer.is_supported(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files
}

fn analyze_files(
    paths: &[PathBuf],
    root: &Path,
    analyzer: &FileAnalyzer,
    jobs: Option<usize>,
) -> Vec<FileResult> {
    let run = || {
        paths
            .par_iter()
            .filter_map(|path| analyze_one(path, root, analyzer))
            .collect::<Vec<_>>()
    };

    let threads = jobs.unwrap_or_else(num_cpus::get).max(1);
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(run),
        // プール構築に失敗したらグローバルプールで続行
        Err(_) => run(),
    }
}

fn analyze_one(path: &Path, root: &Path, analyzer: &FileAnalyzer) -> Option<FileResult> {
    // 読めないファイルは結果から落とす (カウントも報告もしない)
    let counts = analyzer.read_counts(path).ok()?;
    let relative = path.strip_prefix(root).unwrap_or(path);
    Some(FileResult {
        path: relative.display().to_string(),
        language: analyzer.language_name(path).to_string(),
        lines: counts,
    })
}

fn fold_results(files: Vec<FileResult>) -> AnalysisResult {
    let mut summary = Summary::default();
    let mut languages: BTreeMap<String, LanguageSummary> = BTreeMap::new();

    for file in &files {
        summary.add_file(&file.lines);
        languages
            .entry(file.language.clone())
            .or_default()
            .add_file(&file.lines);
    }

    AnalysisResult {
        summary,
        languages,
        files,
    }
}
