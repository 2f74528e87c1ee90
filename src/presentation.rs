// src/presentation.rs
//! 結果の表示 (JSON / サマリテーブル)

use anyhow::Result;
use lines_counter_core::AnalysisResult;

const RULE_WIDTH: usize = 80;

pub fn print_json(result: &AnalysisResult) -> Result<()> {
    println!("{}", result.to_json_pretty()?);
    Ok(())
}

pub fn print_table(result: &AnalysisResult, top: Option<usize>) {
    let summary = &result.summary;

    println!("{}", "=".repeat(RULE_WIDTH));
    println!("LINES COUNTER SUMMARY");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Total Files: {}", summary.total_files);
    println!("Total Lines: {}", summary.total_lines);
    println!("Code Lines: {}", summary.code_lines);
    println!("Comment Lines: {}", summary.comment_lines);
    println!("Blank Lines: {}", summary.blank_lines);

    if !result.languages.is_empty() {
        println!();
        println!("BREAKDOWN BY LANGUAGE:");
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "{:<15} {:<8} {:<10} {:<10} {:<10} {:<10}",
            "Language", "Files", "Total", "Code", "Comments", "Blank"
        );
        println!("{}", "-".repeat(RULE_WIDTH));
        // BTreeMap なので言語名順
        for (language, stats) in &result.languages {
            println!(
                "{:<15} {:<8} {:<10} {:<10} {:<10} {:<10}",
                language,
                stats.files,
                stats.total_lines,
                stats.code_lines,
                stats.comment_lines,
                stats.blank_lines
            );
        }
    }

    if let Some(n) = top {
        print_top_files(result, n);
    }

    if summary.total_lines > 0 {
        let pct = |part: usize| part as f64 / summary.total_lines as f64 * 100.0;
        println!();
        println!(
            "Code: {:.1}%  Comments: {:.1}%  Blank: {:.1}%",
            pct(summary.code_lines),
            pct(summary.comment_lines),
            pct(summary.blank_lines)
        );
    }

    println!("{}", "=".repeat(RULE_WIDTH));
}

/// 行数の多い順に上位N件 (レポート本体の並びは変えない)
fn print_top_files(result: &AnalysisResult, n: usize) {
    let mut files: Vec<_> = result.files.iter().collect();
    files.sort_by(|a, b| b.lines.total.cmp(&a.lines.total));

    println!();
    println!("TOP {n} FILES BY LINES:");
    println!("{}", "-".repeat(RULE_WIDTH));
    for file in files.into_iter().take(n) {
        println!(
            "{:>10}  {:<12} {}",
            file.lines.total, file.language, file.path
        );
    }
}
