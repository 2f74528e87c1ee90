// src/app.rs
//! 引数からオプションを組み立て、解析を実行して結果を出力する

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use lines_counter_core::analyzer::normalize_extensions;
use lines_counter_core::{ScanOptions, analyze_directory, report};

use crate::cli::{Args, OutputFormat};
use crate::presentation;

pub fn run(args: Args) -> Result<ExitCode> {
    if !args.path.exists() {
        bail!("path does not exist: {}", args.path.display());
    }

    let include_extensions = (!args.extensions.is_empty())
        .then(|| normalize_extensions(args.extensions.iter().map(String::as_str)));
    let exclude_patterns =
        (!args.exclude.is_empty()).then(|| args.exclude.iter().cloned().collect());

    let options = ScanOptions {
        include_extensions,
        exclude_patterns,
        recursive: !args.no_recursive,
        jobs: args.jobs,
    };

    if args.verbose {
        eprintln!("[lines_counter] analyzing: {}", args.path.display());
        eprintln!(
            "[lines_counter] recursive={} parallel={}",
            options.recursive,
            options.jobs.unwrap_or_else(num_cpus::get)
        );
    }

    let result = analyze_directory(&args.path, &options);

    if let Some(output) = &args.output {
        report::save_json(&result, output)
            .with_context(|| format!("failed to save results to {}", output.display()))?;
        if args.verbose {
            eprintln!("[lines_counter] results saved to: {}", output.display());
        }
    }

    match args.format {
        OutputFormat::Table => presentation::print_table(&result, args.top),
        OutputFormat::Json => {
            // 出力先ファイルが無ければコンソールへ、--pretty なら常に出す
            if args.pretty || args.output.is_none() {
                presentation::print_json(&result)?;
            }
        }
    }

    if result.summary.total_files == 0 {
        if args.verbose {
            eprintln!("[lines_counter] no supported files found");
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
