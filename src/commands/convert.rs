//! `convo-notes convert` - turn transcripts into notes
//!
//! - `--input-file` converts one transcript; a read or write failure is an
//!   error
//! - `--input-dir` converts every matching file and prints a batch summary;
//!   per-file failures are reported, not fatal
//! - Ctrl-C stops the batch between files, prints the summary so far and
//!   exits non-zero

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use convo_notes_core::bail_usage;
use convo_notes_core::config::ConverterConfig;
use convo_notes_core::convert::{
    BatchReport, ConvertOptions, Converter, FailureStage, FileReport, Outcome,
};
use convo_notes_core::error::{ConvoError, Result};

use crate::cli::{ConvertArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};

pub fn execute(ctx: &CommandContext, args: &ConvertArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let options = ConvertOptions {
        dry_run: args.dry_run,
        skip_existing: !args.no_skip,
        force: args.force,
    };

    match (&args.input_file, &args.input_dir) {
        (Some(file), _) => convert_single(ctx, args, &config, file, options),
        (None, Some(dir)) => convert_batch(ctx, args, &config, dir, options),
        (None, None) => bail_usage!("one of --input-dir or --input-file is required"),
    }
}

fn convert_single(
    ctx: &CommandContext,
    args: &ConvertArgs,
    config: &ConverterConfig,
    file: &Path,
    options: ConvertOptions,
) -> Result<()> {
    if !file.is_file() {
        return Err(ConvoError::input_not_found("file", file));
    }

    let converter = Converter::new(&args.output_dir, config)?;
    trace_command!(ctx.cli, ctx.start, "build_index");

    let report = converter.convert_file(file, options);

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            if !ctx.cli.quiet || matches!(report.outcome, Outcome::Failed { .. }) {
                print_file_line(&report);
            }
        }
    }

    if let Outcome::Failed { stage, reason } = report.outcome {
        return Err(ConvoError::FailedOperationWithTarget {
            operation: stage_operation(stage).to_string(),
            target: report.source.display().to_string(),
            reason,
        });
    }
    Ok(())
}

fn convert_batch(
    ctx: &CommandContext,
    args: &ConvertArgs,
    config: &ConverterConfig,
    dir: &Path,
    options: ConvertOptions,
) -> Result<()> {
    let pattern = args.pattern.as_deref().unwrap_or(&config.scan.pattern);
    if pattern.trim().is_empty() {
        bail_usage!("--pattern must not be empty");
    }
    if !dir.is_dir() {
        return Err(ConvoError::input_not_found("directory", dir));
    }
    let recursive = config.scan.recursive && !args.no_recursive;

    let converter = Converter::new(&args.output_dir, config)?;
    trace_command!(ctx.cli, ctx.start, "build_index");

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        tracing::debug!(error = %e, "ctrlc_handler_unavailable");
    }

    let human = ctx.cli.format == OutputFormat::Human;
    let report = converter.convert_directory(
        dir,
        pattern,
        recursive,
        options,
        &interrupted,
        |file_report| {
            if human && !ctx.cli.quiet {
                print_file_line(file_report);
            }
        },
    )?;
    trace_command!(ctx.cli, ctx.start, "convert_directory");

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&report)?;
            value["index_diagnostics"] = serde_json::to_value(converter.diagnostics())?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => print_summary(&report),
    }

    if report.interrupted {
        return Err(ConvoError::Interrupted);
    }
    Ok(())
}

fn stage_operation(stage: FailureStage) -> &'static str {
    match stage {
        FailureStage::Read => "read",
        FailureStage::Render => "render note for",
        FailureStage::Write => "write note for",
    }
}

fn print_file_line(report: &FileReport) {
    let source = report.source.display();
    match &report.outcome {
        Outcome::Converted { output } => println!("converted  {} -> {}", source, output.display()),
        Outcome::WouldCreate { output } => {
            println!("would create {} (from {})", output.display(), source)
        }
        Outcome::Duplicate { existing } => {
            println!("duplicate  {} (matches {})", source, existing.display())
        }
        Outcome::Skipped { output } => {
            println!("skipped    {} ({} exists)", source, output.display())
        }
        Outcome::Failed { stage, reason } => {
            eprintln!("failed     {}: {} failed: {}", source, stage_label(*stage), reason)
        }
    }
}

fn stage_label(stage: FailureStage) -> &'static str {
    match stage {
        FailureStage::Read => "read",
        FailureStage::Render => "render",
        FailureStage::Write => "write",
    }
}

fn print_summary(report: &BatchReport) {
    println!();
    if report.dry_run {
        println!("Would convert: {}", report.converted.len());
    } else {
        println!("Converted: {}", report.converted.len());
    }
    println!("Skipped: {}", report.skipped.len());
    println!("Duplicates: {}", report.duplicates.len());
    println!("Failed: {}", report.failed.len());

    if !report.domain_counts.is_empty() {
        println!();
        println!("Domains:");
        for (domain, count) in &report.domain_counts {
            println!("  {}: {}", domain, count);
        }
    }

    if report.interrupted {
        println!();
        println!("Interrupted after {} file(s).", report.total());
    }
}
