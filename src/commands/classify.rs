//! `convo-notes classify` - show what the converter would derive from a transcript

use std::io::{self, Read};
use std::path::Path;

use chrono::Local;
use convo_notes_core::analysis::{Analysis, Analyzer};
use convo_notes_core::document::Document;
use convo_notes_core::error::{ConvoError, Result};

use crate::cli::{ClassifyArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};

const STDIN_NAME: &str = "<stdin>";

pub fn execute(ctx: &CommandContext, args: &ClassifyArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let doc = match &args.file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    trace_command!(ctx.cli, ctx.start, "read_input");

    let analysis = Analyzer::from_config(&config).analyze(&doc);

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Human => print_human(&analysis),
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<Document> {
    if !path.is_file() {
        return Err(ConvoError::input_not_found("file", path));
    }
    Document::read(path)
}

fn read_stdin() -> Result<Document> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| ConvoError::io_operation("read", STDIN_NAME, e))?;
    Ok(Document::new(STDIN_NAME, content, Local::now()))
}

fn print_human(analysis: &Analysis) {
    println!("Title: {}", analysis.title);
    println!("Date: {}", analysis.date);
    println!("Source: {}", analysis.source_type.display_name());
    println!("Domains: {}", analysis.domains.join(", "));
    println!("Activity: {}", analysis.activity);
    if analysis.topics.is_empty() {
        println!("Topics: (none)");
    } else {
        println!("Topics: {}", analysis.topics.join(", "));
    }
    println!("Fingerprint: {}", analysis.fingerprint);
}
