//! CLI handlers for the `text` commands.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use textkit::text::{Action, PatternSet, RewriteConfig, Rewriter};

/// Input source shared by all text commands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input file (reads from stdin if omitted)
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Read the whole input as UTF-8.
    pub fn read(&self) -> Result<String> {
        match &self.file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct TruncateArgs {
    /// Maximum number of UTF-8 bytes to keep
    #[arg(short, long)]
    pub max_bytes: usize,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Literal pattern to replace (repeatable; order sets priority)
    #[arg(short, long = "pattern", required = true)]
    pub patterns: Vec<String>,

    /// Replacement for every pattern
    #[arg(short, long, conflicts_with = "each")]
    pub with: Option<String>,

    /// Replacement per pattern, in pattern order (repeatable)
    #[arg(short, long)]
    pub each: Vec<String>,

    /// Split at the earliest occurrence instead of the first listed pattern
    #[arg(long)]
    pub leftmost: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Args)]
pub struct HighlightArgs {
    /// Literal pattern to highlight (repeatable; order sets priority)
    #[arg(short, long = "pattern", required = true)]
    pub patterns: Vec<String>,

    /// Marker inserted before each match
    #[arg(long, default_value = "<b>")]
    pub prefix: String,

    /// Marker inserted after each match
    #[arg(long, default_value = "</b>")]
    pub suffix: String,

    /// Split at the earliest occurrence instead of the first listed pattern
    #[arg(long)]
    pub leftmost: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

fn config(leftmost: bool) -> RewriteConfig {
    if leftmost {
        RewriteConfig::leftmost()
    } else {
        RewriteConfig::array_order()
    }
}

fn run(patterns: &[String], action: Action<'_>, leftmost: bool, input: &str) -> Result<String> {
    let patterns = PatternSet::new(patterns.iter().map(String::as_str))?;
    let rewriter = Rewriter::new(patterns, action)?.with_config(config(leftmost));
    Ok(rewriter.rewrite(input).into_owned())
}

pub fn truncate(args: &TruncateArgs) -> Result<String> {
    let input = args.input.read()?;
    Ok(textkit::truncate_to_byte_length(&input, args.max_bytes).to_string())
}

pub fn replace(args: &ReplaceArgs) -> Result<String> {
    let input = args.input.read()?;
    let action = match (&args.with, args.each.is_empty()) {
        (Some(with), _) => Action::ReplaceAllWith(with),
        (None, false) => Action::ReplaceEachWith(args.each.iter().map(String::as_str).collect()),
        (None, true) => bail!("either --with or at least one --each is required"),
    };
    run(&args.patterns, action, args.leftmost, &input)
}

pub fn highlight(args: &HighlightArgs) -> Result<String> {
    let input = args.input.read()?;
    let action = Action::Wrap {
        prefix: &args.prefix,
        suffix: &args.suffix,
    };
    run(&args.patterns, action, args.leftmost, &input)
}
