//! textkit CLI: string rewriting, escaping and validation from the shell.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};

mod check;
mod text_edit;

use check::CheckArgs;
use text_edit::{HighlightArgs, InputArgs, ReplaceArgs, TruncateArgs};

#[derive(Debug, Parser)]
#[command(name = "textkit")]
#[command(about = "String rewriting, escaping and validation toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Text operations (truncate, replace, highlight)
    Text(TextCommand),
    /// HTML entity encoding and decoding
    Html(HtmlCommand),
    /// Message digests
    Digest(DigestCommand),
    /// Validate a value; exit code 0 if valid, 1 if not
    Check(CheckArgs),
    /// Number formatting
    Number(NumberCommand),
}

#[derive(Debug, Parser)]
struct TextCommand {
    #[command(subcommand)]
    command: TextSubcommand,
}

#[derive(Debug, Subcommand)]
enum TextSubcommand {
    /// Cut input to a UTF-8 byte budget without splitting characters
    Truncate(TruncateArgs),
    /// Replace literal patterns
    Replace(ReplaceArgs),
    /// Surround literal patterns with markers
    Highlight(HighlightArgs),
}

#[derive(Debug, Parser)]
struct HtmlCommand {
    #[command(subcommand)]
    command: HtmlSubcommand,
}

#[derive(Debug, Subcommand)]
enum HtmlSubcommand {
    /// Escape < > & "
    Encode(InputArgs),
    /// Unescape &lt; &gt; &amp; &quot;
    Decode(InputArgs),
}

#[derive(Debug, Parser)]
struct DigestCommand {
    #[command(subcommand)]
    command: DigestSubcommand,
}

#[derive(Debug, Subcommand)]
enum DigestSubcommand {
    /// Lowercase hex MD5 of the input bytes
    Md5(InputArgs),
}

#[derive(Debug, Parser)]
struct NumberCommand {
    #[command(subcommand)]
    command: NumberSubcommand,
}

#[derive(Debug, Subcommand)]
enum NumberSubcommand {
    /// Format a number with thousands grouping
    Format(FormatArgs),
}

#[derive(Debug, Args)]
struct FormatArgs {
    /// Number to format
    #[arg(allow_hyphen_values = true)]
    value: f64,

    /// Minimum fraction digits
    #[arg(long, default_value = "0")]
    min: usize,

    /// Maximum fraction digits
    #[arg(long, default_value = "3")]
    max: usize,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn emit(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Text(text_cmd) => match text_cmd.command {
            TextSubcommand::Truncate(args) => emit(&text_edit::truncate(&args)?),
            TextSubcommand::Replace(args) => emit(&text_edit::replace(&args)?),
            TextSubcommand::Highlight(args) => emit(&text_edit::highlight(&args)?),
        },
        Command::Html(html_cmd) => match html_cmd.command {
            HtmlSubcommand::Encode(args) => {
                let input = args.read()?;
                emit(&textkit::encode_html(&input))
            }
            HtmlSubcommand::Decode(args) => {
                let input = args.read()?;
                emit(&textkit::decode_html(&input))
            }
        },
        Command::Digest(digest_cmd) => match digest_cmd.command {
            DigestSubcommand::Md5(args) => {
                let input = args.read()?;
                emit(&format!("{}\n", textkit::digest::md5_hex(&input)))
            }
        },
        Command::Check(args) => {
            let code = check::run(&args)?;
            std::process::exit(code);
        }
        Command::Number(number_cmd) => match number_cmd.command {
            NumberSubcommand::Format(args) => emit(&format!(
                "{}\n",
                textkit::number::format_number(args.value, args.min, args.max)
            )),
        },
    }
}
