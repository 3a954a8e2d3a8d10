//! CLI handler for the `check` command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use textkit::validate;

/// Exit codes for the check command.
pub mod exit_codes {
    /// The value is valid.
    pub const VALID: i32 = 0;
    /// The value is invalid.
    pub const INVALID: i32 = 1;
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CheckKind {
    /// E-mail address
    Email,
    /// Only CJK unified ideographs
    Chinese,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// Floating-point number
    Double,
    /// true or false
    Boolean,
    /// YYYY-MM-DD
    Date,
    /// YYYY-MM-DD HH:MM:SS
    Timestamp,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// What the value must be
    #[arg(value_enum)]
    pub kind: CheckKind,

    /// Value to check
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn is_valid(kind: CheckKind, value: &str) -> bool {
    match kind {
        CheckKind::Email => validate::is_email(value),
        CheckKind::Chinese => validate::matches_named(validate::NamedPattern::ChineseCharacter, value),
        CheckKind::Integer => validate::is_integer(value),
        CheckKind::Long => validate::is_long(value),
        CheckKind::Double => validate::is_double(value),
        CheckKind::Boolean => validate::is_boolean(value),
        CheckKind::Date => validate::is_date(value),
        CheckKind::Timestamp => validate::is_full_timestamp(value),
    }
}

pub fn run(args: &CheckArgs) -> Result<i32> {
    let valid = is_valid(args.kind, &args.value);
    log::debug!("check {:?} {:?}: {}", args.kind, args.value, valid);
    if !args.quiet {
        println!("{}", if valid { "valid" } else { "invalid" });
    }
    Ok(if valid {
        exit_codes::VALID
    } else {
        exit_codes::INVALID
    })
}
