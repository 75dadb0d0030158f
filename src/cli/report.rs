//! Output formatting for command results.
//!
//! Messages go to stdout untouched so they can be piped; notices and
//! warnings go to stderr.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, KeysSummary, MessageSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Gap between the key column and the message column in `keys` output.
const COLUMN_GAP: usize = 2;

/// Print `result`, writing messages to `out` and notices to `err`.
pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match &result.summary {
        CommandSummary::Message(summary) => print_message(summary, out, err),
        CommandSummary::Keys(summary) => print_keys(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

fn print_message<W: Write, E: Write>(
    summary: &MessageSummary,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    if summary.message.is_empty() {
        return writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "No translation for '{}' in locale '{}' (fallback '{}')",
                summary.key, summary.locale, summary.fallback_locale
            )
            .red()
        );
    }

    writeln!(out, "{}", summary.message)?;

    if !summary.unreplaced.is_empty() {
        let names: Vec<String> = summary
            .unreplaced
            .iter()
            .map(|name| format!("{{{}}}", name))
            .collect();
        writeln!(
            err,
            "{}: unreplaced placeholders in '{}': {}",
            "warning".yellow().bold(),
            summary.key,
            names.join(", ")
        )?;
    }
    Ok(())
}

fn print_keys<W: Write, E: Write>(
    summary: &KeysSummary,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    if summary.entries.is_empty() {
        return writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!("No messages for locale '{}'", summary.locale).red()
        );
    }

    let key_width = summary
        .entries
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);

    for (key, message) in &summary.entries {
        let padding = " ".repeat(key_width - key.width() + COLUMN_GAP);
        writeln!(out, "{}{}{}", key.cyan(), padding, message)?;
    }
    Ok(())
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    )
}
