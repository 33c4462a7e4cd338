//! Report formatting and printing utilities.
//!
//! Cargo-style output for the CLI. Kept apart from the engine so phrasebook
//! can be used as a library without pulling in terminal formatting.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    check::{CheckIssue, Severity},
    locales::LocaleRow,
};
use crate::core::{TokenEntry, Warning, parsers::json::MessageScanWarning};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Longest preview shown by `keys` before truncating.
const MAX_PREVIEW_WIDTH: usize = 60;

/// Print provider warnings to stderr.
pub fn print_warnings(warnings: &[Warning]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[Warning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

/// Print message files that could not be loaded.
pub fn print_load_warnings(warnings: &[MessageScanWarning], verbose: bool) {
    print_load_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

/// Summarized unless `verbose`, in which case each file and error is shown.
pub fn print_load_warnings_to<W: Write>(
    warnings: &[MessageScanWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be loaded (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

/// Print tokens and previews, previews aligned by display width.
pub fn print_keys(entries: &[TokenEntry]) {
    print_keys_to(entries, &mut io::stdout().lock());
}

pub fn print_keys_to<W: Write>(entries: &[TokenEntry], writer: &mut W) {
    let width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.token.as_str()))
        .max()
        .unwrap_or(0);

    for entry in entries {
        let padding = width - UnicodeWidthStr::width(entry.token.as_str());
        let _ = writeln!(
            writer,
            "{}{:padding$}  {}",
            entry.token.bold(),
            "",
            truncate(&entry.preview, MAX_PREVIEW_WIDTH).dimmed(),
            padding = padding
        );
    }
}

pub fn print_locales(rows: &[LocaleRow]) {
    print_locales_to(rows, &mut io::stdout().lock());
}

pub fn print_locales_to<W: Write>(rows: &[LocaleRow], writer: &mut W) {
    if rows.is_empty() {
        let _ = writeln!(writer, "{} No locales found", FAILURE_MARK.red());
        return;
    }

    let width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.locale.as_str()))
        .max()
        .unwrap_or(0);

    for row in rows {
        let padding = width - UnicodeWidthStr::width(row.locale.as_str());
        let marker = if row.current {
            format!("  {}", "(current)".green())
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "{}{:padding$}  {} {}  {}{}",
            row.locale.bold(),
            "",
            row.key_count,
            if row.key_count == 1 { "key" } else { "keys" },
            row.file_path.dimmed(),
            marker,
            padding = padding
        );
    }
}

/// Print check issues followed by a summary line.
pub fn print_issues(issues: &[CheckIssue]) {
    print_issues_to(issues, &mut io::stdout().lock());
}

pub fn print_issues_to<W: Write>(issues: &[CheckIssue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        print_issue(issue, writer);
    }
    print_summary(issues, writer);
}

pub fn print_success(locale_files: usize) {
    print_success_to(locale_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(locale_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_issue<W: Write>(issue: &CheckIssue, writer: &mut W) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        issue.message(),
        issue.rule().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[CheckIssue], writer: &mut W) {
    let errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        errors,
        if errors == 1 { "error" } else { "errors" }.red(),
        warnings,
        if warnings == 1 { "warning" } else { "warnings" }.yellow()
    );
}

fn truncate(text: &str, max_width: usize) -> String {
    let single_line = text.replace('\n', "\\n");
    if UnicodeWidthStr::width(single_line.as_str()) <= max_width {
        return single_line;
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in single_line.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result.push('…');
    result
}
