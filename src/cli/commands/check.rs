use std::collections::BTreeMap;

use anyhow::Result;

use super::project::Project;
use crate::{
    cli::{args::CheckCommand, exit_status::ExitStatus, report},
    core::{
        LocaleCode, PhraseKind,
        parsers::json::{MessageFile, MessageScanWarning},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found by comparing locales against the reference locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckIssue {
    /// A message file that could not be loaded.
    LoadFailed { file_path: String, error: String },
    /// Token present in the reference locale but not in `locale`.
    Missing {
        token: String,
        locale: LocaleCode,
        file_path: String,
    },
    /// Token present in `locale` but not in the reference locale.
    Extra {
        token: String,
        locale: LocaleCode,
        file_path: String,
    },
    /// Token present in both, with a different phrase kind.
    KindMismatch {
        token: String,
        locale: LocaleCode,
        file_path: String,
        expected: PhraseKind,
        found: PhraseKind,
    },
}

impl CheckIssue {
    pub fn severity(&self) -> Severity {
        match self {
            CheckIssue::Extra { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            CheckIssue::LoadFailed { file_path, .. }
            | CheckIssue::Missing { file_path, .. }
            | CheckIssue::Extra { file_path, .. }
            | CheckIssue::KindMismatch { file_path, .. } => file_path,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CheckIssue::LoadFailed { .. } => "message file could not be loaded".to_string(),
            CheckIssue::Missing { token, locale, .. } => {
                format!("\"{}\" is missing in locale '{}'", token, locale)
            }
            CheckIssue::Extra { token, locale, .. } => {
                format!("\"{}\" exists only in locale '{}'", token, locale)
            }
            CheckIssue::KindMismatch { token, locale, .. } => {
                format!("\"{}\" has a different shape in locale '{}'", token, locale)
            }
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            CheckIssue::LoadFailed { error, .. } => Some(error.clone()),
            CheckIssue::KindMismatch {
                expected, found, ..
            } => Some(format!("expected {}, found {}", expected, found)),
            _ => None,
        }
    }

    pub fn rule(&self) -> &'static str {
        match self {
            CheckIssue::LoadFailed { .. } => "load-error",
            CheckIssue::Missing { .. } => "missing-token",
            CheckIssue::Extra { .. } => "extra-token",
            CheckIssue::KindMismatch { .. } => "kind-mismatch",
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let project = Project::load(&cmd.common)?;

    let mut issues: Vec<CheckIssue> = load_issues(&project.messages.warnings);
    let files = &project.messages.files;
    if let Some(locale) = project.reference_locale()
        && let Some(reference) = files.iter().find(|f| &f.dictionary.locale == locale)
    {
        issues.extend(compare_locales(reference, files));
    }

    for issue in &mut issues {
        relativize(&project, issue);
    }

    if issues.is_empty() {
        report::print_success(project.messages.files.len());
        return Ok(ExitStatus::Success);
    }

    report::print_issues(&issues);
    Ok(ExitStatus::Failure)
}

pub fn load_issues(warnings: &[MessageScanWarning]) -> Vec<CheckIssue> {
    warnings
        .iter()
        .map(|w| CheckIssue::LoadFailed {
            file_path: w.file_path.clone(),
            error: w.error.clone(),
        })
        .collect()
}

/// Compare every file in `files` except `reference` against `reference`.
///
/// Issues are ordered by file, then token.
pub fn compare_locales(reference: &MessageFile, files: &[MessageFile]) -> Vec<CheckIssue> {
    let expected = token_kinds(reference);
    let mut issues = Vec::new();

    for file in files {
        if file.dictionary.locale == reference.dictionary.locale {
            continue;
        }
        let locale = &file.dictionary.locale;
        let actual = token_kinds(file);

        for (token, kind) in &expected {
            match actual.get(token) {
                None => issues.push(CheckIssue::Missing {
                    token: token.clone(),
                    locale: locale.clone(),
                    file_path: file.file_path.clone(),
                }),
                Some(found) if found != kind => issues.push(CheckIssue::KindMismatch {
                    token: token.clone(),
                    locale: locale.clone(),
                    file_path: file.file_path.clone(),
                    expected: *kind,
                    found: *found,
                }),
                Some(_) => {}
            }
        }

        for token in actual.keys().filter(|t| !expected.contains_key(*t)) {
            issues.push(CheckIssue::Extra {
                token: token.clone(),
                locale: locale.clone(),
                file_path: file.file_path.clone(),
            });
        }
    }

    issues
}

/// Tokens keyed without variant markers, so a variant map and a plain
/// text under the same path compare as a kind mismatch.
fn token_kinds(file: &MessageFile) -> BTreeMap<String, PhraseKind> {
    file.dictionary
        .phrases
        .tokens()
        .into_iter()
        .map(|entry| (bare_token(&entry.token), entry.kind))
        .collect()
}

fn bare_token(token: &str) -> String {
    crate::core::token_segments(token).join(".")
}

fn relativize(project: &Project, issue: &mut CheckIssue) {
    let path = match issue {
        CheckIssue::LoadFailed { file_path, .. }
        | CheckIssue::Missing { file_path, .. }
        | CheckIssue::Extra { file_path, .. }
        | CheckIssue::KindMismatch { file_path, .. } => file_path,
    };
    *path = project.display_path(path).to_string();
}
