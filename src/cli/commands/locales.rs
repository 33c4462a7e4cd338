use anyhow::Result;

use super::project::Project;
use crate::{
    cli::{args::LocalesCommand, exit_status::ExitStatus, report},
    core::CollectingSink,
};

/// One line of `phrasebook locales`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRow {
    pub locale: String,
    pub file_path: String,
    pub key_count: usize,
    pub current: bool,
}

pub fn locales(cmd: LocalesCommand) -> Result<ExitStatus> {
    let project = Project::load(&cmd.common)?;
    report::print_load_warnings(&project.messages.warnings, project.verbose);

    let sink = CollectingSink::new();
    let provider = project.provider(&sink);
    report::print_warnings(&sink.take());

    let current = provider.get_language();
    let rows: Vec<LocaleRow> = project
        .messages
        .files
        .iter()
        .map(|file| LocaleRow {
            locale: file.dictionary.locale.to_string(),
            file_path: project.display_path(&file.file_path).to_string(),
            key_count: file.dictionary.phrases.leaf_count(),
            current: current == Some(&file.dictionary.locale),
        })
        .collect();

    report::print_locales(&rows);
    Ok(ExitStatus::from_failed(rows.is_empty()))
}
