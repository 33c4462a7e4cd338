use anyhow::Result;

use super::project::Project;
use crate::{
    cli::{args::KeysCommand, exit_status::ExitStatus, report},
    core::{CollectingSink, LocaleCode, Warning},
};

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let project = Project::load(&cmd.common)?;
    report::print_load_warnings(&project.messages.warnings, project.verbose);

    let sink = CollectingSink::new();
    let provider = project.provider(&sink);
    report::print_warnings(&sink.take());

    let locale = match &cmd.locale {
        Some(code) => Some(LocaleCode::new(code)),
        None => provider.get_language().cloned(),
    };
    let Some(locale) = locale else {
        return Ok(ExitStatus::Failure);
    };

    let Some(dictionary) = provider.dictionary(locale.as_str()) else {
        report::print_warnings(&[Warning::UnknownLocale { locale }]);
        return Ok(ExitStatus::Failure);
    };

    report::print_keys(&dictionary.phrases.tokens());
    Ok(ExitStatus::Success)
}
