use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::project::Project;
use crate::{
    cli::{args::TranslateCommand, exit_status::ExitStatus, report},
    core::{CollectingSink, TranslationData, Warning},
};

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let project = Project::load(&cmd.common)?;
    report::print_load_warnings(&project.messages.warnings, project.verbose);

    let data = parse_data(cmd.data.as_deref(), cmd.count)?;

    let sink = CollectingSink::new();
    let provider = project.provider(&sink);
    report::print_warnings(&sink.take());

    match provider.try_translate(&cmd.token, data.as_ref(), cmd.locale.as_deref()) {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitStatus::Success)
        }
        Err(error) => {
            if !project.config.quiet {
                report::print_warnings(&[Warning::Translate(error)]);
            }
            println!("{}", cmd.token);
            Ok(ExitStatus::Failure)
        }
    }
}

/// Build translation data from `--data` and `--count`.
pub fn parse_data(data: Option<&str>, count: Option<f64>) -> Result<Option<TranslationData>> {
    let mut result = match data {
        Some(raw) => {
            let value: Value =
                serde_json::from_str(raw).context("Failed to parse --data as JSON")?;
            if !value.is_object() {
                bail!("--data must be a JSON object, got: {}", raw);
            }
            Some(TranslationData::from_value(value))
        }
        None => None,
    };

    if let Some(count) = count {
        result = Some(result.unwrap_or_default().with_count(count));
    }

    Ok(result)
}
