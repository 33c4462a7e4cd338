use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{"nav": {"home": "Home"}, "n": {"0": "none", "1": "one"}}"#),
        ("de", r#"{"nav": {"home": "Start"}, "n": {"0": "keine", "1": "eins"}}"#),
    ])?;

    let output = run(test.command().arg("check"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Checked 2 locale files - no issues found\n");
    Ok(())
}

#[test]
fn test_check_against_default_locale() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("de", r#"{"nav": {"home": "Start", "blog": "Blog"}, "n": "Artikel"}"#),
        (
            "en",
            r#"{"nav": {"home": "Home", "about": "About"}, "n": {"0": "none", "1": "one"}}"#,
        ),
    ])?;
    test.write_file(".phrasebookrc.json", r#"{"defaultLocale": "en"}"#)?;

    let output = run(test.command().arg("check"))?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "error: \"n\" has a different shape in locale 'de'  kind-mismatch\n  \
         --> messages/de.json\n  \
         = note: expected variants, found text\n\n\
         error: \"nav.about\" is missing in locale 'de'  missing-token\n  \
         --> messages/de.json\n\n\
         warning: \"nav.blog\" exists only in locale 'de'  extra-token\n  \
         --> messages/de.json\n\n\
         ✘ 3 problems (2 errors, 1 warning)\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_unloadable_file() -> Result<()> {
    let test = CliTest::with_messages(&[("en", r#"{"a": "A"}"#), ("fr", r#"{"a": 1}"#)])?;

    let output = run(test.command().arg("check"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: message file could not be loaded  load-error"));
    assert!(output.stdout.contains("--> messages/fr.json"));
    assert!(output.stdout.contains("'a'"));
    assert!(output.stdout.contains("1 problems (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_default_locale_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("de", r#"{"a": "A", "b": "B"}"#),
        ("en", r#"{"a": "A"}"#),
    ])?;
    test.write_file(".phrasebookrc.json", r#"{"defaultLocale": "en"}"#)?;

    let output = run(test.command().args(["check", "--default-locale", "de"]))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\"b\" is missing in locale 'en'"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;

    assert_eq!(output.code, Some(0));
    for command in ["translate", "keys", "locales", "check", "init", "serve"] {
        assert!(output.stdout.contains(command), "missing {command} in help");
    }
    Ok(())
}
