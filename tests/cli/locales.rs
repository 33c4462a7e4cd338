use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_locales_marks_first_as_current() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{"a": "A", "b": {"c": "C"}}"#),
        ("zh-CN", r#"{"a": "甲"}"#),
    ])?;

    let output = run(test.command().arg("locales"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "en     2 keys  messages/en.json  (current)\n\
         zh-cn  1 key  messages/zh-CN.json\n"
    );
    Ok(())
}

#[test]
fn test_locales_respects_config_default_locale() -> Result<()> {
    let test = CliTest::with_messages(&[("de", "{}"), ("en", "{}")])?;
    test.write_file(".phrasebookrc.json", r#"{"defaultLocale": "en"}"#)?;

    let output = run(test.command().arg("locales"))?;

    assert_eq!(
        output.stdout,
        "de  0 keys  messages/de.json\n\
         en  0 keys  messages/en.json  (current)\n"
    );
    Ok(())
}

#[test]
fn test_locales_custom_messages_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/fr.json", r#"{"a": "A"}"#)?;

    let output = run(test.command().args(["locales", "--messages-root", "i18n"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "fr  1 key  i18n/fr.json  (current)\n");
    Ok(())
}
