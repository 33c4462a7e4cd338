use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_keys_lists_tokens_aligned() -> Result<()> {
    let test = CliTest::with_messages(&[(
        "en",
        r#"{
          "nav": {"home": "Home", "about": "About us"},
          "items": {"0": "none", "1": "one", "2": "{{count}} items"},
          "title": "Title"
        }"#,
    )])?;

    let output = run(test.command().arg("keys"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "items.[...]  0: none | 1: one | 2: {{count}} items\n\
         nav.about    About us\n\
         nav.home     Home\n\
         title        Title\n"
    );
    Ok(())
}

#[test]
fn test_keys_for_explicit_locale() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("de", r#"{"a": "A-de"}"#),
        ("en", r#"{"b": "B-en"}"#),
    ])?;

    let output = run(test.command().args(["keys", "--locale", "en"]))?;

    assert_eq!(output.stdout, "b  B-en\n");
    Ok(())
}

#[test]
fn test_keys_unknown_locale() -> Result<()> {
    let test = CliTest::with_messages(&[("en", r#"{"a": "A"}"#)])?;

    let output = run(test.command().args(["keys", "--locale", "fr"]))?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert_eq!(
        output.stderr,
        "warning: locale 'fr' does not exist in a dictionary; locale was not set\n"
    );
    Ok(())
}

#[test]
fn test_keys_without_dictionaries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/.keep", "")?;

    let output = run(test.command().arg("keys"))?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "warning: no dictionaries provided\n");
    Ok(())
}
