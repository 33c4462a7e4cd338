//! Behaviour of the public translation API, end to end.

use std::sync::{Arc, Mutex};

use phrasebook::core::{
    CollectingSink, Dictionary, LocaleCode, Phrase, PhraseTree, Provider, StaticEnvironment,
    TranslationData, VariantMap, Warning,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn dictionary(locale: &str, value: Value) -> Dictionary {
    Dictionary::from_json(locale, &value).unwrap()
}

fn provider_with(dictionaries: Vec<Dictionary>, sink: &CollectingSink) -> Provider {
    Provider::builder()
        .dictionaries(dictionaries)
        .environment(StaticEnvironment::empty())
        .warnings(sink.clone())
        .build()
}

fn sample() -> Vec<Dictionary> {
    vec![
        dictionary(
            "en",
            json!({
                "title": "Catalogue",
                "hello": "Hello {{name}}",
                "cart": {"items": {"0": "empty", "1": "one", "5": "a few", "10": "many"}}
            }),
        ),
        dictionary("de", json!({"title": "Katalog", "hello": "Hallo {{name}}"})),
    ]
}

#[test]
fn plain_phrase_is_returned_unmodified() {
    let sink = CollectingSink::new();
    let provider = provider_with(sample(), &sink);

    assert_eq!(provider.translate("title", None, Some("en")), "Catalogue");
    assert_eq!(provider.translate("title", None, Some("de")), "Katalog");
    assert!(sink.warnings().is_empty());
}

#[test]
fn variant_selection_takes_greatest_threshold_not_above_count() {
    let sink = CollectingSink::new();
    let provider = provider_with(sample(), &sink);

    let cases: [(f64, &str); 6] = [
        (0.0, "empty"),
        (1.0, "one"),
        (4.0, "one"),
        (5.0, "a few"),
        (7.5, "a few"),
        (100.0, "many"),
    ];
    for (count, expected) in cases {
        let data = TranslationData::new().with_count(count);
        assert_eq!(
            provider.translate("cart.items.[...]", Some(&data), Some("en")),
            expected,
            "count = {count}"
        );
    }
}

#[test]
fn variant_map_select_matches_provider() {
    let variants =
        VariantMap::from_entries([("0", "a"), ("1", "b"), ("5", "c"), ("10", "d")]).unwrap();
    assert_eq!(variants.select(Some(4.0)), "b");
    assert_eq!(variants.select(Some(10.0)), "d");
    assert_eq!(variants.select(None), "b");
}

#[test]
fn translate_is_idempotent() {
    let sink = CollectingSink::new();
    let provider = provider_with(sample(), &sink);
    let data = TranslationData::new().with("name", "Ada");

    let first = provider.translate("hello", Some(&data), None);
    let second = provider.translate("hello", Some(&data), None);
    assert_eq!(first, second);
    assert_eq!(provider.get_language(), Some(&LocaleCode::new("en")));
}

#[test]
fn set_language_round_trip() {
    let sink = CollectingSink::new();
    let mut provider = provider_with(sample(), &sink);

    assert!(provider.set_language("DE"));
    assert_eq!(provider.get_language().map(LocaleCode::as_str), Some("de"));

    assert!(!provider.set_language("fr"));
    assert_eq!(provider.get_language().map(LocaleCode::as_str), Some("de"));
    assert_eq!(
        sink.take(),
        vec![Warning::UnknownLocale {
            locale: LocaleCode::new("fr")
        }]
    );
}

#[test]
fn unknown_token_returns_token() {
    let sink = CollectingSink::new();
    let provider = provider_with(sample(), &sink);

    assert_eq!(
        provider.translate("does.not.exist", None, None),
        "does.not.exist"
    );
    assert_eq!(sink.take().len(), 1);
}

#[test]
fn interpolation_with_and_without_value() {
    let sink = CollectingSink::new();
    let provider = provider_with(sample(), &sink);

    let data = TranslationData::from_value(json!({"name": "World"}));
    assert_eq!(provider.translate("hello", Some(&data), None), "Hello World");
    assert_eq!(
        provider.translate("hello", Some(&TranslationData::new()), None),
        "Hello undefined"
    );
}

#[test]
fn context_phrase_receives_ctx() {
    let tree = PhraseTree::new().with(
        "(context)",
        Phrase::context(|ctx| {
            if ctx.as_bool() == Some(true) {
                "Test True".to_string()
            } else {
                "Test False".to_string()
            }
        }),
    );
    let sink = CollectingSink::new();
    let provider = provider_with(vec![Dictionary::new("en", tree)], &sink);

    let yes = TranslationData::new().with_ctx(true);
    let no = TranslationData::new().with_ctx(false);
    assert_eq!(provider.translate("(context)", Some(&yes), None), "Test True");
    assert_eq!(provider.translate("(context)", Some(&no), None), "Test False");
    assert_eq!(provider.translate("(context)", None, None), "Test False");
}

#[test]
fn locale_codes_are_case_insensitive() {
    let sink = CollectingSink::new();
    let provider = provider_with(vec![dictionary("EN", json!({"a": "A"}))], &sink);

    assert_eq!(provider.translate("a", None, Some("en")), "A");
    assert_eq!(provider.translate("a", None, Some("En")), "A");
    assert!(sink.warnings().is_empty());
}

#[test]
fn initial_locale_prefers_default_then_ambient() {
    let sink = CollectingSink::new();

    let explicit = Provider::builder()
        .dictionaries(sample())
        .default_locale("de")
        .environment(StaticEnvironment::new(["en-US"]))
        .warnings(sink.clone())
        .build();
    assert_eq!(explicit.get_language().map(LocaleCode::as_str), Some("de"));

    let ambient = Provider::builder()
        .dictionaries(sample())
        .environment(StaticEnvironment::new(["fr-FR", "de-AT"]))
        .warnings(sink.clone())
        .build();
    assert_eq!(ambient.get_language().map(LocaleCode::as_str), Some("de"));

    assert!(sink.warnings().is_empty());
}

#[test]
fn listeners_follow_successful_changes_only() {
    let sink = CollectingSink::new();
    let mut provider = provider_with(sample(), &sink);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let recorder = Arc::clone(&seen);
    let subscription = provider.on_language_changed(move |locale| {
        recorder.lock().unwrap().push(locale.to_string());
    });

    provider.set_language("de");
    provider.set_language("xx");
    provider.set_language("en");
    assert!(provider.unsubscribe(subscription));
    provider.set_language("de");

    assert_eq!(*seen.lock().unwrap(), vec!["de", "en"]);
}

#[test]
fn quiet_provider_reports_nothing() {
    let sink = CollectingSink::new();
    let mut provider = Provider::builder()
        .quiet(true)
        .environment(StaticEnvironment::empty())
        .warnings(sink.clone())
        .build();

    assert_eq!(provider.translate("x", None, None), "x");
    assert!(!provider.set_language("en"));
    assert!(sink.warnings().is_empty());
}

#[test]
fn translator_binds_current_locale() {
    let sink = CollectingSink::new();
    let provider = provider_with(sample(), &sink);
    let t = provider.translator();

    let data = TranslationData::new().with("name", "Ada");
    assert_eq!(t("hello", Some(&data)), "Hello Ada");
    assert_eq!(t("title", None), "Catalogue");
}

#[test]
fn numeric_keys_can_be_addressed_directly() {
    let sink = CollectingSink::new();
    let provider = provider_with(
        vec![dictionary(
            "en",
            json!({"errors": {"404": "Not found", "500": "Server error"}}),
        )],
        &sink,
    );

    assert_eq!(provider.translate("errors.404", None, None), "Not found");
    assert_eq!(
        provider.translate("errors.[...]", Some(&TranslationData::new().with_count(450)), None),
        "Not found"
    );
    assert!(sink.warnings().is_empty());
}
