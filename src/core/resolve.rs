//! Token parsing and path traversal.
//!
//! A token is a dot-separated path such as `cart.items.[...]` or
//! `greeting.(formal)`. The `[...]` segment and the parentheses only describe
//! the kind of phrase expected at the leaf; they are never tree keys.

use std::borrow::Cow;

use super::phrase::{Phrase, PhraseTree};

/// Segment marking a numeric-variant leaf.
pub const VARIANT_MARKER: &str = "[...]";

/// Split a token into tree keys, stripping markers.
///
/// ```
/// use phrasebook::core::token_segments;
///
/// assert_eq!(token_segments("cart.items.[...]"), vec!["cart", "items"]);
/// assert_eq!(token_segments("greeting.(formal)"), vec!["greeting", "formal"]);
/// ```
pub fn token_segments(token: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut rest = token;
    loop {
        if let Some(after) = rest.strip_prefix(VARIANT_MARKER)
            && (after.is_empty() || after.starts_with('.'))
        {
            match after.strip_prefix('.') {
                Some(next) => {
                    rest = next;
                    continue;
                }
                None => break,
            }
        }
        match rest.split_once('.') {
            Some((segment, next)) => {
                segments.push(strip_context_marker(segment));
                rest = next;
            }
            None => {
                segments.push(strip_context_marker(rest));
                break;
            }
        }
    }
    segments
}

fn strip_context_marker(segment: &str) -> &str {
    segment
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(segment)
}

/// Walk `token` through `tree`.
///
/// Returns `None` when a segment is missing or empty, or when the walk needs
/// to descend into a text or context leaf. A variant map can be entered by
/// one exact threshold key (`errors.404`), which yields that variant as text.
/// The returned phrase may itself be a group; deciding whether that is usable
/// is up to the caller.
pub fn resolve<'a>(tree: &'a PhraseTree, token: &str) -> Option<Cow<'a, Phrase>> {
    let segments = token_segments(token);
    let (first, rest) = segments.split_first()?;

    let mut current = lookup(tree, first)?;
    for (index, segment) in rest.iter().enumerate() {
        match current {
            Phrase::Tree(child) => current = lookup(child, segment)?,
            Phrase::Variants(variants) if index + 1 == rest.len() => {
                return variants.get(segment).map(|text| Cow::Owned(Phrase::text(text)));
            }
            _ => return None,
        }
    }
    Some(Cow::Borrowed(current))
}

fn lookup<'a>(tree: &'a PhraseTree, segment: &str) -> Option<&'a Phrase> {
    if segment.is_empty() {
        return None;
    }
    tree.get(segment)
}
