//! Message file parsers.
//!
//! - `json`: `<locale>.json` dictionaries in a messages directory

pub mod json;
