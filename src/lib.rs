//! Phrasebook - token-based translation for applications
//!
//! Phrases live in nested per-locale dictionaries and are addressed by
//! dot-separated tokens such as `nav.home`. A [`core::Provider`] picks the
//! initial locale from the available dictionaries, an explicit default and
//! the host's preferences, then resolves tokens with numeric variant
//! selection (`{"0": "no items", "1": "one item", "2": "{{count}} items"}`),
//! context phrases and `{{placeholder}}` interpolation. Anything that cannot
//! be translated falls back to the token and is reported as a warning.
//!
//! ## Module Structure
//!
//! - `core`: Translation engine and message file loading
//! - `config`: Configuration file loading and parsing
//! - `render`: Attribute-driven rendering over host-provided elements
//! - `cli`: Command-line interface layer
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod render;
