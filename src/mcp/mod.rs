//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes translation lookups and project inspection to AI assistants over
//! stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool definitions and the stdio entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{PhrasebookMcpServer, run_server};
