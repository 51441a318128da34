//! SteamCMD update-script generation: title selection and rendering.
//!
//! This crate implements the **business logic** between a fetched
//! owned-games list and the emitted script text. It has no HTTP or
//! environment dependencies; the CLI app wires it to the Steam Web API
//! client.
//!
//! # Operations
//!
//! - **Select** — keep/skip titles via an optional whitelist and an
//!   optional skip list
//! - **Render** — sort ascending by app id and emit two lines per title
//! - **Write** — push the rendered script into any `io::Write` sink

pub mod error;
pub mod filter;
pub mod script;

// Re-export primary types for convenience.
pub use error::ScriptError;
pub use filter::SelectionFilter;
pub use script::{ScriptEntry, UpdateScript};
