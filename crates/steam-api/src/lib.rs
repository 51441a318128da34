//! Steam Web API client for owned-games listing.
//!
//! Async client for the [Steam Web API](https://steamcommunity.com/dev)
//! endpoints this workspace needs: the owned-games listing and vanity
//! profile name resolution.

pub mod client;
pub mod types;

pub use client::{Client, Error};
pub use types::OwnedGame;
