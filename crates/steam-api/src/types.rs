//! Wire types for the Steam Web API.

use serde::{Deserialize, Serialize};

/// One owned title from `GetOwnedGames`.
///
/// `name` is only populated when the request asks for app info; playtime
/// fields are carried as the API sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGame {
    #[serde(rename = "appid")]
    pub app_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub playtime_forever: u32,
    #[serde(default)]
    pub img_icon_url: String,
}

/// Response envelope for `GetOwnedGames` (internal).
#[derive(Debug, Deserialize)]
pub(crate) struct OwnedGamesEnvelope {
    #[serde(default)]
    pub response: OwnedGamesResponse,
}

/// Payload of `GetOwnedGames`.
///
/// A private profile comes back with neither field set.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pub game_count: u32,
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

/// Response envelope for `ResolveVanityURL` (internal).
#[derive(Debug, Deserialize)]
pub(crate) struct VanityEnvelope {
    #[serde(default)]
    pub response: VanityResponse,
}

/// Payload of `ResolveVanityURL`.
///
/// `success == 1` means a match; any other code leaves `steamid` unset and
/// puts the reason in `message`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VanityResponse {
    pub steamid: Option<String>,
    #[serde(default)]
    pub success: i32,
    #[serde(default)]
    #[allow(dead_code)]
    pub message: String,
}
