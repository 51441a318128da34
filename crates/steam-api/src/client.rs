//! Steam Web API client.
//!
//! Async HTTP client using `reqwest`. The API key travels as the `key`
//! query parameter on every request.

use crate::types::{OwnedGame, OwnedGamesEnvelope, VanityEnvelope};

const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Errors from the Steam Web API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no Steam account matches vanity name {0:?}")]
    VanityNotFound(String),
}

/// Steam Web API client.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new client with the given API key.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Sets a custom base URL (for testing).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Performs an authenticated GET request.
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Vec<u8>, Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        let resp = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Returns every title the account owns.
    ///
    /// Asks for app info so titles come back with display names, and
    /// includes played free titles. A private profile yields an empty
    /// list rather than an error.
    pub async fn get_owned_games(&self, steam_id: &str) -> Result<Vec<OwnedGame>, Error> {
        let params = [
            ("steamid".to_string(), steam_id.to_string()),
            ("include_appinfo".to_string(), "1".to_string()),
            ("include_played_free_games".to_string(), "1".to_string()),
        ];
        let body = self
            .get("/IPlayerService/GetOwnedGames/v1/", &params)
            .await?;
        let envelope: OwnedGamesEnvelope = serde_json::from_slice(&body)?;

        tracing::debug!(
            count = envelope.response.games.len(),
            "owned games response decoded"
        );
        Ok(envelope.response.games)
    }

    /// Resolves a vanity profile name to a 64-bit Steam ID string.
    pub async fn resolve_vanity_url(&self, name: &str) -> Result<String, Error> {
        let params = [("vanityurl".to_string(), name.to_string())];
        let body = self.get("/ISteamUser/ResolveVanityURL/v1/", &params).await?;
        let envelope: VanityEnvelope = serde_json::from_slice(&body)?;

        match envelope.response.steamid {
            Some(id) if envelope.response.success == 1 => Ok(id),
            _ => Err(Error::VanityNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Starts a one-shot HTTP server answering with the given status and body.
    async fn mock_server(status: u16, body: &str) -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let _ = stream.read(&mut buf).await;

                let resp = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(resp.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (url, handle)
    }

    #[tokio::test]
    async fn owned_games_returns_list() {
        let json = r#"{"response":{"game_count":2,"games":[
            {"appid":10,"name":"Counter-Strike","playtime_forever":32},
            {"appid":440,"name":"Team Fortress 2","playtime_forever":0}
        ]}}"#;
        let (url, handle) = mock_server(200, json).await;

        let client = Client::new("test-key").unwrap().with_base_url(url);
        let games = client.get_owned_games("76561197960435530").await.unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].app_id, 10);
        assert_eq!(games[0].name, "Counter-Strike");
        assert_eq!(games[1].app_id, 440);

        handle.abort();
    }

    #[tokio::test]
    async fn owned_games_private_profile_is_empty() {
        let (url, handle) = mock_server(200, r#"{"response":{}}"#).await;

        let client = Client::new("test-key").unwrap().with_base_url(url);
        let games = client.get_owned_games("76561197960435530").await.unwrap();

        assert!(games.is_empty());

        handle.abort();
    }

    #[tokio::test]
    async fn owned_games_api_error() {
        let (url, handle) = mock_server(401, r#"{"error":"Unauthorized"}"#).await;

        let client = Client::new("bad-key").unwrap().with_base_url(url);
        let err = client
            .get_owned_games("76561197960435530")
            .await
            .unwrap_err();

        let err_msg = err.to_string();
        assert!(
            err_msg.contains("401"),
            "error should mention 401: {err_msg}"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn owned_games_malformed_payload() {
        let (url, handle) = mock_server(200, "not json at all").await;

        let client = Client::new("test-key").unwrap().with_base_url(url);
        let err = client
            .get_owned_games("76561197960435530")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Json(_)));

        handle.abort();
    }

    #[tokio::test]
    async fn resolve_vanity_match() {
        let json = r#"{"response":{"steamid":"76561197960435530","success":1}}"#;
        let (url, handle) = mock_server(200, json).await;

        let client = Client::new("test-key").unwrap().with_base_url(url);
        let id = client.resolve_vanity_url("gaben").await.unwrap();

        assert_eq!(id, "76561197960435530");

        handle.abort();
    }

    #[tokio::test]
    async fn resolve_vanity_no_match() {
        let json = r#"{"response":{"success":42,"message":"No match"}}"#;
        let (url, handle) = mock_server(200, json).await;

        let client = Client::new("test-key").unwrap().with_base_url(url);
        let err = client.resolve_vanity_url("nobody-here").await.unwrap_err();

        assert!(matches!(err, Error::VanityNotFound(_)));

        handle.abort();
    }

    #[test]
    fn client_new_succeeds() {
        let client = Client::new("valid-key");
        assert!(client.is_ok());
    }
}
