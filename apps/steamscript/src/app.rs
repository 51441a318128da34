//! Pipeline orchestration: fetch, filter, sort, write.

use std::fs::File;
use std::io::{self, BufWriter};

use steamscript_manifest::{ScriptEntry, SelectionFilter, UpdateScript};
use steamscript_steam_api::Client;

use crate::config::Config;

/// Runs the whole pipeline once.
///
/// The output sink is not opened until the fetch has resolved, so a failed
/// fetch creates no file and writes nothing.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let client = Client::new(&config.api_key)?;

    // -- Resolve profile --
    let steam_id = resolve_profile_id(&client, &config.profile_id).await?;

    // -- Fetch --
    let games = client.get_owned_games(&steam_id).await?;
    tracing::info!(count = games.len(), "owned games fetched");

    // -- Filter + sort --
    let fetched = games.len();
    let filter = SelectionFilter::new(config.whitelist, config.skip_games);
    let entries: Vec<ScriptEntry> = games
        .into_iter()
        .filter(|g| !filter.should_skip(g.app_id, &g.name))
        .map(|g| ScriptEntry {
            app_id: g.app_id,
            name: g.name,
        })
        .collect();
    let script = UpdateScript::new(entries, config.force_validate);
    tracing::info!(
        kept = script.len(),
        skipped = fetched - script.len(),
        "titles selected"
    );

    // -- Write --
    match &config.output_file {
        Some(path) => {
            let mut sink = BufWriter::new(File::create(path)?);
            script.write_to(&mut sink)?;
            tracing::info!(path = %path.display(), "script written");
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            script.write_to(&mut sink)?;
        }
    }

    Ok(())
}

/// Returns the 64-bit Steam ID for the configured profile identifier.
///
/// A 17-digit numeric identifier is used as-is; anything else is treated
/// as a vanity profile name and resolved through the API.
async fn resolve_profile_id(client: &Client, profile_id: &str) -> anyhow::Result<String> {
    if profile_id.len() == 17 && profile_id.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(profile_id.to_string());
    }

    tracing::debug!(profile_id, "resolving vanity profile name");
    let id = client.resolve_vanity_url(profile_id).await?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn numeric_64bit_id_passes_through() {
        // A 17-digit id resolves without any network round trip. The vanity
        // path is covered by the client crate's own tests.
        let client = Client::new("test-key").unwrap();
        let id = resolve_profile_id(&client, "76561197960435530")
            .await
            .unwrap();
        assert_eq!(id, "76561197960435530");
    }
}
