//! SteamCMD update-script rendering.

use std::io::Write;

use crate::error::ScriptError;

const STORE_APP_URL: &str = "https://store.steampowered.com/app";

/// One surviving title, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub app_id: u32,
    pub name: String,
}

/// A fully assembled update script.
///
/// Entries are sorted ascending by app id at construction; rendering is
/// deterministic for a given entry set.
#[derive(Debug, Clone)]
pub struct UpdateScript {
    entries: Vec<ScriptEntry>,
    validate: bool,
}

impl UpdateScript {
    /// Builds a script, sorting entries ascending by app id.
    ///
    /// The sort is stable, so duplicate ids keep their incoming order.
    pub fn new(mut entries: Vec<ScriptEntry>, validate: bool) -> Self {
        entries.sort_by_key(|e| e.app_id);
        tracing::debug!(count = entries.len(), validate, "script assembled");
        Self { entries, validate }
    }

    /// Number of titles in the script.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no titles survived selection.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the full script.
    ///
    /// Two newline-terminated lines per title, no header or footer:
    /// a store-page comment, then the `app_update` command.
    pub fn render(&self) -> String {
        let validate_flag = if self.validate { " -validate" } else { "" };
        let mut out = String::new();

        for entry in &self.entries {
            out.push_str(&format!(
                "// {} - {}/{}\n",
                entry.name, STORE_APP_URL, entry.app_id
            ));
            out.push_str(&format!("app_update {}{}\n", entry.app_id, validate_flag));
        }

        out
    }

    /// Writes the rendered script to a sink and flushes it.
    pub fn write_to(&self, sink: &mut impl Write) -> Result<(), ScriptError> {
        sink.write_all(self.render().as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}
