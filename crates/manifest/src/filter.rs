//! Whitelist / skip-list title selection.

/// Decides which owned titles make it into the generated script.
///
/// Both lists hold raw strings compared against a title's app id (decimal
/// rendering) and its display name. A non-empty whitelist is the sole
/// inclusion criterion; the skip list applies on top of it either way.
#[derive(Debug, Clone, Default)]
pub struct SelectionFilter {
    whitelist: Vec<String>,
    skip: Vec<String>,
}

impl SelectionFilter {
    /// Creates a filter from already-parsed lists.
    pub fn new(whitelist: Vec<String>, skip: Vec<String>) -> Self {
        Self { whitelist, skip }
    }

    /// Parses a comma-separated list value into entries.
    ///
    /// Entries are trimmed but otherwise kept verbatim, including empty
    /// ones produced by stray commas. An empty value means "no list".
    pub fn parse_list(value: &str) -> Vec<String> {
        if value.is_empty() {
            return Vec::new();
        }
        value.split(',').map(|e| e.trim().to_string()).collect()
    }

    /// Returns `true` when the title must not appear in the script.
    ///
    /// Matching is exact string equality against the id's decimal form or
    /// the name. No case folding, no substring matching.
    pub fn should_skip(&self, app_id: u32, name: &str) -> bool {
        let id = app_id.to_string();

        if !self.whitelist.is_empty() && !self.whitelist.iter().any(|w| *w == id || w == name) {
            return true;
        }

        self.skip.iter().any(|s| *s == id || s == name)
    }
}
