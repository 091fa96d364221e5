//! Recently opened applications

use serde::{Deserialize, Serialize};

/// Maximum number of entries in the recent list
pub const RECENT_LIMIT: usize = 6;

/// Receives "window opened" notifications and serves the recent list
pub trait RecencyTracker {
    /// Record that a window for `id` was created
    fn record_opened(&mut self, id: &str);

    /// Recent ids, most recent first
    fn recent(&self) -> &[String];
}

/// In-memory recent list: most recent first, de-duplicated, capped
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentApps {
    ids: Vec<String>,
}

impl RecentApps {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stored list, normalizing duplicates and length
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut recent = Self::new();
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        // Oldest first so the head of the stored list ends up in front.
        for id in ids.iter().rev() {
            recent.push_front(id);
        }
        recent
    }

    /// Move `id` to the front, dropping any older entry and the overflow
    pub fn push_front(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(RECENT_LIMIT);
    }

    /// Recent ids, most recent first
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl RecencyTracker for RecentApps {
    fn record_opened(&mut self, id: &str) {
        self.push_front(id);
    }

    fn recent(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut recent = RecentApps::new();
        recent.record_opened("about");
        recent.record_opened("game");

        assert_eq!(recent.recent(), ["game", "about"]);
    }

    #[test]
    fn test_reopen_moves_to_front_without_duplicate() {
        let mut recent = RecentApps::new();
        recent.record_opened("about");
        recent.record_opened("game");
        recent.record_opened("about");

        assert_eq!(recent.recent(), ["about", "game"]);
    }

    #[test]
    fn test_capped_at_limit() {
        let mut recent = RecentApps::new();
        for id in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            recent.record_opened(id);
        }

        assert_eq!(recent.recent().len(), RECENT_LIMIT);
        assert_eq!(recent.recent(), ["h", "g", "f", "e", "d", "c"]);
    }

    #[test]
    fn test_from_ids_normalizes() {
        let recent = RecentApps::from_ids(["a", "b", "a", "c", "d", "e", "f", "g"]);
        assert_eq!(recent.ids(), ["a", "b", "c", "d", "e", "f"]);
    }
}
