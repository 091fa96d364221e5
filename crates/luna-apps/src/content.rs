//! Content-id to view resolution

use serde::Serialize;

use crate::pages::{self, Page};

/// What a window with a given content id shows
///
/// Interactive views carry no state here; the host keeps one instance of
/// the matching type (e.g. [`TicTacToe`](crate::TicTacToe)) per window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentView {
    Page(&'static Page),
    TicTacToe,
    Terminal,
    Settings,
    DontOpen,
    /// Placeholder for ids nothing knows how to render
    #[serde(rename_all = "camelCase")]
    NotFound { content_id: String },
}

/// Ids of the interactive views
const APP_IDS: [&str; 4] = ["game", "terminal", "settings", "dont-open"];

/// Every content id [`resolve`] maps to a real view
pub fn known_ids() -> impl Iterator<Item = &'static str> {
    APP_IDS.iter().copied().chain(pages::PAGES.iter().map(|page| page.id))
}

/// Map a content id to its view
///
/// Never fails: unknown ids resolve to [`ContentView::NotFound`].
pub fn resolve(content_id: &str) -> ContentView {
    match content_id {
        "game" => ContentView::TicTacToe,
        "terminal" => ContentView::Terminal,
        "settings" => ContentView::Settings,
        "dont-open" => ContentView::DontOpen,
        _ => match pages::find(content_id) {
            Some(page) => ContentView::Page(page),
            None => {
                tracing::debug!(content_id, "no view for content id");
                ContentView::NotFound {
                    content_id: content_id.to_string(),
                }
            }
        },
    }
}

impl ContentView {
    /// Check if this is the not-found placeholder
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentView::NotFound { .. })
    }

    /// Placeholder text shown for unknown content
    pub fn not_found_text() -> &'static str {
        "Content not found"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_ids() {
        assert_eq!(resolve("game"), ContentView::TicTacToe);
        assert_eq!(resolve("terminal"), ContentView::Terminal);
        assert_eq!(resolve("settings"), ContentView::Settings);
        assert_eq!(resolve("dont-open"), ContentView::DontOpen);
        assert_eq!(resolve("about"), ContentView::Page(&pages::ABOUT));
    }

    #[test]
    fn test_known_ids_all_resolve() {
        let ids: Vec<_> = known_ids().collect();
        assert_eq!(ids.len(), 11);
        for id in ids {
            assert!(!resolve(id).is_not_found(), "{}", id);
        }
    }

    #[test]
    fn test_resolve_unknown_id() {
        let view = resolve("minesweeper");
        assert!(view.is_not_found());
        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"kind":"notFound","contentId":"minesweeper"}"#
        );
    }
}
