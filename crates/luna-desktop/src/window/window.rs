//! A single open window

use serde::{Deserialize, Serialize};

use super::WindowId;
use crate::math::{Size, Vec2};

/// One open application instance
///
/// `position` is kept while the window is maximized so that un-maximizing
/// puts the frame back where it was; the maximized layout itself is a
/// rendering concern derived from `is_maximized`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique among open windows, equal to the content id
    pub id: WindowId,
    /// Display title derived from the id
    pub title: String,
    /// Opaque tag handed to the content renderer
    pub content: String,
    /// Top-left corner in desktop coordinates
    pub position: Vec2,
    /// Frame size (never below the configured minimum)
    pub size: Size,
    /// Minimized windows are not rendered and cannot hold focus
    pub is_minimized: bool,
    /// Maximized windows render at the full-desktop layout
    pub is_maximized: bool,
}

impl Window {
    pub(crate) fn new(id: &str, position: Vec2, size: Size) -> Self {
        Self {
            id: id.to_string(),
            title: title_for(id),
            content: id.to_string(),
            position,
            size,
            is_minimized: false,
            is_maximized: false,
        }
    }

    /// Whether the frame is rendered at all
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    /// Whether the frame shows a resize handle
    pub fn is_resizable(&self) -> bool {
        !self.is_minimized && !self.is_maximized
    }
}

/// Display title for a content id: the id with its first character upper-cased
pub fn title_for(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
