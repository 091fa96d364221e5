//! Preference values and their JSON form

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::launch::RecentApps;

/// Accent color used when none is stored
pub const DEFAULT_ACCENT_COLOR: &str = "#0054E3";

/// Pinned apps used when none are stored
pub const DEFAULT_PINNED_IDS: &[&str] = &["my-computer", "projects", "skills"];

/// Color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse from string ID; anything but "dark" is light
    pub fn from_id(id: &str) -> Self {
        if id == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Get the string ID for this theme
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Stored user preferences
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Custom wallpaper (URL or data URL); `None` uses the built-in one
    pub wallpaper_url: Option<String>,
    /// 24-hour tray clock instead of 12-hour
    #[serde(rename = "use24HourClock")]
    pub use_24_hour_clock: bool,
    pub theme: Theme,
    /// Apps pinned to the start menu
    pub pinned_ids: Vec<String>,
    /// Recently opened apps, most recent first
    pub recent_ids: Vec<String>,
    /// CSS hex color for highlights
    pub accent_color: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            wallpaper_url: None,
            use_24_hour_clock: false,
            theme: Theme::Light,
            pinned_ids: DEFAULT_PINNED_IDS.iter().map(|id| id.to_string()).collect(),
            recent_ids: Vec::new(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

impl Preferences {
    /// Parse stored JSON leniently
    ///
    /// Unparseable input yields the defaults. Otherwise each field falls
    /// back to its own default when missing or of the wrong type.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => {
                let defaults = Self::default();
                let field = |key: &str| map.get(key).unwrap_or(&Value::Null);

                Self {
                    wallpaper_url: field("wallpaperUrl").as_str().map(str::to_string),
                    use_24_hour_clock: truthy(field("use24HourClock")),
                    theme: field("theme").as_str().map(Theme::from_id).unwrap_or_default(),
                    pinned_ids: string_array(field("pinnedIds")).unwrap_or(defaults.pinned_ids),
                    recent_ids: string_array(field("recentIds"))
                        .map(|ids| RecentApps::from_ids(ids).ids().to_vec())
                        .unwrap_or_default(),
                    accent_color: field("accentColor")
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or(defaults.accent_color),
                }
            }
            _ => Self::default(),
        }
    }

    /// Serialize for storage
    pub fn to_json(&self) -> crate::DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pin `id` if absent, unpin it if present
    pub fn toggle_pinned(&mut self, id: &str) {
        if let Some(index) = self.pinned_ids.iter().position(|p| p == id) {
            self.pinned_ids.remove(index);
        } else {
            self.pinned_ids.push(id.to_string());
        }
    }

    /// Move `id` to the front of the recent list
    pub fn add_recent(&mut self, id: &str) {
        let mut recent = RecentApps::from_ids(std::mem::take(&mut self.recent_ids));
        recent.push_front(id);
        self.recent_ids = recent.ids().to_vec();
    }
}

/// JavaScript-style truthiness for stored flags
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    })
}
