//! Window geometry defaults

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

/// Hard floor for every window frame; a configured `min_size` can only raise it
pub const MIN_WINDOW_SIZE: Size = Size::new(300.0, 200.0);

/// Geometry constants used when opening and resizing windows
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowConfig {
    /// Size of a freshly opened window
    pub default_size: Size,
    /// Smallest size any window may have, never below [`MIN_WINDOW_SIZE`]
    pub min_size: Size,
    /// Position of the first window opened on an empty desktop
    pub cascade_origin: Vec2,
    /// Diagonal offset added per already-open window
    pub cascade_step: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_size: Size::new(600.0, 400.0),
            min_size: MIN_WINDOW_SIZE,
            cascade_origin: Vec2::new(100.0, 50.0),
            cascade_step: 30.0,
        }
    }
}

impl WindowConfig {
    /// Initial position for a window opened while `open_count` windows exist
    pub fn cascade_position(&self, open_count: usize) -> Vec2 {
        let offset = self.cascade_step * open_count as f32;
        self.cascade_origin + Vec2::new(offset, offset)
    }

    /// Effective minimum size
    pub fn min_size(&self) -> Size {
        self.min_size.max(MIN_WINDOW_SIZE)
    }

    /// Initial size, never below the minimum
    pub fn initial_size(&self) -> Size {
        self.default_size.max(self.min_size())
    }

    /// Apply the minimum size floor
    pub fn clamp_size(&self, size: Size) -> Size {
        size.max(self.min_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_positions() {
        let config = WindowConfig::default();
        assert_eq!(config.cascade_position(0), Vec2::new(100.0, 50.0));
        assert_eq!(config.cascade_position(1), Vec2::new(130.0, 80.0));
        assert_eq!(config.cascade_position(3), Vec2::new(190.0, 140.0));
    }

    #[test]
    fn test_initial_size_respects_minimum() {
        let config = WindowConfig {
            default_size: Size::new(100.0, 500.0),
            ..Default::default()
        };
        assert_eq!(config.initial_size(), Size::new(300.0, 500.0));
        assert_eq!(WindowConfig::default().initial_size(), Size::new(600.0, 400.0));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: WindowConfig = serde_json::from_str(r#"{"cascadeStep": 10.0}"#).unwrap();
        assert_eq!(config.cascade_step, 10.0);
        assert_eq!(config.min_size, Size::new(300.0, 200.0));
    }

    #[test]
    fn test_configured_minimum_cannot_go_below_floor() {
        let config: WindowConfig =
            serde_json::from_str(r#"{"minSize": {"width": 50.0, "height": 400.0}}"#).unwrap();
        assert_eq!(config.min_size(), Size::new(300.0, 400.0));
        assert_eq!(config.clamp_size(Size::new(10.0, 10.0)), Size::new(300.0, 400.0));
        assert_eq!(config.clamp_size(Size::new(900.0, 700.0)), Size::new(900.0, 700.0));
    }
}
