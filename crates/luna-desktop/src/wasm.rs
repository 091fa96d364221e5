//! WASM bindings for the browser host
//!
//! The page owns one [`DesktopHandle`]. Rendering code reads JSON state
//! from it and forwards DOM events as verb calls; string ids select
//! regions (`"titlebar"`, `"resize"`, ...) and launch sources (`"icon"`,
//! `"start-menu"`, `"taskbar"`).

use serde::Serialize;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::boot::BootSequence;
use crate::engine::{DesktopEngine, EngineConfig};
use crate::error::DesktopError;
use crate::launch::ActivationSource;
use crate::math::{Size, Vec2};
use crate::observer::SubscriptionId;
use crate::settings::{LocalStorage, MemoryStorage, PreferenceStore, StorageBackend, Theme};
use crate::shell::{format_clock, AppEntry, TaskbarEvent};
use crate::window::WindowRegion;

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn open_storage() -> Box<dyn StorageBackend> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            warn!(%err, "local storage unavailable, preferences will not persist");
            Box::new(MemoryStorage::new())
        }
    }
}

/// Start menu contents for rendering
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartMenuView {
    open: bool,
    items: Vec<&'static AppEntry>,
    recent: Vec<&'static AppEntry>,
    pinned: Vec<&'static AppEntry>,
}

/// Desktop state owned by the page
#[wasm_bindgen]
pub struct DesktopHandle {
    engine: DesktopEngine<PreferenceStore>,
    boot: BootSequence,
    listener: Option<SubscriptionId>,
}

#[wasm_bindgen]
impl DesktopHandle {
    /// Create a desktop with default geometry, booting from now
    #[wasm_bindgen(constructor)]
    pub fn new() -> DesktopHandle {
        Self::build(EngineConfig::default())
    }

    /// Create a desktop from a JSON `EngineConfig`
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<DesktopHandle, JsValue> {
        let config = EngineConfig::from_json(config_json).map_err(to_js)?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> DesktopHandle {
        let prefs = PreferenceStore::load(open_storage());
        DesktopHandle {
            engine: DesktopEngine::with_tracker(config, prefs),
            boot: BootSequence::new(js_sys::Date::now()),
            listener: None,
        }
    }

    // =========================================================================
    // Boot
    // =========================================================================

    /// Loading screen state as JSON
    #[wasm_bindgen]
    pub fn boot_state(&self) -> Result<String, JsValue> {
        let state = self.boot.state(js_sys::Date::now());
        serde_json::to_string(&state).map_err(|e| to_js(e.into()))
    }

    /// Check if the loading screen is finished
    #[wasm_bindgen]
    pub fn is_booted(&self) -> bool {
        self.boot.is_done(js_sys::Date::now())
    }

    // =========================================================================
    // Window verbs
    // =========================================================================

    #[wasm_bindgen]
    pub fn open(&mut self, id: &str) -> bool {
        self.engine.open(id)
    }

    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) -> bool {
        self.engine.close(id)
    }

    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) -> bool {
        self.engine.minimize(id)
    }

    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: &str) -> bool {
        self.engine.toggle_maximize(id).is_some()
    }

    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) -> bool {
        self.engine.focus(id)
    }

    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> bool {
        self.engine.move_window(id, Vec2::new(x, y))
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, id: &str, width: f32, height: f32) -> bool {
        self.engine.resize(id, Size::new(width, height))
    }

    #[wasm_bindgen]
    pub fn show_desktop(&mut self) {
        self.engine.show_desktop();
    }

    // =========================================================================
    // Launchers
    // =========================================================================

    /// Activate from a launcher; returns the outcome id or `undefined`
    #[wasm_bindgen]
    pub fn activate(&mut self, id: &str, source: &str) -> Result<Option<String>, JsValue> {
        let source = ActivationSource::from_id(source)
            .ok_or_else(|| JsValue::from_str(&format!("unknown activation source: {}", source)))?;
        Ok(self.engine.activate(id, source).map(|a| a.id().to_string()))
    }

    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: &str) -> Option<String> {
        self.engine
            .handle_taskbar(TaskbarEvent::Click(id.to_string()))
            .map(|a| a.id().to_string())
    }

    #[wasm_bindgen]
    pub fn taskbar_secondary_click(&mut self, id: &str) -> Option<String> {
        self.engine
            .handle_taskbar(TaskbarEvent::SecondaryClick(id.to_string()))
            .map(|a| a.id().to_string())
    }

    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) -> bool {
        self.engine.toggle_start_menu()
    }

    #[wasm_bindgen]
    pub fn close_start_menu(&mut self) {
        self.engine.close_start_menu();
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer down on a window region; returns true if handled
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: &str, region: &str, x: f32, y: f32) -> bool {
        let Some(region) = WindowRegion::from_id(region) else {
            return false;
        };
        self.engine
            .handle_pointer_down(id, region, Vec2::new(x, y))
            .is_handled()
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(Vec2::new(x, y)).is_handled()
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.handle_pointer_up().is_handled()
    }

    // =========================================================================
    // State for rendering
    // =========================================================================

    /// Ordered windows and focus as JSON
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.engine.view().to_json().map_err(to_js)
    }

    /// Taskbar buttons as JSON
    #[wasm_bindgen]
    pub fn taskbar(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.taskbar_buttons()).map_err(|e| to_js(e.into()))
    }

    /// Start menu contents as JSON
    #[wasm_bindgen]
    pub fn start_menu(&self) -> Result<String, JsValue> {
        let menu = self.engine.start_menu();
        let prefs = self.engine.tracker().preferences();
        let view = StartMenuView {
            open: menu.is_open(),
            items: menu.items(),
            recent: menu.recent(self.engine.recent()),
            pinned: menu.pinned(&prefs.pinned_ids),
        };
        serde_json::to_string(&view).map_err(|e| to_js(e.into()))
    }

    /// Desktop icons as JSON
    #[wasm_bindgen]
    pub fn desktop_icons(&self) -> Result<String, JsValue> {
        let icons: Vec<_> = self.engine.start_menu().catalog().desktop_icons().collect();
        serde_json::to_string(&icons).map_err(|e| to_js(e.into()))
    }

    /// Gesture phase id: "idle", "dragging" or "resizing"
    #[wasm_bindgen]
    pub fn interaction_phase(&self) -> String {
        format!("{:?}", self.engine.input().phase()).to_lowercase()
    }

    /// Call `callback(snapshotJson)` after every change
    ///
    /// Replaces any previously registered callback. The callback runs while
    /// the handle is borrowed, so it must not call back into the handle;
    /// schedule follow-up work (e.g. `queueMicrotask`) instead. Exceptions
    /// it throws are logged and dropped.
    #[wasm_bindgen]
    pub fn on_change(&mut self, callback: js_sys::Function) {
        if let Some(previous) = self.listener.take() {
            self.engine.unsubscribe(previous);
        }
        let id = self.engine.subscribe(move |view| {
            view.send_json(|json| callback.call1(&JsValue::NULL, &JsValue::from_str(json)).map(drop));
        });
        self.listener = Some(id);
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    /// Preferences as JSON
    #[wasm_bindgen]
    pub fn preferences(&self) -> Result<String, JsValue> {
        self.engine.tracker().preferences().to_json().map_err(to_js)
    }

    /// Tray clock text for the given local time
    #[wasm_bindgen]
    pub fn clock_text(&self, hour: u32, minute: u32) -> String {
        let use_24_hour = self.engine.tracker().preferences().use_24_hour_clock;
        format_clock(hour, minute, use_24_hour)
    }

    #[wasm_bindgen]
    pub fn set_wallpaper_url(&mut self, url: Option<String>) -> Result<(), JsValue> {
        self.engine.tracker_mut().set_wallpaper_url(url).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_use_24_hour_clock(&mut self, enabled: bool) -> Result<(), JsValue> {
        self.engine.tracker_mut().set_use_24_hour_clock(enabled).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme: &str) -> Result<(), JsValue> {
        self.engine.tracker_mut().set_theme(Theme::from_id(theme)).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn toggle_pinned(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.tracker_mut().toggle_pinned(id).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_accent_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.engine.tracker_mut().set_accent_color(color).map_err(to_js)
    }
}

impl Default for DesktopHandle {
    fn default() -> Self {
        Self::new()
    }
}
