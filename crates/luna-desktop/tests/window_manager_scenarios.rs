//! End-to-end window manager scenarios through the public engine surface

use luna_desktop::{Activation, ActivationSource, DesktopEngine, EngineConfig, Size, TaskbarEvent, MIN_WINDOW_SIZE};

fn order(engine: &DesktopEngine) -> Vec<String> {
    engine.snapshot().ids().into_iter().map(String::from).collect()
}

#[test]
fn reopening_focuses_instead_of_duplicating() {
    let mut engine = DesktopEngine::new();
    engine.open("a");
    engine.open("b");
    engine.open("a");

    assert_eq!(order(&engine), ["b", "a"]);
    assert_eq!(engine.windows().focused(), Some("a"));
}

#[test]
fn resize_below_minimum_is_floored() {
    let mut engine = DesktopEngine::new();
    engine.open("a");
    engine.resize("a", Size::new(50.0, 50.0));

    assert_eq!(engine.windows().get("a").unwrap().size, Size::new(300.0, 200.0));
}

#[test]
fn taskbar_click_restores_minimized_window() {
    let mut engine = DesktopEngine::new();
    engine.open("a");
    engine.open("b");
    engine.minimize("b");

    let result = engine.handle_taskbar(TaskbarEvent::Click("b".to_string()));
    assert_eq!(result, Some(Activation::Restored));

    let b = engine.windows().get("b").unwrap();
    assert!(!b.is_minimized);
    assert_eq!(order(&engine), ["a", "b"]);
    assert_eq!(engine.windows().focused(), Some("b"));
}

#[test]
fn taskbar_click_on_focused_window_minimizes_it() {
    let mut engine = DesktopEngine::new();
    engine.open("a");
    engine.focus("a");

    let result = engine.activate("a", ActivationSource::Taskbar);
    assert_eq!(result, Some(Activation::Minimized));
    assert!(engine.windows().get("a").unwrap().is_minimized);
    assert_eq!(engine.windows().focused(), None);
}

#[test]
fn icon_activation_never_minimizes() {
    let mut engine = DesktopEngine::new();
    engine.activate("about", ActivationSource::DesktopIcon);

    let again = engine.activate("about", ActivationSource::DesktopIcon);
    assert_eq!(again, Some(Activation::Focused));
    assert_eq!(engine.windows().focused(), Some("about"));
    assert!(!engine.windows().get("about").unwrap().is_minimized);
}

#[test]
fn cascade_positions_follow_window_count() {
    let mut engine = DesktopEngine::new();
    for id in ["a", "b", "c"] {
        engine.open(id);
    }

    let positions: Vec<(f32, f32)> = engine
        .windows()
        .windows()
        .iter()
        .map(|w| (w.position.x, w.position.y))
        .collect();
    assert_eq!(positions, [(100.0, 50.0), (130.0, 80.0), (160.0, 110.0)]);

    engine.close("b");
    engine.open("d");
    let d = engine.windows().get("d").unwrap();
    assert_eq!((d.position.x, d.position.y), (160.0, 110.0));
}

#[test]
fn show_desktop_then_restore_from_start_menu() {
    let mut engine = DesktopEngine::new();
    engine.open("a");
    engine.open("b");
    engine.show_desktop();
    engine.show_desktop();

    assert!(engine.windows().windows().iter().all(|w| w.is_minimized));
    assert_eq!(engine.windows().focused(), None);
    assert_eq!(order(&engine), ["a", "b"]);

    engine.toggle_start_menu();
    assert_eq!(engine.activate("a", ActivationSource::StartMenu), Some(Activation::Restored));
    assert_eq!(order(&engine), ["b", "a"]);
    assert!(!engine.start_menu().is_open());
}

#[test]
fn recent_list_is_capped_and_deduplicated() {
    let mut engine = DesktopEngine::new();
    for id in ["a", "b", "c", "d", "e", "f", "g"] {
        engine.open(id);
    }
    engine.close("c");
    engine.open("c");

    assert_eq!(engine.recent(), ["c", "g", "f", "e", "d", "b"]);
}

#[test]
fn snapshot_json_uses_camel_case_keys() {
    let mut engine = DesktopEngine::new();
    engine.open("about");
    engine.minimize("about");

    let json = engine.view().to_json().unwrap();
    assert!(json.contains("\"focusedId\":null"));
    assert!(json.contains("\"isMinimized\":true"));
    assert!(json.contains("\"isMaximized\":false"));
    assert!(json.contains("\"title\":\"About\""));
}

#[test]
fn configured_minimum_never_undercuts_floor() {
    let config = EngineConfig::from_json(r#"{"window": {"minSize": {"width": 10.0, "height": 10.0}}}"#).unwrap();
    let mut engine = DesktopEngine::with_config(config);
    engine.open("a");
    engine.resize("a", Size::new(20.0, 20.0));

    assert_eq!(engine.windows().get("a").unwrap().size, MIN_WINDOW_SIZE);
}
