//! Every content view can be reached from a launcher

use std::collections::BTreeSet;

use luna_desktop::{Activation, ActivationSource, DesktopEngine, Preferences};

fn launchable_ids(engine: &DesktopEngine) -> BTreeSet<&'static str> {
    let menu = engine.start_menu();
    let defaults = Preferences::default();
    menu.catalog()
        .desktop_icons()
        .chain(menu.items())
        .chain(menu.pinned(&defaults.pinned_ids))
        .map(|entry| entry.id)
        .collect()
}

#[test]
fn every_known_content_id_has_a_launcher() {
    let engine = DesktopEngine::new();
    let launchable = launchable_ids(&engine);

    let missing: Vec<_> = luna_apps::known_ids()
        .filter(|id| !launchable.contains(id))
        .collect();
    assert!(missing.is_empty(), "no launcher for {:?}", missing);
}

#[test]
fn start_menu_opens_interactive_apps() {
    let mut engine = DesktopEngine::new();

    for id in ["terminal", "settings", "dont-open"] {
        engine.toggle_start_menu();
        let result = engine.activate(id, ActivationSource::StartMenu);
        assert_eq!(result, Some(Activation::Opened));
        assert!(!engine.start_menu().is_open());
        assert_eq!(engine.windows().focused(), Some(id));
        assert!(!luna_apps::resolve(id).is_not_found());
    }
    assert_eq!(engine.recent(), ["dont-open", "settings", "terminal"]);
}
