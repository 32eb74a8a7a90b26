//! End-to-end behaviour of the theme service over the in-memory adapters.

use darkmode_adapter_memory::{InMemoryClassList, InMemoryPreferenceStore, ManualLifecycle};
use darkmode_app::services::theme_service::ThemeService;
use darkmode_domain::settings::ThemeSettings;
use darkmode_domain::theme::ThemeState;

const KEY: &str = "darkMode";
const CLASS: &str = "dark-mode";

fn service(
    store: &InMemoryPreferenceStore,
    root: &InMemoryClassList,
) -> ThemeService<InMemoryPreferenceStore, InMemoryClassList> {
    ThemeService::new(ThemeSettings::default(), store.clone(), root.clone())
}

#[test]
fn should_enable_from_blank_page() {
    let store = InMemoryPreferenceStore::new();
    let root = InMemoryClassList::new(CLASS);

    service(&store, &root).toggle().unwrap();

    assert!(root.has_marker());
    assert_eq!(store.get(KEY).as_deref(), Some("enabled"));
}

#[test]
fn should_disable_when_enabled() {
    let store = InMemoryPreferenceStore::new().with_value(KEY, "enabled");
    let root = InMemoryClassList::new(CLASS).with_class(CLASS);

    service(&store, &root).toggle().unwrap();

    assert!(!root.has_marker());
    assert_eq!(store.get(KEY).as_deref(), Some("disabled"));
}

#[test]
fn should_alternate_stored_value_on_each_toggle() {
    let store = InMemoryPreferenceStore::new();
    let root = InMemoryClassList::new(CLASS);
    let svc = service(&store, &root);

    for expected in [ThemeState::Enabled, ThemeState::Disabled, ThemeState::Enabled] {
        assert_eq!(svc.toggle().unwrap(), expected);
        assert_eq!(root.has_marker(), expected.is_enabled());
        assert_eq!(store.get(KEY).as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn should_restore_enabled_preference_on_load() {
    let store = InMemoryPreferenceStore::new().with_value(KEY, "enabled");
    let root = InMemoryClassList::new(CLASS);
    let lifecycle = ManualLifecycle::new();

    service(&store, &root).install(&lifecycle).unwrap();
    lifecycle.fire();

    assert!(root.has_marker());
}

#[test]
fn should_keep_marker_absent_when_disabled_on_load() {
    let store = InMemoryPreferenceStore::new().with_value(KEY, "disabled");
    let root = InMemoryClassList::new(CLASS);
    let lifecycle = ManualLifecycle::new();

    service(&store, &root).install(&lifecycle).unwrap();
    lifecycle.fire();

    assert!(!root.has_marker());
    assert_eq!(store.get(KEY).as_deref(), Some("disabled"));
}

#[test]
fn should_keep_marker_absent_when_nothing_stored_on_load() {
    let store = InMemoryPreferenceStore::new();
    let root = InMemoryClassList::new(CLASS);
    let lifecycle = ManualLifecycle::new();

    service(&store, &root).install(&lifecycle).unwrap();
    lifecycle.fire();

    assert!(!root.has_marker());
    assert_eq!(store.get(KEY), None);
}

#[test]
fn should_restore_immediately_when_installed_after_load() {
    let store = InMemoryPreferenceStore::new().with_value(KEY, "enabled");
    let root = InMemoryClassList::new(CLASS);

    service(&store, &root)
        .install(&ManualLifecycle::loaded())
        .unwrap();

    assert!(root.has_marker());
}

#[test]
fn should_survive_reload() {
    let store = InMemoryPreferenceStore::new();
    let first_page = InMemoryClassList::new(CLASS);
    service(&store, &first_page).toggle().unwrap();

    let second_page = InMemoryClassList::new(CLASS);
    let lifecycle = ManualLifecycle::new();
    service(&store, &second_page).install(&lifecycle).unwrap();
    lifecycle.fire();

    assert!(second_page.has_marker());
}

#[test]
fn should_use_custom_marker_class() {
    let settings = ThemeSettings::builder()
        .marker_class("theme-dark")
        .build()
        .unwrap();
    let store = InMemoryPreferenceStore::new();
    let root = InMemoryClassList::new(settings.marker_class.clone());
    let svc = ThemeService::new(settings, store, root.clone());

    svc.toggle().unwrap();

    assert!(root.contains("theme-dark"));
    assert!(!root.contains(CLASS));
}
