use kiosk_slideshow::config::settings::PersistedSettings;
use kiosk_slideshow::config::store::{FileSettingsStore, SettingsStore, StorageError};
use kiosk_slideshow::playlist::{SettingsForm, ValidationError};

type Calls = Vec<(Vec<String>, u64)>;

#[test]
fn test_applied_settings_survive_remount() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileSettingsStore::in_dir(dir.path());

    // 1. First session: type two URLs and an interval, then apply
    let mut form = SettingsForm::mount(store.clone());
    form.edit_url(0, "example.com");
    form.edit_url(1, "http://intranet.local/dashboard");
    form.edit_interval("15");

    let mut calls: Calls = Vec::new();
    let applied = form
        .apply(&mut |urls: Vec<String>, ms: u64| calls.push((urls, ms)))
        .expect("Apply should succeed");
    assert!(applied.save_error.is_none());
    assert_eq!(
        calls,
        vec![(
            vec![
                "https://example.com".to_string(),
                "http://intranet.local/dashboard".to_string(),
            ],
            15_000,
        )]
    );

    // 2. The file holds the raw entries, placeholder included
    let raw = std::fs::read_to_string(store.path()).expect("Settings file missing");
    assert_eq!(
        raw,
        r#"{"urls":["example.com","http://intranet.local/dashboard",""],"timeBetween":15.0}"#
    );

    // 3. Next session starts from the same state
    let remounted = SettingsForm::mount(FileSettingsStore::in_dir(dir.path()));
    assert_eq!(remounted.entries(), form.entries());
    assert_eq!(remounted.interval().seconds(), 15.0);
}

#[test]
fn test_rejected_apply_leaves_file_untouched() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut store = FileSettingsStore::in_dir(dir.path());
    let original = PersistedSettings::new(vec!["keep.me".into(), "".into()], 3.0);
    store.save(&original).expect("Seeding settings failed");

    let mut form = SettingsForm::mount(store.clone());
    form.edit_url(1, "localhost");

    let err = form
        .apply(&mut |_: Vec<String>, _: u64| {
            panic!("loop must not start");
        })
        .unwrap_err();
    assert_eq!(err, ValidationError::InvalidUrl { url: "https://localhost".into() });

    assert_eq!(store.load().expect("Reading settings failed"), Some(original));
}

#[test]
fn test_missing_directory_reports_save_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileSettingsStore::in_dir(dir.path().join("does-not-exist"));

    let mut form = SettingsForm::mount(store);
    form.edit_url(0, "example.com");
    form.edit_interval("1");

    let mut started = false;
    let applied = form
        .apply(&mut |_: Vec<String>, _: u64| started = true)
        .expect("Validation should pass");

    // Loop runs even though persisting failed
    assert!(started);
    assert!(applied.save_error.is_some());
}

#[test]
fn test_corrupt_settings_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileSettingsStore::in_dir(dir.path());
    std::fs::write(store.path(), "{\"urls\": [\"a.com\"").expect("Writing garbage failed");

    let mut form = SettingsForm::mount(store);

    assert_eq!(form.entries(), &[String::new()]);
    assert!(!form.interval().is_set());
    assert!(matches!(form.take_load_error(), Some(StorageError::Format(_))));
}
