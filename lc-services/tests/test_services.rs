//! Integration tests for service coordination.
//!
//! Tests EventBus publish/subscribe, ThemeService selection persistence,
//! SettingsService accessors, capture provider imports, and
//! ServiceRegistry initialization.

mod common;

use lc_core::constants::THEME_KEY;
use lc_core::error::LcError;
use lc_models::models::theme::{PRESET_MINT_CHOCOLATE, PRESET_PINK_LOVE};
use lc_services::capture::{CaptureProvider, FileImport};
use lc_services::event_bus::AppEvent;
use lc_services::registry::ServiceRegistry;
use lc_services::settings::SettingsService;
use lc_services::theme::ThemeService;

use common::{
    create_journal_service, create_test_config_handle, create_test_event_bus, create_test_store,
    date,
};

// ---- EventBus publish/subscribe ----

#[tokio::test]
async fn event_bus_single_subscriber_receives_event() {
    let bus = create_test_event_bus();
    let mut rx = bus.subscribe();

    bus.emit(AppEvent::PhotoAdded {
        date: "2024-02-14".into(),
        entry_id: "entry-1".into(),
    });

    let event = rx.recv().await.unwrap();
    match event {
        AppEvent::PhotoAdded { date, .. } => assert_eq!(date, "2024-02-14"),
        _ => panic!("expected PhotoAdded event"),
    }
}

#[tokio::test]
async fn event_bus_multiple_subscribers_all_receive() {
    let bus = create_test_event_bus();
    let mut rx1 = bus.subscribe();
    let mut rx2 = bus.subscribe();
    let mut rx3 = bus.subscribe();

    assert_eq!(bus.subscriber_count(), 3);

    bus.emit(AppEvent::ThemeChanged {
        theme_key: "roseGold".into(),
    });

    for rx in [&mut rx1, &mut rx2, &mut rx3] {
        let event = rx.recv().await.unwrap();
        match event {
            AppEvent::ThemeChanged { theme_key } => assert_eq!(theme_key, "roseGold"),
            _ => panic!("all subscribers should receive the same event"),
        }
    }
}

#[tokio::test]
async fn journal_mutations_flow_through_bus() {
    let store = create_test_store();
    let bus = create_test_event_bus();
    let mut rx = bus.subscribe();
    let svc = lc_services::journal::JournalService::new(store, bus);

    let entry = svc.add_photo(date("2024-02-14"), "uri1").await.unwrap();
    svc.update_note_and_emoji(date("2024-02-14"), &entry.id, "n", "")
        .await
        .unwrap();
    svc.delete_photo(date("2024-02-14"), &entry.id).await.unwrap();

    assert!(matches!(rx.recv().await.unwrap(), AppEvent::PhotoAdded { .. }));
    assert!(matches!(rx.recv().await.unwrap(), AppEvent::PhotoAnnotated { .. }));
    assert!(matches!(rx.recv().await.unwrap(), AppEvent::PhotoDeleted { .. }));
}

// ---- ThemeService ----

#[tokio::test]
async fn theme_selection_survives_restart() {
    let store = create_test_store();

    {
        let svc = ThemeService::new(store.clone(), create_test_event_bus());
        svc.set_selected_theme(PRESET_MINT_CHOCOLATE).await.unwrap();
    }

    // Fresh service over the same store: selection persists
    let svc = ThemeService::new(store.clone(), create_test_event_bus());
    assert_eq!(svc.selected_theme().await.key, PRESET_MINT_CHOCOLATE);

    // The persisted record is the bare key
    assert_eq!(
        store.get(THEME_KEY).await.unwrap().as_deref(),
        Some(PRESET_MINT_CHOCOLATE)
    );
}

#[tokio::test]
async fn theme_defaults_and_rejects_unknown() {
    let svc = ThemeService::new(create_test_store(), create_test_event_bus());
    assert_eq!(svc.selected_theme().await.key, PRESET_PINK_LOVE);

    let result = svc.set_selected_theme("doesNotExist").await;
    assert!(matches!(result, Err(LcError::ThemeNotFound(_))));
}

#[tokio::test]
async fn theme_list_is_ordered() {
    let svc = ThemeService::new(create_test_store(), create_test_event_bus());
    let names: Vec<String> = svc.list_themes().into_iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec![
            "Pink Love",
            "Rose Gold",
            "Lavender Dreams",
            "Peach Blush",
            "Mint Chocolate"
        ]
    );
}

// ---- SettingsService ----

#[tokio::test]
async fn settings_accessors_roundtrip() {
    let svc = SettingsService::new(create_test_config_handle());

    svc.set_log_level("trace".into()).await;
    svc.set_data_dir("/tmp/lovecal-test".into()).await;
    svc.set_preview_count(2).await;

    assert_eq!(svc.log_level().await, "trace");
    assert_eq!(svc.data_dir().await, "/tmp/lovecal-test");
    assert_eq!(svc.preview_count().await, 2);

    let json = svc.export_as_json().await;
    assert_eq!(json["logging"]["level"], "trace");
}

// ---- Capture provider ----

#[tokio::test]
async fn file_import_feeds_the_journal() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sunset.jpg");
    std::fs::write(&path, b"jpeg").unwrap();

    let provider = FileImport::new(&path);
    let uri = provider
        .capture()
        .await
        .unwrap()
        .expect("import is never cancelled");

    let svc = create_journal_service(create_test_store());
    let entry = svc.add_photo(date("2024-07-04"), &uri).await.unwrap();
    assert!(entry.uri.starts_with("file://"));
    assert!(entry.uri.ends_with("sunset.jpg"));
}

#[tokio::test]
async fn file_import_missing_file_errors() {
    let provider = FileImport::new("/definitely/not/here.png");
    assert!(matches!(
        provider.pick_from_gallery().await,
        Err(LcError::Capture(_))
    ));
}

// ---- ServiceRegistry ----

#[tokio::test]
async fn registry_registers_and_initializes_all() {
    let mut registry = ServiceRegistry::new(create_test_config_handle(), create_test_store());
    registry.register_all();
    assert_eq!(registry.service_count(), 3);

    registry.init_all().await.unwrap();
    let health = registry.health_check().await;
    assert_eq!(health.len(), 3);
    for (name, state, healthy) in &health {
        assert!(healthy, "service {name} is not healthy (state: {state})");
    }

    registry.shutdown_all().await.unwrap();
}

#[tokio::test]
async fn registry_shares_one_event_bus() {
    let mut registry = ServiceRegistry::new(create_test_config_handle(), create_test_store());
    registry.register_all();
    registry.init_all().await.unwrap();

    let mut rx = registry.event_bus().subscribe();

    // A theme service built over the registry's infrastructure publishes
    // to the same bus the registry hands out.
    let theme = ThemeService::new(registry.store.clone(), registry.event_bus.clone());
    theme.set_selected_theme(PRESET_MINT_CHOCOLATE).await.unwrap();

    assert!(matches!(
        rx.recv().await.unwrap(),
        AppEvent::ThemeChanged { .. }
    ));
}
