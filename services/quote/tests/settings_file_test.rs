use booking_core::{PortError, RoomSettingsSource};
use quote_lib::adapters::FileSettingsAdapter;

// ========================================================================
// Test setup
// ========================================================================

fn fixtures() -> FileSettingsAdapter {
    FileSettingsAdapter::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rooms"))
}

// ========================================================================
// Loading
// ========================================================================

#[tokio::test]
async fn loads_a_room_by_id() {
    let settings = fixtures().load_room_settings("lake-house").await.unwrap();

    assert_eq!(settings.room_name(), "Lake House");
    assert_eq!(settings.weekend_days, vec![6, 0]);
    assert_eq!(settings.disabled_dates.len(), 2);
    assert_eq!(settings.discount_dates.len(), 2);
    assert_eq!(settings.vat_percent, Some(24.0));
}

#[tokio::test]
async fn empty_settings_file_loads_with_defaults() {
    let settings = fixtures().load_room_settings("sparse").await.unwrap();

    assert!(settings.weekend_days.is_empty());
    assert!(!settings.full_weekend_only);
    assert_eq!(settings.weekend_date_price, None);
}

#[tokio::test]
async fn unknown_room_is_not_found() {
    let result = fixtures().load_room_settings("penthouse").await;
    assert!(matches!(result, Err(PortError::NotFound(id)) if id == "penthouse"));
}

#[tokio::test]
async fn room_ids_cannot_escape_the_settings_directory() {
    for room_id in ["", "../rooms/lake-house", "nested/lake-house", "..\\lake-house"] {
        let result = fixtures().load_room_settings(room_id).await;
        assert!(matches!(result, Err(PortError::NotFound(_))), "{room_id:?} was accepted");
    }
}

#[tokio::test]
async fn invalid_json_is_malformed() {
    let result = fixtures().load_room_settings("broken").await;
    assert!(matches!(result, Err(PortError::Malformed(_))));
}

#[tokio::test]
async fn loads_several_rooms_at_once() {
    let rooms = fixtures()
        .load_many(&["lake-house", "weekend-cabin"])
        .await
        .unwrap();

    let names: Vec<&str> = rooms.iter().map(|room| room.room_name()).collect();
    assert_eq!(names, vec!["Lake House", "Weekend Cabin"]);

    let result = fixtures().load_many(&["lake-house", "penthouse"]).await;
    assert!(matches!(result, Err(PortError::NotFound(_))));
}
