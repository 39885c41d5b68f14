use crate::{ColorTarget, FontFamily, UserSettings};

use uuid::Uuid;

#[test]
fn test_default_record_matches_documented_defaults() {
    let settings = UserSettings::default();

    assert_eq!(settings.id, None);
    assert_eq!(settings.user_id, None);
    assert_eq!(settings.logo_url(), "");
    assert_eq!(settings.primary_color, "#3498db");
    assert_eq!(settings.secondary_color, "#2ecc71");
    assert_eq!(settings.font_family, "Arial");
    assert!(!settings.is_persisted());
}

#[test]
fn test_default_for_stamps_owner_only() {
    let owner = Uuid::new_v4();
    let settings = UserSettings::default_for(owner);

    assert_eq!(settings.user_id, Some(owner));
    assert!(settings.same_preferences(&UserSettings::default()));
}

#[test]
fn test_set_color_touches_only_target_field() {
    let mut settings = UserSettings::default();

    settings.set_color(ColorTarget::Secondary, "#000000");

    assert_eq!(settings.color(ColorTarget::Primary), "#3498db");
    assert_eq!(settings.color(ColorTarget::Secondary), "#000000");
}

#[test]
fn test_same_preferences_treats_empty_logo_as_absent() {
    let a = UserSettings::default();
    let b = UserSettings {
        logo_url: Some(String::new()),
        id: Some(Uuid::new_v4()),
        ..UserSettings::default()
    };

    assert!(a.same_preferences(&b));
}

#[test]
fn test_font_returns_none_for_unknown_name() {
    let settings = UserSettings {
        font_family: "Wingdings".to_string(),
        ..UserSettings::default()
    };
    assert_eq!(settings.font(), None);
    assert_eq!(UserSettings::default().font(), Some(FontFamily::Arial));
}

#[test]
fn test_serialization_omits_backend_managed_fields_when_absent() {
    let owner = Uuid::new_v4();
    let json = serde_json::to_value(UserSettings::default_for(owner)).unwrap();

    assert!(json.get("id").is_none());
    assert!(json.get("created_at").is_none());
    assert_eq!(json["user_id"], owner.to_string());
    assert_eq!(json["logo_url"], serde_json::Value::Null);
}

#[test]
fn test_deserializes_row_without_optional_fields() {
    let settings: UserSettings = serde_json::from_str(
        r##"{"primary_color":"#111111","secondary_color":"#222222","font_family":"Impact"}"##,
    )
    .unwrap();

    assert_eq!(settings.user_id, None);
    assert_eq!(settings.logo_url, None);
    assert_eq!(settings.font(), Some(FontFamily::Impact));
}
