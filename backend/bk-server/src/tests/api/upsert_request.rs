use crate::UpsertUserSettingsRequest;

use bk_core::UserSettings;

use uuid::Uuid;

#[test]
fn given_only_owner_when_deserialized_then_defaults_fill_the_rest() {
    let user_id = Uuid::new_v4();
    let req: UpsertUserSettingsRequest =
        serde_json::from_value(serde_json::json!({ "user_id": user_id })).unwrap();

    let settings = req.into_settings(user_id);

    assert_eq!(settings, UserSettings::default_for(user_id));
}

#[test]
fn given_store_managed_fields_when_deserialized_then_ignored() {
    let user_id = Uuid::new_v4();
    let req: UpsertUserSettingsRequest = serde_json::from_value(serde_json::json!({
        "id": Uuid::new_v4(),
        "user_id": user_id,
        "font_family": "Georgia",
        "created_at": "2020-01-01T00:00:00Z"
    }))
    .unwrap();

    let settings = req.into_settings(user_id);

    assert!(settings.id.is_none());
    assert!(settings.created_at.is_none());
    assert_eq!(settings.font_family, "Georgia");
}
