use super::*;

#[test]
fn created_club_path_uses_string_or_numeric_id() {
    assert_eq!(created_club_path(&serde_json::json!({ "id": "c7" })), "/app/club/c7");
    assert_eq!(created_club_path(&serde_json::json!({ "id": 42 })), "/app/club/42");
}

#[test]
fn created_club_path_falls_back_to_list() {
    assert_eq!(created_club_path(&serde_json::json!({})), "/app/clubs");
    assert_eq!(created_club_path(&serde_json::json!({ "id": "" })), "/app/clubs");
    assert_eq!(created_club_path(&serde_json::Value::Null), "/app/clubs");
}

#[test]
fn create_club_payload_requires_name() {
    assert_eq!(create_club_payload("   ", "x"), Err("Give the club a name."));
}

#[test]
fn create_club_payload_trims_fields() {
    assert_eq!(
        create_club_payload(" Chess ", " Weekly games "),
        Ok(serde_json::json!({ "name": "Chess", "description": "Weekly games" }))
    );
}
