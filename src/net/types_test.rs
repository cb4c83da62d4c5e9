use super::*;

#[test]
fn user_profile_reads_camel_case_fields() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "userName": "ana.k",
        "firstName": "Ana",
        "lastName": "Kovac",
        "avatarUrl": null,
        "unknownField": 42
    }))
    .unwrap();
    assert_eq!(profile.user_name.as_deref(), Some("ana.k"));
    assert_eq!(profile.first_name.as_deref(), Some("Ana"));
    assert!(profile.avatar_url.is_none());
}

#[test]
fn full_name_trims_missing_parts() {
    let only_first = UserProfile { first_name: Some("Ana".into()), ..UserProfile::default() };
    assert_eq!(only_first.full_name(), "Ana");

    let only_last = UserProfile { last_name: Some("Kovac".into()), ..UserProfile::default() };
    assert_eq!(only_last.full_name(), "Kovac");

    assert_eq!(UserProfile::default().full_name(), "");
}

#[test]
fn page_without_items_defaults_to_empty() {
    let page: Page<Notification> = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(page.items.is_empty());
    assert!(page.total_count.is_none());
}

#[test]
fn join_request_maps_status_field() {
    let req: JoinClubRequest = serde_json::from_value(serde_json::json!({
        "id": "r1",
        "clubId": "c1",
        "clubName": "Chess",
        "joinClubRequestStatus": "Pending",
        "createdAt": "2024-01-05T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(req.status, "Pending");
    assert_eq!(req.club_name, "Chess");
}

#[test]
fn notification_is_checked_defaults_false() {
    let n: Notification = serde_json::from_value(serde_json::json!({ "id": "n1" })).unwrap();
    assert!(!n.is_checked);
}
