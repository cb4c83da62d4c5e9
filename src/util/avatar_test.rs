use super::*;

fn profile(first: Option<&str>, last: Option<&str>, avatar: Option<&str>) -> UserProfile {
    UserProfile {
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
        avatar_url: avatar.map(str::to_owned),
        ..UserProfile::default()
    }
}

#[test]
fn explicit_avatar_wins() {
    let user = profile(Some("Ana"), None, Some("https://cdn.example.test/ana.png"));
    assert_eq!(session_avatar_url(Some(&user)), "https://cdn.example.test/ana.png");
}

#[test]
fn first_name_only_encodes_ana() {
    let user = profile(Some("Ana"), None, None);
    assert_eq!(
        session_avatar_url(Some(&user)),
        "https://ui-avatars.com/api/?name=Ana&background=0D8ABC&color=fff"
    );
}

#[test]
fn full_name_is_percent_encoded() {
    let user = profile(Some("Ana"), Some("Kovač"), None);
    assert_eq!(
        session_avatar_url(Some(&user)),
        "https://ui-avatars.com/api/?name=Ana%20Kova%C4%8D&background=0D8ABC&color=fff"
    );
}

#[test]
fn empty_names_fall_back_to_placeholder() {
    let user = profile(Some(""), Some("  "), None);
    assert!(session_avatar_url(Some(&user)).contains("name=User&"));
    assert!(session_avatar_url(None).contains("name=User&"));
}

#[test]
fn empty_avatar_reference_is_ignored() {
    let user = profile(Some("Ana"), None, Some(""));
    assert!(session_avatar_url(Some(&user)).contains("name=Ana&"));
}

#[test]
fn derivation_is_deterministic() {
    let user = profile(Some("Ana"), None, None);
    assert_eq!(session_avatar_url(Some(&user)), session_avatar_url(Some(&user)));
}

#[test]
fn list_avatar_uses_unnamed_and_size() {
    assert_eq!(
        avatar_for_name(None),
        "https://ui-avatars.com/api/?name=Unnamed&background=0D8ABC&color=fff&size=128"
    );
    assert!(avatar_for_name(Some("")).contains("name=Unnamed&"));
    assert!(avatar_for_name(Some("Chess Club")).contains("name=Chess%20Club&"));
}
