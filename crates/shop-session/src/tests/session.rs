use crate::UserSession;

use serde_json::json;
use shop_client::UserProfile;

#[test]
fn given_session_when_serialize_then_profile_and_tokens_are_flat() {
    let session = UserSession {
        profile: UserProfile {
            username: Some("alice".into()),
            extra: json!({"first_name": "Alice"}).as_object().cloned().unwrap(),
            ..Default::default()
        },
        access: Some("A1".into()),
        refresh: Some("R1".into()),
    };

    let value = serde_json::to_value(&session).unwrap();

    assert_eq!(
        value,
        json!({
            "username": "alice",
            "first_name": "Alice",
            "access": "A1",
            "refresh": "R1"
        })
    );
}

#[test]
fn given_flat_json_when_deserialize_then_tokens_not_in_extra() {
    let session: UserSession = serde_json::from_value(json!({
        "username": "alice",
        "cart_count": 2,
        "access": "A1",
        "refresh": "R1"
    }))
    .unwrap();

    assert_eq!(session.username(), Some("alice"));
    assert_eq!(session.access.as_deref(), Some("A1"));
    assert_eq!(session.profile.extra.get("cart_count"), Some(&json!(2)));
    assert!(!session.profile.extra.contains_key("access"));
}

#[test]
fn given_empty_object_when_deserialize_then_empty_session() {
    let session: UserSession = serde_json::from_str("{}").unwrap();

    assert!(session.is_empty());
    assert!(!session.is_authenticated());
}

#[test]
fn given_access_token_when_is_authenticated_then_true() {
    let session = UserSession {
        access: Some("A1".into()),
        ..Default::default()
    };

    assert!(session.is_authenticated());
    assert!(!session.is_empty());
}
