use crate::ClientError;

#[test]
fn test_api_error_exposes_status() {
    let err = ClientError::api(404, "Not found");
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_unauthorized());
}

#[test]
fn test_unauthorized_statuses() {
    assert!(ClientError::api(401, "expired").is_unauthorized());
    assert!(ClientError::api(403, "forbidden").is_unauthorized());
}

#[test]
fn test_json_error_has_no_status() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: ClientError = json_err.into();

    assert!(matches!(err, ClientError::Json { .. }));
    assert_eq!(err.status(), None);
}

#[test]
fn test_api_error_display_contains_message_and_status() {
    let err = ClientError::api(400, "Username taken");
    let text = err.to_string();

    assert!(text.contains("Username taken"));
    assert!(text.contains("400"));
}
