use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8080/api/", None);
    assert_eq!(client.base_url, "http://localhost:8080/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8080/api", None);
    assert_eq!(client.base_url, "http://localhost:8080/api");
}

#[test]
fn test_base_url_surrounding_whitespace_trimmed() {
    let client = Client::new("  http://localhost:8080/api/ \n", None);
    assert_eq!(client.base_url, "http://localhost:8080/api");
}

#[test]
fn test_access_token_stored() {
    let client = Client::new("http://localhost:8080", Some("A1"));
    assert_eq!(client.access_token, Some("A1".to_string()));
}

#[test]
fn test_set_access_token_replaces_and_clears() {
    let mut client = Client::new("http://localhost:8080", Some("A1"));

    client.set_access_token(Some("A2"));
    assert_eq!(client.access_token.as_deref(), Some("A2"));

    client.set_access_token(None);
    assert!(client.access_token.is_none());
}
