use crate::{Notifier, QUESTION_FAILED_MESSAGE, notify_on_failure, questions_or_empty};

use std::sync::Mutex;

use serde_json::{Value, json};
use shop_client::{ClientError, ClientResult};

#[derive(Default)]
struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, _message: &str) {}
}

fn failed() -> ClientResult<Value> {
    Err(ClientError::api(500, "Internal Server Error"))
}

// =============================================================================
// questions_or_empty
// =============================================================================

#[test]
fn given_failure_when_questions_or_empty_then_empty_list() {
    assert!(questions_or_empty(failed()).is_empty());
}

#[test]
fn given_data_array_when_questions_or_empty_then_items() {
    let body = json!({"data": [{"id": 1}, {"id": 2}]});

    let questions = questions_or_empty(Ok(body));

    assert_eq!(questions, vec![json!({"id": 1}), json!({"id": 2})]);
}

#[test]
fn given_bare_array_when_questions_or_empty_then_items() {
    let questions = questions_or_empty(Ok(json!([{"id": 3}])));

    assert_eq!(questions, vec![json!({"id": 3})]);
}

#[test]
fn given_unexpected_shape_when_questions_or_empty_then_empty_list() {
    assert!(questions_or_empty(Ok(json!({"data": "nope"}))).is_empty());
    assert!(questions_or_empty(Ok(Value::Null)).is_empty());
}

// =============================================================================
// notify_on_failure
// =============================================================================

#[test]
fn given_failure_when_notify_on_failure_then_notifies_and_propagates() {
    let notifier = RecordingNotifier::default();

    let result = notify_on_failure(failed(), &notifier, QUESTION_FAILED_MESSAGE);

    assert_eq!(result.unwrap_err().status(), Some(500));
    assert_eq!(
        *notifier.errors.lock().unwrap(),
        vec![QUESTION_FAILED_MESSAGE.to_string()]
    );
}

#[test]
fn given_success_when_notify_on_failure_then_silent_and_unchanged() {
    let notifier = RecordingNotifier::default();

    let result = notify_on_failure(Ok(json!({"id": 11})), &notifier, QUESTION_FAILED_MESSAGE);

    assert_eq!(result.unwrap(), json!({"id": 11}));
    assert!(notifier.errors.lock().unwrap().is_empty());
}
