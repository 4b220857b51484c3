//! How failed API calls are presented.
//!
//! The client always propagates errors. The choices below (tell the user,
//! or fall back to an empty list) are made here, at the edge.

use shop_client::ClientResult;

use log::{error, warn};
use serde_json::Value;

pub const QUESTION_FAILED_MESSAGE: &str = "Failed to submit question. Please try again later.";
pub const ANSWER_FAILED_MESSAGE: &str = "Failed to submit answer. Please try again later.";

/// Sink for user-visible messages.
pub trait Notifier {
    fn error(&self, message: &str);

    fn warn(&self, message: &str);
}

/// Prints messages to stderr, keeping stdout for command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}

/// Product questions, or an empty list if the call failed.
///
/// Accepts `{"data": [...]}` as well as a bare array.
pub fn questions_or_empty(result: ClientResult<Value>) -> Vec<Value> {
    match result {
        Ok(Value::Array(items)) => items,
        Ok(Value::Object(mut body)) => match body.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("Question list response has no data array");
                Vec::new()
            }
        },
        Ok(other) => {
            warn!("Unexpected question list response: {other}");
            Vec::new()
        }
        Err(e) => {
            error!("Error fetching questions: {e}");
            Vec::new()
        }
    }
}

/// Show `message` to the user when `result` is an error, then hand it back unchanged.
pub fn notify_on_failure<T>(
    result: ClientResult<T>,
    notifier: &dyn Notifier,
    message: &str,
) -> ClientResult<T> {
    if let Err(ref e) = result {
        error!("{message} ({e})");
        notifier.error(message);
    }
    result
}
