//! Admin API response interpretation
//!
//! The HTTP status is not consulted. Ghost answers with either
//! `{"posts": [...]}` or `{"errors": [...]}`, and the body alone decides the
//! outcome.

use std::str::FromStr;

use ghostpress_domain::constants::{ERROR_DETAIL_SEPARATOR, UNKNOWN_REMOTE_ERROR};
use ghostpress_domain::{PostStatus, PublishErrorKind, PublishResult};
use serde_json::Value;

/// Turn a parsed response body into a [`PublishResult`] for `file_name`.
pub fn interpret_response(file_name: &str, body: &Value) -> PublishResult {
    if let Some(post) = body.get("posts").and_then(Value::as_array).and_then(|p| p.first()) {
        let title = post.get("title").and_then(Value::as_str).map(str::to_string);
        let status =
            post.get("status").and_then(Value::as_str).and_then(|s| PostStatus::from_str(s).ok());
        return PublishResult::succeeded(file_name, title, status);
    }

    match body.get("errors").and_then(Value::as_array).and_then(|e| e.first()) {
        Some(error) => {
            PublishResult::failed(file_name, PublishErrorKind::RemoteRejected, remote_message(error))
        }
        None => PublishResult::failed(file_name, PublishErrorKind::Unknown, UNKNOWN_REMOTE_ERROR),
    }
}

/// `context`, else `message`, else "Unknown error"; plus the first detail.
fn remote_message(error: &Value) -> String {
    let mut message = non_empty_str(error, "context")
        .or_else(|| non_empty_str(error, "message"))
        .unwrap_or(UNKNOWN_REMOTE_ERROR)
        .to_string();

    let detail = error
        .get("details")
        .and_then(Value::as_array)
        .and_then(|d| d.first())
        .and_then(|d| non_empty_str(d, "message"));

    if let Some(detail) = detail {
        message.push_str(ERROR_DETAIL_SEPARATOR);
        message.push_str(detail);
    }
    message
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}
