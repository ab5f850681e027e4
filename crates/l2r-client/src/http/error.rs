//! HTTP → domain error mapping

use l2r_core::DomainError;
use reqwest::StatusCode;
use serde_json::Value;

/// Map a failure that produced no usable response
pub fn map_transport_error(e: reqwest::Error) -> DomainError {
    if e.is_decode() {
        DomainError::Decode(e.to_string())
    } else {
        DomainError::Network(e.to_string())
    }
}

/// Map a non-2xx response to the error taxonomy
pub fn map_status(status: StatusCode, body: &str) -> DomainError {
    let message = error_detail(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string()
    });

    match status.as_u16() {
        400 | 422 => DomainError::Rejected(message),
        401 => DomainError::Unauthorized(message),
        403 => DomainError::Forbidden(message),
        404 => DomainError::NotFound(message),
        409 => DomainError::Conflict(message),
        code => DomainError::Server {
            status: code,
            message,
        },
    }
}

/// Pull a human-readable message out of an error body
///
/// Understands `{"detail": "..."}`, the list form
/// `{"detail": [{"msg": "..."}]}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }

    value
        .pointer("/error/message")
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
