//! Response builders shared by both handlers.

use serde_json::{Value, json};

use crate::core::config::CorsConfig;

/// Returns a 200 OK response carrying `count`.
///
/// The count is converted to text before JSON encoding, so the body is a JSON
/// string literal (`"5"`), not a JSON number. Existing website clients parse
/// it that way.
///
/// # Examples
///
/// ```
/// use visitor_counter::api::response::ok_count;
/// use visitor_counter::core::config::CorsConfig;
///
/// let response = ok_count(&CorsConfig::default(), 5);
/// assert_eq!(response["body"], "\"5\"");
/// ```
#[must_use]
pub fn ok_count(cors: &CorsConfig, count: u64) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(cors),
        "body": Value::String(count.to_string()).to_string()
    })
}

/// The fixed CORS header set.
#[must_use]
pub fn cors_headers(cors: &CorsConfig) -> Value {
    json!({
        "Access-Control-Allow-Headers": cors.allowed_headers,
        "Access-Control-Allow-Origin": cors.allowed_origin,
        "Access-Control-Allow-Methods": cors.allowed_methods
    })
}
