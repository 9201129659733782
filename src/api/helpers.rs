//! Response builders for the Lambda proxy integration.

use serde::Serialize;
use serde_json::{Value, json};

/// Permissive CORS, any origin may call the API from a browser.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "*",
        "Access-Control-Allow-Headers": "*"
    })
}

/// Returns a 200 OK response with `payload` as the JSON body.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    let body = serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string());
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": body
    })
}

/// Returns a 204 response for CORS preflight requests.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 204,
        "headers": cors_headers(),
        "body": ""
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": json!({ "error": message }).to_string()
    })
}
