use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::SimplifyRequest;
use crate::errors::SimplifyError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from either a v2/function-URL event or a v1 REST event.
#[must_use]
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

#[must_use]
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Decodes the proxy `body` into a request. A blank body is the same as
/// `{"data": ""}`; with no body at all a top-level `data` field (direct
/// invoke) is used.
///
/// # Errors
///
/// Returns `ParseError` for invalid base64 or JSON that does not match
/// `{ "data": string }`.
pub fn parse_request(payload: &Value) -> Result<SimplifyRequest, SimplifyError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => {
            let data = v_str(payload, &["data"]).unwrap_or_default().to_string();
            return Ok(SimplifyRequest { data });
        }
        Some(Value::String(s)) => s,
        Some(obj @ Value::Object(_)) => return Ok(serde_json::from_value(obj.clone())?),
        Some(_) => {
            return Err(SimplifyError::ParseError(
                "Invalid body format".to_string(),
            ));
        }
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let decoded = if is_base64 {
        let bytes = STANDARD
            .decode(body.trim())
            .map_err(|e| SimplifyError::ParseError(format!("Invalid base64 body: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| SimplifyError::ParseError(format!("Body is not UTF-8: {e}")))?
    } else {
        body.clone()
    };

    if decoded.trim().is_empty() {
        return Ok(SimplifyRequest::default());
    }

    Ok(serde_json::from_str(&decoded)?)
}
