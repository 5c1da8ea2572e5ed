//! Response normalization
//!
//! The bridge answers chat and vision calls with payloads of varying shape.
//! These rules collapse them into either a value to render or a `ChatError`,
//! evaluated in a fixed order where the first match wins.

use super::error::ChatError;
use serde_json::Value;

/// Interpret a raw bridge response
///
/// # Arguments
/// * `status` - HTTP status code
/// * `body` - Raw response body
///
/// # Returns
/// * `Ok(Value)` - Payload to hand to [`extract_text`]
/// * `Err(ChatError)` - Non-200 status or a bridge-reported error
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ChatError> {
    if status != 200 {
        return Err(ChatError::Http {
            status,
            body: body.to_string(),
        });
    }

    // Non-JSON bodies are passed through as opaque text
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Ok(Value::String(body.to_string())),
    };

    if let Value::Object(map) = &parsed {
        if let Some(error) = map.get("error").filter(|e| is_truthy(e)) {
            return Err(ChatError::Api {
                message: value_to_text(error),
            });
        }

        let success = map.get("success").is_some_and(is_truthy);
        if let Some(data) = map.get("data").filter(|d| is_truthy(d)) {
            if success {
                return Ok(data.clone());
            }
        }
    }

    Ok(parsed)
}

/// Extract display text from a normalized payload
///
/// `text` wins over `message.content`; anything else is rendered whole.
pub fn extract_text(value: &Value) -> String {
    if let Value::Object(map) = value {
        if let Some(text) = map.get("text") {
            return value_to_text(text);
        }
        if let Some(content) = map
            .get("message")
            .and_then(Value::as_object)
            .and_then(|message| message.get("content"))
        {
            return value_to_text(content);
        }
    }
    value_to_text(value)
}

/// Loose JSON truthiness: null, false, 0, and empty strings/arrays/objects are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(status: u16, body: &str) -> Result<String, ChatError> {
        interpret_response(status, body).map(|value| extract_text(&value))
    }

    #[test]
    fn test_text_field() {
        assert_eq!(normalize(200, r#"{"text": "hello"}"#).unwrap(), "hello");
    }

    #[test]
    fn test_message_content() {
        assert_eq!(
            normalize(200, r#"{"message": {"content": "hi"}}"#).unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_text_takes_priority_over_message() {
        let body = r#"{"text": "first", "message": {"content": "second"}}"#;
        assert_eq!(normalize(200, body).unwrap(), "first");
    }

    #[test]
    fn test_error_field() {
        let result = interpret_response(200, r#"{"error": "bad key"}"#);
        assert_eq!(
            result,
            Err(ChatError::Api {
                message: "bad key".to_string()
            })
        );
    }

    #[test]
    fn test_error_wins_over_data() {
        let body = r#"{"error": "quota", "success": true, "data": {"text": "ok"}}"#;
        assert!(matches!(
            interpret_response(200, body),
            Err(ChatError::Api { .. })
        ));
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let body = r#"{"error": "", "text": "fine"}"#;
        assert_eq!(normalize(200, body).unwrap(), "fine");
    }

    #[test]
    fn test_success_data_unwrapped() {
        let body = r#"{"success": true, "data": {"text": "ok"}}"#;
        assert_eq!(normalize(200, body).unwrap(), "ok");
    }

    #[test]
    fn test_data_without_success_returns_whole_object() {
        let body = r#"{"success": false, "data": {"text": "ok"}}"#;
        let value = interpret_response(200, body).unwrap();
        assert_eq!(value, json!({"success": false, "data": {"text": "ok"}}));
    }

    #[test]
    fn test_string_data() {
        let body = r#"{"success": true, "data": "plain answer"}"#;
        assert_eq!(normalize(200, body).unwrap(), "plain answer");
    }

    #[test]
    fn test_non_json_body_passes_through() {
        assert_eq!(normalize(200, "not json at all").unwrap(), "not json at all");
    }

    #[test]
    fn test_unknown_shape_is_stringified() {
        let text = normalize(200, r#"{"answer": 42}"#).unwrap();
        assert_eq!(text, r#"{"answer":42}"#);
    }

    #[test]
    fn test_non_200_status() {
        let result = interpret_response(503, "unavailable");
        assert_eq!(
            result,
            Err(ChatError::Http {
                status: 503,
                body: "unavailable".to_string()
            })
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&json!([])));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([0])));
        assert!(is_truthy(&json!(true)));
    }
}
