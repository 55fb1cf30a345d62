use serde_json::{Value as JsonValue, json};

use stockledger_core::DomainError;

/// JSON body reported for a failed script line.
pub fn error_to_json(err: &DomainError, line: usize) -> JsonValue {
    json_error(err.code(), err.to_string(), line)
}

pub fn json_error(code: &'static str, message: impl Into<String>, line: usize) -> JsonValue {
    json!({
        "error": code,
        "message": message.into(),
        "line": line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_carries_code_message_and_line() {
        let body = error_to_json(&DomainError::insufficient_stock(10, 15), 3);
        assert_eq!(body["error"], "insufficient_stock");
        assert_eq!(body["message"], "insufficient stock (available: 10, requested: 15)");
        assert_eq!(body["line"], 3);
    }
}
