//! Pieces shared by every crate in the workspace: logging setup and small wire types.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::types::{ApiResponse, ErrorBody, Pong};
    use serde_json::json;

    #[test]
    fn pong_serializes_to_fixed_payload() {
        let body = serde_json::to_value(Pong::default()).unwrap();
        assert_eq!(body, json!({"message": "pong"}));
    }

    #[test]
    fn envelopes_have_expected_shape() {
        assert_eq!(serde_json::to_value(ApiResponse::new(true)).unwrap(), json!({"data": true}));
        assert_eq!(serde_json::to_value(ApiResponse::new(vec![1, 2])).unwrap(), json!({"data": [1, 2]}));
        assert_eq!(serde_json::to_value(ErrorBody::new("boom")).unwrap(), json!({"error": "boom"}));
    }
}
