use serde::{Deserialize, Serialize};

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// "development" or "production".
    pub env: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let response = HealthResponse {
            ok: true,
            env: "development".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["env"], "development");
    }
}
