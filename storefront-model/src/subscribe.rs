use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Successful subscription reply. `already_subscribed` is omitted by the
/// backend for fresh sign-ups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeResponse {
    pub already_subscribed: bool,
    pub message: Option<String>,
}

/// Error payload attached to non-success responses. Endpoints disagree on
/// the key, so both `message` and `error` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
