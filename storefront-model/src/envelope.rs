use serde::Deserialize;

/// Response body that is either wrapped as `{ "data": ... }` or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Wrapped {
        // Must be present; a bare object without `data` falls through to `Bare`.
        #[serde(deserialize_with = "Option::deserialize")]
        data: Option<T>,
    },
    Bare(T),
}

impl<T> ApiEnvelope<T> {
    /// Payload, or `None` when the server sent `{ "data": null }`.
    pub fn into_inner(self) -> Option<T> {
        match self {
            ApiEnvelope::Wrapped { data } => data,
            ApiEnvelope::Bare(value) => Some(value),
        }
    }
}
