use serde::{Deserialize, Serialize};

/// Inbound payload for `/solve`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SimplifyRequest {
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SimplifyResponse {
    pub output: String,
}
