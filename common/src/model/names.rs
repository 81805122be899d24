use serde::{Deserialize, Serialize};

/// Request payload for the name validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameValidationRequest {
    pub name: String,
}

/// Response of the name validation endpoint. An empty `suggestions` list
/// keeps the suggestion panel hidden on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameValidationResponse {
    pub original: String,
    pub suggestions: Vec<String>,
    pub is_valid: bool,
}
