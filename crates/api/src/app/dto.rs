use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CaptureRequest {
    pub data_uri: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}
