use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateMappingRequest {
    pub long_url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateMappingResponse {
    pub short_url: String,
    pub short_code: String,
    pub long_url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
