use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponseDto {
    pub message: String,
    pub participant: String,
    pub environment: String,
    pub description: String,
    pub endpoints: EndpointDirectoryDto,
}

/// Path to summary map, serialized in route order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDirectoryDto {
    #[serde(rename = "/")]
    pub root: String,
    #[serde(rename = "/generate")]
    pub generate: String,
    #[serde(rename = "/tokenize")]
    pub tokenize: String,
    #[serde(rename = "/checksum")]
    pub checksum: String,
}
