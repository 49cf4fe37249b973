use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub url: String,
    pub filename: String,
}

/// Multipart body accepted by the upload endpoint. Only used for API documentation.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct UploadFormDto {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Optional bucket hint: `image`, `images` or `markdown`.
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProcessContentDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProcessedContentDto {
    pub content: String,
    /// Original image reference mapped to its public URL.
    pub images: HashMap<String, String>,
}
