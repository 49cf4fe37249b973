//! Object storage domain types.

use std::{collections::HashMap, fmt, path::Path};

use crate::model::storage::{ProcessedContentDto, UploadResponseDto};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const MARKDOWN_EXTENSIONS: [&str; 1] = ["md"];

/// The two buckets the store must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Images,
    Markdown,
}

impl Bucket {
    pub const ALL: [Bucket; 2] = [Bucket::Images, Bucket::Markdown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Images => "images",
            Bucket::Markdown => "markdown",
        }
    }

    /// Parses an exact bucket name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "images" => Some(Bucket::Images),
            "markdown" => Some(Bucket::Markdown),
            _ => None,
        }
    }

    /// Maps the optional `type` form field of an upload to a bucket.
    pub fn from_type_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "image" | "images" => Some(Bucket::Images),
            "markdown" => Some(Bucket::Markdown),
            _ => None,
        }
    }

    /// Picks the destination bucket for a filename.
    ///
    /// An explicit leading `images/` or `markdown/` segment wins, then the extension.
    /// Anything unrecognized lands in `images`.
    pub fn classify(filename: &str) -> Self {
        if let Some((first, _)) = filename.split_once('/') {
            if let Some(bucket) = Bucket::from_name(first) {
                return bucket;
            }
        }

        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => Bucket::Images,
            Some(ext) if MARKDOWN_EXTENSIONS.contains(&ext) => Bucket::Markdown,
            _ => Bucket::Images,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub bucket: Bucket,
    /// Sanitized object name inside the bucket.
    pub filename: String,
    pub url: String,
}

impl UploadedFile {
    pub fn into_dto(self) -> UploadResponseDto {
        UploadResponseDto {
            url: self.url,
            filename: self.filename,
        }
    }
}

/// Markdown after local image references were swapped for public URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedContent {
    pub content: String,
    /// Original reference → public URL, for every reference that was uploaded.
    pub images: HashMap<String, String>,
}

impl ProcessedContent {
    pub fn into_dto(self) -> ProcessedContentDto {
        ProcessedContentDto {
            content: self.content,
            images: self.images,
        }
    }
}
