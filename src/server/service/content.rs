//! Rewrites local image references in markdown to public storage URLs.
//!
//! Authors write posts with images referenced as `![alt](image/photo.png)` and drop the
//! files into a staging directory. Processing uploads every staged file that is referenced
//! and swaps the reference for the uploaded file's public URL. References without a staged
//! file, or whose upload fails, are left as they are.

use std::{collections::HashMap, path::Path};

use pulldown_cmark::{Event, Parser, Tag};

use crate::server::{model::storage::ProcessedContent, service::storage::StorageService};

/// Destination prefix marking an image as local.
pub const LOCAL_IMAGE_PREFIX: &str = "image/";

pub struct ContentProcessor<'a> {
    storage: &'a StorageService,
    staging_dir: &'a Path,
}

impl<'a> ContentProcessor<'a> {
    pub fn new(storage: &'a StorageService, staging_dir: &'a Path) -> Self {
        Self {
            storage,
            staging_dir,
        }
    }

    /// Uploads referenced staged images and rewrites their references.
    ///
    /// Best effort: the returned mapping only contains references that were uploaded.
    pub async fn process(&self, content: &str) -> ProcessedContent {
        let mut images = HashMap::new();

        for reference in local_image_references(content) {
            let Some(name) = Path::new(&reference.path)
                .file_name()
                .and_then(|name| name.to_str())
            else {
                continue;
            };

            let path = self.staging_dir.join(name);
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::debug!(
                        "No staged file for {} at {:?}: {}",
                        reference.raw,
                        path,
                        err
                    );
                    continue;
                }
            };

            match self.storage.upload(bytes, name).await {
                Ok(uploaded) => {
                    images.insert(reference.raw, uploaded.url);
                }
                Err(err) => {
                    tracing::warn!("Failed to upload staged image {}: {}", reference.raw, err);
                }
            }
        }

        ProcessedContent {
            content: rewrite(content, &images),
            images,
        }
    }
}

/// A local image destination.
#[derive(Debug, PartialEq, Eq)]
pub struct ImageReference {
    /// Destination exactly as written in the markdown source.
    pub raw: String,
    /// Destination with escapes and entities resolved, used to find the staged file.
    pub path: String,
}

/// Collects distinct image destinations starting with [`LOCAL_IMAGE_PREFIX`].
///
/// References are keyed by their source text so they can be replaced verbatim.
pub fn local_image_references(content: &str) -> Vec<ImageReference> {
    let mut references: Vec<ImageReference> = Vec::new();

    for (event, range) in Parser::new(content).into_offset_iter() {
        let Event::Start(Tag::Image(_, destination, _)) = event else {
            continue;
        };
        if !destination.starts_with(LOCAL_IMAGE_PREFIX) {
            continue;
        }

        let raw = content
            .get(range)
            .and_then(raw_destination)
            .map(str::to_string)
            .unwrap_or_else(|| destination.to_string());

        if !references.iter().any(|r| r.raw == raw) {
            references.push(ImageReference {
                raw,
                path: destination.to_string(),
            });
        }
    }

    references
}

/// Extracts the destination from the source of an inline image, `![alt](dest "title")`.
///
/// Returns `None` for reference-style images, whose destination lives elsewhere.
fn raw_destination(source: &str) -> Option<&str> {
    let inner = source.trim_end().strip_suffix(')')?;
    let start = inner.rfind("](")? + 2;
    let rest = inner[start..].trim_start();

    let raw = match rest.strip_prefix('<') {
        Some(bracketed) => bracketed.split('>').next()?,
        None => rest.split(char::is_whitespace).next()?,
    };

    (!raw.is_empty()).then_some(raw)
}

/// Replaces every occurrence of each reference, longest first so a reference that is a
/// prefix of another cannot clobber it.
fn rewrite(content: &str, images: &HashMap<String, String>) -> String {
    let mut replacements: Vec<(&String, &String)> = images.iter().collect();
    replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    replacements
        .into_iter()
        .fold(content.to_string(), |content, (from, to)| {
            content.replace(from.as_str(), to)
        })
}
