//! Object storage gateway backed by the Supabase storage REST API.

use reqwest::{multipart, RequestBuilder, Response};
use serde::Deserialize;

use crate::server::{
    error::storage::StorageError,
    model::storage::{Bucket, UploadedFile},
};

/// Largest payload accepted for upload (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 << 20;

#[derive(Debug, Deserialize)]
struct BucketInfo {
    name: String,
}

/// Client for the external bucket store.
///
/// Cheap to clone; `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct StorageService {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StorageService {
    pub fn new(http: reqwest::Client, base_url: &str, service_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// Confirms the store accepts the service key and provides every required bucket.
    ///
    /// Called once during startup; any error here is fatal.
    ///
    /// # Returns
    /// - `Ok(())` - Credentials valid and both buckets present
    /// - `Err(StorageError::InvalidServiceKey)` - The store rejected the key
    /// - `Err(StorageError::MissingBucket)` - A required bucket does not exist
    /// - `Err(StorageError::Request)` - The store could not be reached
    pub async fn verify(&self) -> Result<(), StorageError> {
        tracing::debug!(
            "Verifying storage credentials (key length {})",
            self.service_key.len()
        );

        let response = self
            .authorized(self.http.get(format!("{}/rest/v1/", self.base_url)))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(StorageError::InvalidServiceKey {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let buckets = self.list_buckets().await?;
        for bucket in Bucket::ALL {
            if !buckets.iter().any(|name| name == bucket.as_str()) {
                return Err(StorageError::MissingBucket(bucket.to_string()));
            }
        }

        tracing::info!("Storage verified with buckets: {}", buckets.join(", "));

        Ok(())
    }

    /// Lists the names of all buckets in the store.
    pub async fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        let response = self
            .authorized(self.http.get(format!("{}/storage/v1/bucket", self.base_url)))
            .send()
            .await?;

        let buckets: Vec<BucketInfo> = ensure_success(response).await?.json().await?;

        Ok(buckets.into_iter().map(|bucket| bucket.name).collect())
    }

    /// Uploads a file and returns its public URL.
    ///
    /// The bucket is chosen from the filename (see [`Bucket::classify`]) and the object is
    /// stored under the filename's base name. The size limit is checked before any request
    /// is made.
    ///
    /// # Arguments
    /// - `content` - Raw file bytes
    /// - `filename` - Original filename, optionally prefixed with `images/` or `markdown/`
    ///
    /// # Returns
    /// - `Ok(UploadedFile)` - Stored object with its public URL
    /// - `Err(StorageError::FileTooLarge)` - Payload over [`MAX_UPLOAD_BYTES`]
    /// - `Err(StorageError::InvalidFilename)` - No usable base name
    /// - `Err(StorageError::UnexpectedStatus)` - The store refused the upload
    pub async fn upload(
        &self,
        content: Vec<u8>,
        filename: &str,
    ) -> Result<UploadedFile, StorageError> {
        if content.len() > MAX_UPLOAD_BYTES {
            return Err(StorageError::FileTooLarge {
                size: content.len(),
                max: MAX_UPLOAD_BYTES,
            });
        }

        let bucket = Bucket::classify(filename);
        let name = base_name(filename)?;

        let part = multipart::Part::bytes(content)
            .file_name(name.clone())
            .mime_str(content_type(&name))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .authorized(self.http.post(format!(
                "{}/storage/v1/object/{}/{}",
                self.base_url, bucket, name
            )))
            .multipart(form)
            .send()
            .await?;
        ensure_success(response).await?;

        tracing::info!("Uploaded {} to bucket {}", name, bucket);

        Ok(UploadedFile {
            bucket,
            url: self.public_url(bucket, &name),
            filename: name,
        })
    }

    /// Removes an object from one of the recognized buckets.
    ///
    /// # Returns
    /// - `Ok(())` - The store accepted the removal
    /// - `Err(StorageError::InvalidBucket)` - Bucket is neither `images` nor `markdown`
    /// - `Err(StorageError::UnexpectedStatus)` - The store refused the removal
    pub async fn delete(&self, bucket: &str, filename: &str) -> Result<(), StorageError> {
        let bucket =
            Bucket::from_name(bucket).ok_or_else(|| StorageError::InvalidBucket(bucket.into()))?;
        let name = base_name(filename)?;

        let response = self
            .authorized(
                self.http
                    .delete(format!("{}/storage/v1/object/{}", self.base_url, bucket)),
            )
            .json(&serde_json::json!({ "prefixes": [name] }))
            .send()
            .await?;
        ensure_success(response).await?;

        tracing::info!("Deleted {} from bucket {}", name, bucket);

        Ok(())
    }

    pub fn public_url(&self, bucket: Bucket, filename: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, filename
        )
    }
}

async fn ensure_success(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(StorageError::UnexpectedStatus {
        status: status.as_u16(),
        body: response.text().await.unwrap_or_default(),
    })
}

/// Strips directory components so an object can never escape its bucket.
fn base_name(filename: &str) -> Result<String, StorageError> {
    let name = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(StorageError::InvalidFilename(filename.to_string()));
    }

    Ok(name.to_string())
}

fn content_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("md") => "text/markdown",
        _ => "application/octet-stream",
    }
}
