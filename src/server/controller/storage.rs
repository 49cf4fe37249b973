use std::path::Path as FsPath;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        storage::{ProcessContentDto, ProcessedContentDto, UploadFormDto, UploadResponseDto},
    },
    server::{
        error::AppError,
        model::{auth::AdminClaims, storage::Bucket},
        service::content::ContentProcessor,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping storage endpoints in OpenAPI documentation
pub static STORAGE_TAG: &str = "storage";

/// Upload a file to object storage.
///
/// The file is stored under a freshly generated name that keeps the original extension.
/// The optional `type` field (`image`, `images` or `markdown`) picks the bucket; otherwise
/// the extension decides, with unrecognized files going to `images`.
///
/// # Access Control
/// - Admin bearer token required
///
/// # Returns
/// - `200 OK` - `{url, filename}` of the stored object
/// - `400 Bad Request` - No `file` field, unreadable form, or file over 5 MiB
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - The store refused the upload
#[utoipa::path(
    post,
    path = "/api/storage/upload",
    tag = STORAGE_TAG,
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "File uploaded", body = UploadResponseDto),
        (status = 400, description = "Missing or oversized file", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Storage operation failed", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut type_hint: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") => {
                let original = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(invalid_form)?;
                file = Some((original, bytes.to_vec()));
            }
            Some("type") => {
                type_hint = Some(field.text().await.map_err(invalid_form)?);
            }
            _ => {}
        }
    }

    let Some((original, content)) = file else {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    };

    let bucket = type_hint.as_deref().and_then(Bucket::from_type_hint);
    let filename = stored_filename(&original, bucket);

    tracing::debug!(
        "Upload of {:?} ({} bytes) by {} stored as {}",
        original,
        content.len(),
        claims.sub,
        filename
    );

    let uploaded = state.storage.upload(content, &filename).await?;

    Ok((StatusCode::OK, Json(uploaded.into_dto())))
}

/// Delete a file from object storage.
///
/// # Access Control
/// - Admin bearer token required
///
/// # Returns
/// - `200 OK` - `{message: "File deleted successfully"}`
/// - `400 Bad Request` - Bucket is not `images` or `markdown`
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - The store refused the removal
#[utoipa::path(
    delete,
    path = "/api/storage/{bucket}/{filename}",
    tag = STORAGE_TAG,
    params(
        ("bucket" = String, Path, description = "Bucket name: images or markdown"),
        ("filename" = String, Path, description = "Object name inside the bucket")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "File deleted", body = MessageDto),
        (status = 400, description = "Invalid bucket", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Storage operation failed", body = ErrorDto)
    ),
)]
pub async fn delete_file(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Path((bucket, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.storage.delete(&bucket, &filename).await?;

    tracing::debug!("{}/{} deleted by {}", bucket, filename, claims.sub);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "File deleted successfully".to_string(),
        }),
    ))
}

/// Upload staged images referenced by a markdown document and rewrite the references.
///
/// Inline images whose destination starts with `image/` are looked up by base name in
/// the staging directory. References without a staged file are returned unchanged.
///
/// # Access Control
/// - Admin bearer token required
#[utoipa::path(
    post,
    path = "/api/storage/process-markdown",
    tag = STORAGE_TAG,
    request_body = ProcessContentDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Rewritten markdown and uploaded images", body = ProcessedContentDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn process_markdown(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProcessContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let processed = ContentProcessor::new(&state.storage, &state.staging_dir)
        .process(&payload.content)
        .await;

    Ok((StatusCode::OK, Json(processed.into_dto())))
}

fn invalid_form(err: MultipartError) -> AppError {
    AppError::BadRequest(err.body_text())
}

/// Generates the object name for an upload: a random UUID plus the original extension,
/// prefixed with the bucket when one was requested.
fn stored_filename(original: &str, bucket: Option<Bucket>) -> String {
    let extension = FsPath::new(original)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let name = format!("{}{}", Uuid::new_v4(), extension);

    match bucket {
        Some(bucket) => format!("{}/{}", bucket, name),
        None => name,
    }
}
