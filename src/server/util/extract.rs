use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections are reported as 400 with an `ErrorDto` body.
///
/// axum's own `Json` answers missing fields with 422; clients of this API expect every
/// malformed payload to be a plain bad request.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
