use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        blog::{BlogDto, CreateBlogDto, UpdateBlogDto},
    },
    server::{
        error::AppError,
        model::{
            auth::AdminClaims,
            blog::{Blog, CreateBlogParams, UpdateBlogParams},
        },
        service::blog::BlogService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping blog endpoints in OpenAPI documentation
pub static BLOG_TAG: &str = "blog";

/// List all blogs with their authors.
///
/// # Returns
/// - `200 OK` - Every blog, oldest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = BLOG_TAG,
    responses(
        (status = 200, description = "All blogs", body = Vec<BlogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let blogs = BlogService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(blogs.into_iter().map(Blog::into_dto).collect::<Vec<BlogDto>>()),
    ))
}

/// Get a blog by ID.
///
/// Unlike members and projects, a blog ID must be a well-formed UUID.
///
/// # Returns
/// - `200 OK` - The blog with its author
/// - `400 Bad Request` - ID is not a UUID
/// - `404 Not Found` - No blog with this ID
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = String, Path, description = "Blog ID (UUID)")
    ),
    responses(
        (status = 200, description = "The blog", body = BlogDto),
        (status = 400, description = "Invalid blog ID format", body = ErrorDto),
        (status = 404, description = "Blog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let blog = BlogService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(blog.into_dto())))
}

/// Create a blog.
///
/// # Access Control
/// - Admin bearer token required
///
/// # Returns
/// - `201 Created` - The stored blog with its author
/// - `400 Bad Request` - Invalid payload or unknown author
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = BLOG_TAG,
    request_body = CreateBlogDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Blog created", body = BlogDto),
        (status = 400, description = "Invalid blog data or author not found", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blog(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBlogDto>,
) -> Result<impl IntoResponse, AppError> {
    let blog = BlogService::new(&state.db)
        .create(CreateBlogParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(blog.into_dto())))
}

/// Update a blog with the fields present in the body.
///
/// # Access Control
/// - Admin bearer token required
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = String, Path, description = "Blog ID (UUID)")
    ),
    request_body = UpdateBlogDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Blog updated", body = BlogDto),
        (status = 400, description = "Invalid blog ID, data or author", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Blog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateBlogDto>,
) -> Result<impl IntoResponse, AppError> {
    let blog = BlogService::new(&state.db)
        .update(&id, UpdateBlogParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(blog.into_dto())))
}

/// Permanently delete a blog.
///
/// # Access Control
/// - Admin bearer token required
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = BLOG_TAG,
    params(
        ("id" = String, Path, description = "Blog ID (UUID)")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Blog deleted", body = MessageDto),
        (status = 400, description = "Invalid blog ID format", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Blog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    BlogService::new(&state.db).delete(&id).await?;

    tracing::debug!("Blog {} deleted by {}", id, claims.sub);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Blog deleted successfully".to_string(),
        }),
    ))
}
