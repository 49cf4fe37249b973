use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
    },
    server::{
        error::AppError,
        model::{
            auth::AdminClaims,
            project::{CreateProjectParams, Project, UpdateProjectParams},
        },
        service::project::ProjectService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            projects
                .into_iter()
                .map(Project::into_dto)
                .collect::<Vec<ProjectDto>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Create a project.
///
/// # Access Control
/// - Admin bearer token required
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db)
        .create(CreateProjectParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

/// Update a project with the fields present in the body.
///
/// # Access Control
/// - Admin bearer token required
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db)
        .update(&id, UpdateProjectParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Soft-delete a project.
///
/// # Access Control
/// - Admin bearer token required
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ProjectService::new(&state.db).delete(&id).await?;

    tracing::debug!("Project {} deleted by {}", id, claims.sub);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Project deleted successfully".to_string(),
        }),
    ))
}
