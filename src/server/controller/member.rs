use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    },
    server::{
        error::AppError,
        model::{
            auth::AdminClaims,
            member::{CreateMemberParams, Member, UpdateMemberParams},
        },
        service::member::MemberService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List all members.
///
/// # Returns
/// - `200 OK` - Every live member, oldest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "All members", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            members
                .into_iter()
                .map(Member::into_dto)
                .collect::<Vec<MemberDto>>(),
        ),
    ))
}

/// Get a member by ID.
///
/// # Returns
/// - `200 OK` - The member
/// - `404 Not Found` - No live member with this ID (including IDs that are not UUIDs)
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "The member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Create a member.
///
/// # Access Control
/// - Admin bearer token required
///
/// # Returns
/// - `201 Created` - The stored member with its server-assigned ID
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .create(CreateMemberParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Update a member.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - Admin bearer token required
///
/// # Returns
/// - `200 OK` - The updated member
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No live member with this ID
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .update(&id, UpdateMemberParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Delete a member.
///
/// The row is soft-deleted: it disappears from every read but stays in the table.
///
/// # Access Control
/// - Admin bearer token required
///
/// # Returns
/// - `200 OK` - `{message: "Member deleted successfully"}`
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No live member with this ID
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Member deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    MemberService::new(&state.db).delete(&id).await?;

    tracing::debug!("Member {} deleted by {}", id, claims.sub);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Member deleted successfully".to_string(),
        }),
    ))
}
