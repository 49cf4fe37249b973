use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        search::{SearchQueryDto, SearchResultsDto},
    },
    server::{error::AppError, service::search::SearchService, state::AppState},
};

pub static SEARCH_TAG: &str = "search";

/// Keyword search across members, projects and blogs.
///
/// Matching is a case-insensitive substring match; all three lists are always present.
///
/// # Returns
/// - `200 OK` - `{members, projects, blogs}`
/// - `400 Bad Request` - `q` missing or empty
#[utoipa::path(
    get,
    path = "/api/search",
    tag = SEARCH_TAG,
    params(SearchQueryDto),
    responses(
        (status = 200, description = "Search results", body = SearchResultsDto),
        (status = 400, description = "Search query is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let results = SearchService::new(&state.db)
        .search(query.q.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
