use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        auth::{LoginDto, TokenDto},
        blog::{BlogDto, CreateBlogDto, UpdateBlogDto},
        member::{CreateMemberDto, MemberDto, UpdateMemberDto},
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
        search::SearchResultsDto,
        storage::{ProcessContentDto, ProcessedContentDto, UploadFormDto, UploadResponseDto},
    },
    server::{
        controller::{auth, blog, health, member, project, search, storage},
        middleware::auth::require_admin,
        service::storage::MAX_UPLOAD_BYTES,
        state::AppState,
    },
};

/// Request body limit for the upload route. Larger than the upload limit so oversized
/// files reach the storage service and get its 400 rather than a 413.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES * 2;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        member::get_members,
        member::get_member,
        member::create_member,
        member::update_member,
        member::delete_member,
        project::get_projects,
        project::get_project,
        project::create_project,
        project::update_project,
        project::delete_project,
        blog::get_blogs,
        blog::get_blog,
        blog::create_blog,
        blog::update_blog,
        blog::delete_blog,
        search::search,
        storage::upload_file,
        storage::delete_file,
        storage::process_markdown,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        LoginDto,
        TokenDto,
        MemberDto,
        CreateMemberDto,
        UpdateMemberDto,
        ProjectDto,
        CreateProjectDto,
        UpdateProjectDto,
        BlogDto,
        CreateBlogDto,
        UpdateBlogDto,
        SearchResultsDto,
        UploadFormDto,
        UploadResponseDto,
        ProcessContentDto,
        ProcessedContentDto,
    )),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// Builds the application router.
///
/// Reads are public. Every mutating route sits behind [`require_admin`], applied with
/// `route_layer` so unmatched paths still 404 instead of 401.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/members", get(member::get_members))
        .route("/api/members/{id}", get(member::get_member))
        .route("/api/projects", get(project::get_projects))
        .route("/api/projects/{id}", get(project::get_project))
        .route("/api/blogs", get(blog::get_blogs))
        .route("/api/blogs/{id}", get(blog::get_blog))
        .route("/api/search", get(search::search));

    let protected = Router::new()
        .route("/api/members", post(member::create_member))
        .route(
            "/api/members/{id}",
            put(member::update_member).delete(member::delete_member),
        )
        .route("/api/projects", post(project::create_project))
        .route(
            "/api/projects/{id}",
            put(project::update_project).delete(project::delete_project),
        )
        .route("/api/blogs", post(blog::create_blog))
        .route(
            "/api/blogs/{id}",
            put(blog::update_blog).delete(blog::delete_blog),
        )
        .route(
            "/api/storage/upload",
            post(storage::upload_file).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/api/storage/process-markdown",
            post(storage::process_markdown),
        )
        .route("/api/storage/{bucket}/{filename}", delete(storage::delete_file))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
