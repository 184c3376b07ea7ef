// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{FromRequest, Path, Query, Request, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use haken_api::{
    ApiError, ApplicationInfo, ApplicationResponse, ApproveJoiningNoticeResponse,
    AuditEventInfo, AuditTimelineResponse, AuthenticatedActor, AuthenticationService,
    CandidateInfo, CreateJoiningNoticeRequest, CreateJoiningNoticeResponse, EmployeeInfo,
    EmployeeSummaryResponse, JoiningNoticeInfo, ListApplicationsRequest,
    ListApplicationsResponse, ListCandidatesRequest, ListCandidatesResponse,
    ListEmployeesRequest, ListEmployeesResponse, ListJoiningNoticesRequest,
    ListJoiningNoticesResponse, PresentCandidateRequest, RecordApplicationResultRequest,
    RegisterCandidateRequest, RejectJoiningNoticeRequest, TerminateEmployeeRequest,
    UpdateCandidateRequest, UpdateJoiningNoticeRequest,
};
use haken_audit::Cause;
use haken_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Haken Server - HTTP server for the dispatch lifecycle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Every request holds the lock for its whole unit of work, so reads and
/// the conditional writes that follow them are never interleaved within
/// this process.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Identity and cause carried by every write request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorEnvelope {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
}

impl ActorEnvelope {
    /// Authenticates the actor and builds the cause.
    fn into_parts(self) -> Result<(AuthenticatedActor, Cause), HttpError> {
        let actor: AuthenticatedActor =
            AuthenticationService::authenticate(&self.actor_id, &self.actor_role)
                .map_err(ApiError::from)?;
        Ok((actor, Cause::new(self.cause_id, self.cause_description)))
    }
}

/// A write request: the actor envelope alongside the operation body.
#[derive(Debug, Clone, Deserialize)]
struct ApiRequest<T> {
    #[serde(flatten)]
    envelope: ActorEnvelope,
    #[serde(flatten)]
    body: T,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InvalidState { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(rejection = %rejection.body_text(), "Rejected request body");
        if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
            return Self {
                status: rejection.status(),
                message: rejection.body_text(),
            };
        }
        ApiError::InvalidInput {
            field: String::from("body"),
            message: rejection.body_text(),
        }
        .into()
    }
}

/// JSON body extractor whose failures answer with an `ErrorResponse`.
///
/// A body that does not decode (unknown employment type, fields from the
/// other terms variant, wrong types) is invalid input, not a state error.
struct ApiJson<T>(T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

// ============================================================================
// Candidates
// ============================================================================

/// Handler for POST `/candidates` endpoint.
async fn handle_register_candidate(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<ApiRequest<RegisterCandidateRequest>>,
) -> Result<Json<CandidateInfo>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        role = %req.envelope.actor_role,
        "Handling register_candidate request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let candidate: CandidateInfo =
        haken_api::register_candidate(&mut persistence, req.body, &actor, cause)?;

    Ok(Json(candidate))
}

/// Handler for GET `/candidates` endpoint.
async fn handle_list_candidates(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ListCandidatesRequest>,
) -> Result<Json<ListCandidatesResponse>, HttpError> {
    info!(status = ?params.status, "Handling list_candidates request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListCandidatesResponse = haken_api::list_candidates(&mut persistence, &params)?;

    Ok(Json(response))
}

/// Handler for GET `/candidates/{candidate_id}` endpoint.
async fn handle_get_candidate(
    AxumState(app_state): AxumState<AppState>,
    Path(candidate_id): Path<i64>,
) -> Result<Json<CandidateInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let candidate: CandidateInfo = haken_api::get_candidate(&mut persistence, candidate_id)?;

    Ok(Json(candidate))
}

/// Handler for PUT `/candidates/{candidate_id}` endpoint.
async fn handle_update_candidate(
    AxumState(app_state): AxumState<AppState>,
    Path(candidate_id): Path<i64>,
    ApiJson(req): ApiJson<ApiRequest<UpdateCandidateRequest>>,
) -> Result<Json<CandidateInfo>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        candidate_id,
        "Handling update_candidate request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let candidate: CandidateInfo =
        haken_api::update_candidate(&mut persistence, candidate_id, req.body, &actor, cause)?;

    Ok(Json(candidate))
}

// ============================================================================
// Applications
// ============================================================================

/// Handler for POST `/applications` endpoint.
async fn handle_present_candidate(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<ApiRequest<PresentCandidateRequest>>,
) -> Result<Json<ApplicationResponse>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        candidate_id = req.body.candidate_id,
        client_company_id = req.body.client_company_id,
        "Handling present_candidate request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let response: ApplicationResponse =
        haken_api::present_candidate(&mut persistence, req.body, &actor, cause)?;

    Ok(Json(response))
}

/// Handler for GET `/applications` endpoint.
async fn handle_list_applications(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ListApplicationsRequest>,
) -> Result<Json<ListApplicationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListApplicationsResponse =
        haken_api::list_applications(&mut persistence, &params)?;

    Ok(Json(response))
}

/// Handler for GET `/applications/{application_id}` endpoint.
async fn handle_get_application(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<i64>,
) -> Result<Json<ApplicationInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let application: ApplicationInfo =
        haken_api::get_application(&mut persistence, application_id)?;

    Ok(Json(application))
}

/// Handler for PUT `/applications/{application_id}/result` endpoint.
async fn handle_record_application_result(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<i64>,
    ApiJson(req): ApiJson<ApiRequest<RecordApplicationResultRequest>>,
) -> Result<Json<ApplicationResponse>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        application_id,
        outcome = %req.body.outcome,
        "Handling record_application_result request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let response: ApplicationResponse = haken_api::record_application_result(
        &mut persistence,
        application_id,
        req.body,
        &actor,
        cause,
    )?;

    Ok(Json(response))
}

// ============================================================================
// Joining notices
// ============================================================================

/// Handler for POST `/joining_notices` endpoint.
async fn handle_create_joining_notice(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<ApiRequest<CreateJoiningNoticeRequest>>,
) -> Result<Json<CreateJoiningNoticeResponse>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        candidate_id = req.body.candidate_id,
        "Handling create_joining_notice request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let response: CreateJoiningNoticeResponse =
        haken_api::create_joining_notice(&mut persistence, req.body, &actor, cause)?;

    Ok(Json(response))
}

/// Handler for GET `/joining_notices` endpoint.
async fn handle_list_joining_notices(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ListJoiningNoticesRequest>,
) -> Result<Json<ListJoiningNoticesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListJoiningNoticesResponse =
        haken_api::list_joining_notices(&mut persistence, &params)?;

    Ok(Json(response))
}

/// Handler for GET `/joining_notices/{joining_notice_id}` endpoint.
async fn handle_get_joining_notice(
    AxumState(app_state): AxumState<AppState>,
    Path(joining_notice_id): Path<i64>,
) -> Result<Json<JoiningNoticeInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let notice: JoiningNoticeInfo =
        haken_api::get_joining_notice(&mut persistence, joining_notice_id)?;

    Ok(Json(notice))
}

/// Handler for PUT `/joining_notices/{joining_notice_id}` endpoint.
async fn handle_update_joining_notice(
    AxumState(app_state): AxumState<AppState>,
    Path(joining_notice_id): Path<i64>,
    ApiJson(req): ApiJson<ApiRequest<UpdateJoiningNoticeRequest>>,
) -> Result<Json<JoiningNoticeInfo>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        joining_notice_id,
        "Handling update_joining_notice request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let notice: JoiningNoticeInfo = haken_api::update_joining_notice(
        &mut persistence,
        joining_notice_id,
        req.body,
        &actor,
        cause,
    )?;

    Ok(Json(notice))
}

/// Handler for POST `/joining_notices/{joining_notice_id}/submit` endpoint.
async fn handle_submit_joining_notice(
    AxumState(app_state): AxumState<AppState>,
    Path(joining_notice_id): Path<i64>,
    ApiJson(envelope): ApiJson<ActorEnvelope>,
) -> Result<Json<JoiningNoticeInfo>, HttpError> {
    info!(
        actor_id = %envelope.actor_id,
        joining_notice_id,
        "Handling submit_joining_notice request"
    );

    let (actor, cause) = envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let notice: JoiningNoticeInfo =
        haken_api::submit_joining_notice(&mut persistence, joining_notice_id, &actor, cause)?;

    Ok(Json(notice))
}

/// Handler for POST `/joining_notices/{joining_notice_id}/approve` endpoint.
///
/// Approval materializes the employee and hires the candidate.
async fn handle_approve_joining_notice(
    AxumState(app_state): AxumState<AppState>,
    Path(joining_notice_id): Path<i64>,
    ApiJson(envelope): ApiJson<ActorEnvelope>,
) -> Result<Json<ApproveJoiningNoticeResponse>, HttpError> {
    info!(
        actor_id = %envelope.actor_id,
        role = %envelope.actor_role,
        joining_notice_id,
        "Handling approve_joining_notice request"
    );

    let (actor, cause) = envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let response: ApproveJoiningNoticeResponse =
        haken_api::approve_joining_notice(&mut persistence, joining_notice_id, &actor, cause)?;

    Ok(Json(response))
}

/// Handler for POST `/joining_notices/{joining_notice_id}/reject` endpoint.
async fn handle_reject_joining_notice(
    AxumState(app_state): AxumState<AppState>,
    Path(joining_notice_id): Path<i64>,
    ApiJson(req): ApiJson<ApiRequest<RejectJoiningNoticeRequest>>,
) -> Result<Json<JoiningNoticeInfo>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        role = %req.envelope.actor_role,
        joining_notice_id,
        "Handling reject_joining_notice request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let notice: JoiningNoticeInfo = haken_api::reject_joining_notice(
        &mut persistence,
        joining_notice_id,
        &req.body,
        &actor,
        cause,
    )?;

    Ok(Json(notice))
}

/// Handler for POST `/joining_notices/{joining_notice_id}/materialize`
/// endpoint.
async fn handle_materialize_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(joining_notice_id): Path<i64>,
    ApiJson(envelope): ApiJson<ActorEnvelope>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    info!(
        actor_id = %envelope.actor_id,
        joining_notice_id,
        "Handling materialize_employee request"
    );

    let (actor, cause) = envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let employee: EmployeeInfo =
        haken_api::materialize_employee(&mut persistence, joining_notice_id, &actor, cause)?;

    Ok(Json(employee))
}

// ============================================================================
// Employees
// ============================================================================

/// Handler for GET `/employees` endpoint.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ListEmployeesRequest>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListEmployeesResponse = haken_api::list_employees(&mut persistence, &params)?;

    Ok(Json(response))
}

/// Handler for GET `/employees/summary` endpoint.
async fn handle_get_employee_summary(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<EmployeeSummaryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let summary: EmployeeSummaryResponse = haken_api::get_employee_summary(&mut persistence)?;

    Ok(Json(summary))
}

/// Handler for GET `/employees/{employee_id}` endpoint.
async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let employee: EmployeeInfo = haken_api::get_employee(&mut persistence, employee_id)?;

    Ok(Json(employee))
}

/// Handler for POST `/employees/{employee_id}/terminate` endpoint.
async fn handle_terminate_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
    ApiJson(req): ApiJson<ApiRequest<TerminateEmployeeRequest>>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    info!(
        actor_id = %req.envelope.actor_id,
        employee_id,
        termination_date = %req.body.termination_date,
        "Handling terminate_employee request"
    );

    let (actor, cause) = req.envelope.into_parts()?;
    let mut persistence = app_state.persistence.lock().await;
    let employee: EmployeeInfo =
        haken_api::terminate_employee(&mut persistence, employee_id, &req.body, &actor, cause)?;

    Ok(Json(employee))
}

// ============================================================================
// Audit and health
// ============================================================================

/// Handler for GET `/audit/{entity_type}/{entity_id}` endpoint.
///
/// Returns the entity's audit events, oldest first.
async fn handle_get_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
    Path((entity_type, entity_id)): Path<(String, i64)>,
) -> Result<Json<AuditTimelineResponse>, HttpError> {
    info!(
        entity_type = %entity_type,
        entity_id,
        "Handling get_audit_timeline request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AuditTimelineResponse =
        haken_api::get_audit_timeline(&mut persistence, &entity_type, entity_id)?;

    Ok(Json(response))
}

/// Handler for GET `/audit/event/{event_id}` endpoint.
async fn handle_get_audit_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<AuditEventInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let event: AuditEventInfo = haken_api::get_audit_event(&mut persistence, event_id)?;

    Ok(Json(event))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/candidates",
            post(handle_register_candidate).get(handle_list_candidates),
        )
        .route(
            "/candidates/{candidate_id}",
            get(handle_get_candidate).put(handle_update_candidate),
        )
        .route(
            "/applications",
            post(handle_present_candidate).get(handle_list_applications),
        )
        .route("/applications/{application_id}", get(handle_get_application))
        .route(
            "/applications/{application_id}/result",
            put(handle_record_application_result),
        )
        .route(
            "/joining_notices",
            post(handle_create_joining_notice).get(handle_list_joining_notices),
        )
        .route(
            "/joining_notices/{joining_notice_id}",
            get(handle_get_joining_notice).put(handle_update_joining_notice),
        )
        .route(
            "/joining_notices/{joining_notice_id}/submit",
            post(handle_submit_joining_notice),
        )
        .route(
            "/joining_notices/{joining_notice_id}/approve",
            post(handle_approve_joining_notice),
        )
        .route(
            "/joining_notices/{joining_notice_id}/reject",
            post(handle_reject_joining_notice),
        )
        .route(
            "/joining_notices/{joining_notice_id}/materialize",
            post(handle_materialize_employee),
        )
        .route("/employees", get(handle_list_employees))
        .route("/employees/summary", get(handle_get_employee_summary))
        .route("/employees/{employee_id}", get(handle_get_employee))
        .route(
            "/employees/{employee_id}/terminate",
            post(handle_terminate_employee),
        )
        .route("/audit/event/{event_id}", get(handle_get_audit_event))
        .route(
            "/audit/{entity_type}/{entity_id}",
            get(handle_get_audit_timeline),
        )
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Haken Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Adds the actor envelope to a request body.
    fn with_actor(actor_id: &str, role: &str, mut body: Value) -> Value {
        let fields = body.as_object_mut().expect("body must be a JSON object");
        fields.insert(String::from("actor_id"), json!(actor_id));
        fields.insert(String::from("actor_role"), json!(role));
        fields.insert(String::from("cause_id"), json!("test-cause"));
        fields.insert(String::from("cause_description"), json!("Test request"));
        body
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let request_body: Body = body.map_or_else(Body::empty, |value| {
            Body::from(serde_json::to_string(&value).unwrap())
        });
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(request_body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    async fn register(app: &Router, full_name: &str) -> CandidateInfo {
        let response: Response = send(
            app,
            "POST",
            "/candidates",
            Some(with_actor(
                "staff1",
                "staff",
                json!({ "personal": { "full_name": full_name } }),
            )),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        read_json(response).await
    }

    async fn pending_notice(app: &Router, candidate_id: i64) -> JoiningNoticeInfo {
        let created: Response = send(
            app,
            "POST",
            "/joining_notices",
            Some(with_actor(
                "staff1",
                "staff",
                json!({
                    "candidate_id": candidate_id,
                    "housing": { "housing_type": "own", "move_in_date": "2026-04-01" },
                    "terms": {
                        "employment_type": "haken",
                        "client_company_id": 7,
                        "hourly_rate": 1250,
                        "billing_rate": 1800
                    }
                }),
            )),
        )
        .await;
        assert_eq!(created.status(), HttpStatusCode::OK);
        let created: CreateJoiningNoticeResponse = read_json(created).await;

        let submitted: Response = send(
            app,
            "POST",
            &format!(
                "/joining_notices/{}/submit",
                created.joining_notice.joining_notice_id
            ),
            Some(with_actor("staff1", "staff", json!({}))),
        )
        .await;
        assert_eq!(submitted.status(), HttpStatusCode::OK);
        read_json(submitted).await
    }

    #[tokio::test]
    async fn test_health() {
        let app: Router = build_router(create_test_app_state());

        let response: Response = send(&app, "GET", "/health", None).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let health: HealthResponse = read_json(response).await;
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_register_and_get_candidate() {
        let app: Router = build_router(create_test_app_state());

        let candidate: CandidateInfo = register(&app, "Ana Silva").await;
        assert_eq!(candidate.status, "registered");

        let response: Response = send(
            &app,
            "GET",
            &format!("/candidates/{}", candidate.candidate_id),
            None,
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let fetched: CandidateInfo = read_json(response).await;
        assert_eq!(fetched, candidate);
    }

    #[tokio::test]
    async fn test_register_as_viewer_is_forbidden() {
        let app: Router = build_router(create_test_app_state());

        let response: Response = send(
            &app,
            "POST",
            "/candidates",
            Some(with_actor(
                "viewer1",
                "viewer",
                json!({ "personal": { "full_name": "Ana Silva" } }),
            )),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error);
        assert!(error_response.message.contains("Unauthorized"));

        let listed: Response = send(&app, "GET", "/candidates", None).await;
        let candidates: ListCandidatesResponse = read_json(listed).await;
        assert!(candidates.candidates.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_role_is_unauthenticated() {
        let app: Router = build_router(create_test_app_state());

        let response: Response = send(
            &app,
            "POST",
            "/candidates",
            Some(with_actor(
                "someone",
                "owner",
                json!({ "personal": { "full_name": "Ana Silva" } }),
            )),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_blank_name_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response: Response = send(
            &app,
            "POST",
            "/candidates",
            Some(with_actor(
                "staff1",
                "staff",
                json!({ "personal": { "full_name": "" } }),
            )),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_candidate_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response: Response = send(&app, "GET", "/candidates/42", None).await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_present_and_record_result() {
        let app: Router = build_router(create_test_app_state());
        let candidate: CandidateInfo = register(&app, "Ana Silva").await;

        let presented: Response = send(
            &app,
            "POST",
            "/applications",
            Some(with_actor(
                "staff1",
                "staff",
                json!({ "candidate_id": candidate.candidate_id, "client_company_id": 7 }),
            )),
        )
        .await;
        assert_eq!(presented.status(), HttpStatusCode::OK);
        let presented: ApplicationResponse = read_json(presented).await;
        assert_eq!(presented.candidate.status, "presented");

        let uri: String = format!(
            "/applications/{}/result",
            presented.application.application_id
        );
        let recorded: Response = send(
            &app,
            "PUT",
            &uri,
            Some(with_actor("staff1", "staff", json!({ "outcome": "accepted" }))),
        )
        .await;
        assert_eq!(recorded.status(), HttpStatusCode::OK);
        let recorded: ApplicationResponse = read_json(recorded).await;
        assert_eq!(recorded.application.status, "accepted");
        assert_eq!(recorded.candidate.status, "accepted");

        let again: Response = send(
            &app,
            "PUT",
            &uri,
            Some(with_actor("staff1", "staff", json!({ "outcome": "rejected" }))),
        )
        .await;
        assert_eq!(again.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_notice_lifecycle_to_employee() {
        let app: Router = build_router(create_test_app_state());
        let candidate: CandidateInfo = register(&app, "Ana Silva").await;
        let pending: JoiningNoticeInfo = pending_notice(&app, candidate.candidate_id).await;
        assert_eq!(pending.status, "pending");

        let approve_uri: String = format!(
            "/joining_notices/{}/approve",
            pending.joining_notice_id
        );
        let forbidden: Response = send(
            &app,
            "POST",
            &approve_uri,
            Some(with_actor("staff1", "staff", json!({}))),
        )
        .await;
        assert_eq!(forbidden.status(), HttpStatusCode::FORBIDDEN);

        let approved: Response = send(
            &app,
            "POST",
            &approve_uri,
            Some(with_actor("manager1", "manager", json!({}))),
        )
        .await;
        assert_eq!(approved.status(), HttpStatusCode::OK);
        let approved: ApproveJoiningNoticeResponse = read_json(approved).await;
        assert_eq!(approved.joining_notice.status, "approved");
        assert_eq!(approved.candidate.status, "hired");
        assert_eq!(approved.employee.employee_number, 1);
        assert_eq!(approved.employee.hire_date, "2026-04-01");

        let materialized: Response = send(
            &app,
            "POST",
            &format!(
                "/joining_notices/{}/materialize",
                pending.joining_notice_id
            ),
            Some(with_actor("manager1", "manager", json!({}))),
        )
        .await;
        assert_eq!(materialized.status(), HttpStatusCode::CONFLICT);

        let employee: Response = send(
            &app,
            "GET",
            &format!("/employees/{}", approved.employee.employee_id),
            None,
        )
        .await;
        assert_eq!(employee.status(), HttpStatusCode::OK);
        let employee: EmployeeInfo = read_json(employee).await;
        assert_eq!(employee.status, "active");
    }

    #[tokio::test]
    async fn test_second_open_notice_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        let candidate: CandidateInfo = register(&app, "Ana Silva").await;
        pending_notice(&app, candidate.candidate_id).await;

        let response: Response = send(
            &app,
            "POST",
            "/joining_notices",
            Some(with_actor(
                "staff1",
                "staff",
                json!({
                    "candidate_id": candidate.candidate_id,
                    "housing": { "housing_type": "own" },
                    "terms": { "employment_type": "ukeoi" }
                }),
            )),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_haken_terms_with_bank_are_refused() {
        let app: Router = build_router(create_test_app_state());
        let candidate: CandidateInfo = register(&app, "Ana Silva").await;

        let response: Response = send(
            &app,
            "POST",
            "/joining_notices",
            Some(with_actor(
                "staff1",
                "staff",
                json!({
                    "candidate_id": candidate.candidate_id,
                    "housing": { "housing_type": "own" },
                    "terms": {
                        "employment_type": "haken",
                        "bank": { "account_number": "7654321" }
                    }
                }),
            )),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let body: ErrorResponse = read_json(response).await;
        assert!(body.error);
        assert!(body.message.starts_with("Invalid input for field 'body'"));

        let listed: Response = send(&app, "GET", "/joining_notices", None).await;
        let notices: ListJoiningNoticesResponse = read_json(listed).await;
        assert!(notices.joining_notices.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_employment_type_is_bad_request() {
        let app: Router = build_router(create_test_app_state());
        let candidate: CandidateInfo = register(&app, "Ana Silva").await;

        let response: Response = send(
            &app,
            "POST",
            "/joining_notices",
            Some(with_actor(
                "staff1",
                "staff",
                json!({
                    "candidate_id": candidate.candidate_id,
                    "housing": { "housing_type": "own" },
                    "terms": { "employment_type": "seishain" }
                }),
            )),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let body: ErrorResponse = read_json(response).await;
        assert!(body.error);
        assert!(body.message.contains("seishain"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response: Response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/candidates")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"actor_id\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let body: ErrorResponse = read_json(response).await;
        assert!(body.error);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let app: Router = build_router(create_test_app_state());

        let response: Response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/candidates")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body: ErrorResponse = read_json(response).await;
        assert!(body.error);
    }

    #[tokio::test]
    async fn test_reject_and_terminate_flow() {
        let app: Router = build_router(create_test_app_state());
        let ana: CandidateInfo = register(&app, "Ana Silva").await;
        let bruno: CandidateInfo = register(&app, "Bruno Costa").await;

        let ana_notice: JoiningNoticeInfo = pending_notice(&app, ana.candidate_id).await;
        let rejected: Response = send(
            &app,
            "POST",
            &format!("/joining_notices/{}/reject", ana_notice.joining_notice_id),
            Some(with_actor(
                "admin1",
                "admin",
                json!({ "reason": "Visa expired" }),
            )),
        )
        .await;
        assert_eq!(rejected.status(), HttpStatusCode::OK);
        let rejected: JoiningNoticeInfo = read_json(rejected).await;
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Visa expired"));

        let bruno_notice: JoiningNoticeInfo = pending_notice(&app, bruno.candidate_id).await;
        let approved: Response = send(
            &app,
            "POST",
            &format!("/joining_notices/{}/approve", bruno_notice.joining_notice_id),
            Some(with_actor("admin1", "admin", json!({}))),
        )
        .await;
        let approved: ApproveJoiningNoticeResponse = read_json(approved).await;

        let terminated: Response = send(
            &app,
            "POST",
            &format!("/employees/{}/terminate", approved.employee.employee_id),
            Some(with_actor(
                "staff1",
                "staff",
                json!({ "termination_date": "2026-09-30" }),
            )),
        )
        .await;
        assert_eq!(terminated.status(), HttpStatusCode::OK);

        let summary: Response = send(&app, "GET", "/employees/summary", None).await;
        let summary: EmployeeSummaryResponse = read_json(summary).await;
        assert_eq!(summary.active_total, 0);
        assert_eq!(summary.terminated, 1);

        let listed: Response = send(&app, "GET", "/employees?status=terminated", None).await;
        let employees: ListEmployeesResponse = read_json(listed).await;
        assert_eq!(employees.employees.len(), 1);
    }

    #[tokio::test]
    async fn test_audit_timeline_and_event() {
        let app: Router = build_router(create_test_app_state());
        let candidate: CandidateInfo = register(&app, "Ana Silva").await;

        let response: Response = send(
            &app,
            "GET",
            &format!("/audit/candidate/{}", candidate.candidate_id),
            None,
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let timeline: AuditTimelineResponse = read_json(response).await;
        assert_eq!(timeline.events.len(), 1);
        assert_eq!(timeline.events[0].action_name, "RegisterCandidate");
        assert_eq!(timeline.events[0].actor_id, "staff1");
        assert_eq!(timeline.events[0].cause_id, "test-cause");

        let event_id: i64 = timeline.events[0].event_id.unwrap();
        let event: Response = send(&app, "GET", &format!("/audit/event/{event_id}"), None).await;
        assert_eq!(event.status(), HttpStatusCode::OK);

        let unknown: Response = send(&app, "GET", "/audit/invoice/1", None).await;
        assert_eq!(unknown.status(), HttpStatusCode::BAD_REQUEST);
    }
}
