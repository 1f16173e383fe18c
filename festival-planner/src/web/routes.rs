//! HTTP route handlers.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::domain::{Event, InvalidEvent, InvalidSession, InvalidVenue, Session, Venue};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/services", get(list_services))
        .route("/venues", get(list_venues))
        .route("/destinations", get(destinations))
        .route("/reach", get(reach))
        .route("/lineup", get(line_up))
        .route("/plan/check", post(check_plan))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every service in the timetable.
async fn list_services(State(state): State<AppState>) -> Json<ServicesResponse> {
    let services = state
        .planner
        .planner()
        .timetable()
        .iter()
        .map(ServiceResult::from)
        .collect();

    Json(ServicesResponse { services })
}

/// List every venue served by the timetable.
async fn list_venues(State(state): State<AppState>) -> Json<VenuesResponse> {
    Json(state.planner.planner().timetable().venues().into_iter().collect())
}

/// Venues one shuttle away from a venue at a session.
async fn destinations(
    State(state): State<AppState>,
    query: Result<Query<DestinationsRequest>, QueryRejection>,
) -> Result<Json<DestinationsResponse>, AppError> {
    let Query(req) = query?;
    let venue = parse_venue(&req.venue)?;
    let session = parse_session(req.session)?;

    let destinations = state
        .planner
        .planner()
        .timetable()
        .destinations(&venue, session)
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(Json(DestinationsResponse {
        venue: req.venue,
        session: req.session,
        destinations,
    }))
}

/// Point-to-point reachability.
async fn reach(
    State(state): State<AppState>,
    query: Result<Query<ReachRequest>, QueryRejection>,
) -> Result<Json<ReachResponse>, AppError> {
    let Query(req) = query?;
    let from = parse_venue(&req.from)?;
    let from_session = parse_session(req.from_session)?;
    let to = parse_venue(&req.to)?;
    let to_session = parse_session(req.to_session)?;

    let reachable = state
        .planner
        .can_reach(&from, from_session, &to, to_session)
        .await;

    Ok(Json(ReachResponse { reachable }))
}

/// The loaded line-up.
async fn line_up(State(state): State<AppState>) -> Json<LineUpResponse> {
    let events = state.line_up.iter().map(EventDto::from).collect();
    Json(LineUpResponse { events })
}

/// Check whether a plan of events can be attended in order.
async fn check_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanCheckResponse>, AppError> {
    let req: PlanCheckRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
            message: format!("invalid JSON: {e}"),
        })?;
    let plan = req
        .events
        .iter()
        .map(parse_event)
        .collect::<Result<Vec<_>, _>>()?;

    let verdict = state.planner.check(&plan).await;

    Ok(Json(PlanCheckResponse::from(verdict)))
}

fn parse_venue(name: &str) -> Result<Venue, AppError> {
    Venue::parse(name).map_err(AppError::from)
}

fn parse_session(value: u32) -> Result<Session, AppError> {
    Session::new(value).map_err(AppError::from)
}

fn parse_event(dto: &EventDto) -> Result<Event, AppError> {
    let venue = parse_venue(&dto.venue)?;
    let session = parse_session(dto.session)?;
    Ok(Event::new(venue, session, dto.act.as_str())?)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<InvalidVenue> for AppError {
    fn from(e: InvalidVenue) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidSession> for AppError {
    fn from(e: InvalidSession) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidEvent> for AppError {
    fn from(e: InvalidEvent) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::cache::{CacheConfig, CachedPlanner};
    use crate::domain::{LineUp, Service};
    use crate::planner::DayPlanner;
    use crate::timetable::ShuttleTimetable;

    fn venue(s: &str) -> Venue {
        Venue::parse(s).unwrap()
    }

    fn session(n: u32) -> Session {
        Session::new(n).unwrap()
    }

    fn app() -> Router {
        let tt = ShuttleTimetable::from_services([
            Service::new(venue("Arena"), venue("Tent"), session(1)).unwrap(),
            Service::new(venue("Tent"), venue("Field"), session(2)).unwrap(),
        ])
        .unwrap();
        let planner = CachedPlanner::new(DayPlanner::new(&tt), &CacheConfig::default());

        let mut line_up = LineUp::new();
        line_up
            .add(Event::new(venue("Arena"), session(1), "Opener").unwrap())
            .unwrap();

        create_router(AppState::new(planner, line_up))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        post_raw(uri, body.to_string()).await
    }

    async fn post_raw(uri: &str, body: String) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        read_json(response).await
    }

    async fn read_json(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        if status.is_client_error() {
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json",
                "errors are reported as JSON"
            );
        }
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn services_listed_in_order() {
        let (status, json) = get_json("/services").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({"services": [
                {"source": "Arena", "destination": "Tent", "session": 1},
                {"source": "Tent", "destination": "Field", "session": 2},
            ]})
        );
    }

    #[tokio::test]
    async fn venues_listed() {
        let (_, json) = get_json("/venues").await;
        assert_eq!(json, serde_json::json!({"venues": ["Arena", "Field", "Tent"]}));
    }

    #[tokio::test]
    async fn destinations_for_slot() {
        let (status, json) = get_json("/destinations?venue=Arena&session=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({"venue": "Arena", "session": 1, "destinations": ["Tent"]})
        );
    }

    #[tokio::test]
    async fn reach_query() {
        let (status, json) =
            get_json("/reach?from=Arena&from_session=1&to=Field&to_session=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"reachable": true}));

        let (_, json) = get_json("/reach?from=Field&from_session=1&to=Arena&to_session=3").await;
        assert_eq!(json, serde_json::json!({"reachable": false}));
    }

    #[tokio::test]
    async fn reach_rejects_session_zero() {
        let (status, json) =
            get_json("/reach?from=Arena&from_session=0&to=Tent&to_session=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid session: 0 is not a positive integer");
    }

    #[tokio::test]
    async fn line_up_listed() {
        let (_, json) = get_json("/lineup").await;
        assert_eq!(
            json,
            serde_json::json!({"events": [{"venue": "Arena", "session": 1, "act": "Opener"}]})
        );
    }

    #[tokio::test]
    async fn plan_check_compatible() {
        let (status, json) = post_json(
            "/plan/check",
            serde_json::json!({"events": [
                {"venue": "Arena", "session": 1, "act": "Opener"},
                {"venue": "Field", "session": 3, "act": "Closer"},
            ]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"compatible": true, "verdict": "compatible"}));
    }

    #[tokio::test]
    async fn plan_check_same_session() {
        let (_, json) = post_json(
            "/plan/check",
            serde_json::json!({"events": [
                {"venue": "Arena", "session": 1, "act": "Opener"},
                {"venue": "Tent", "session": 1, "act": "Clash"},
            ]}),
        )
        .await;
        assert_eq!(
            json,
            serde_json::json!({"compatible": false, "verdict": "same_session", "index": 1})
        );
    }

    #[tokio::test]
    async fn plan_check_rejects_bad_venue() {
        let (status, json) = post_json(
            "/plan/check",
            serde_json::json!({"events": [{"venue": "Main Stage", "session": 1, "act": "X"}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("must not contain whitespace"));
    }

    #[tokio::test]
    async fn malformed_query_is_json_bad_request() {
        let (status, json) =
            get_json("/reach?from=Arena&from_session=-1&to=Tent&to_session=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to deserialize query string")
        );

        let (status, _) = get_json("/destinations?venue=Arena&session=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json("/destinations?venue=Arena&session=4294967296").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json("/reach?from=Arena&to=Tent").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn distant_session_answers_promptly() {
        let (status, json) =
            get_json("/reach?from=Arena&from_session=1&to=Field&to_session=4294967295").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"reachable": true}));
    }

    #[tokio::test]
    async fn malformed_plan_body_is_json_bad_request() {
        let (status, json) = post_raw("/plan/check", r#"{"events": ["#.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("invalid JSON"));

        let (status, json) = post_json(
            "/plan/check",
            serde_json::json!({"events": [{"venue": "Arena", "session": -1, "act": "X"}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("invalid JSON"));
    }
}
