//! HTTP Endpoints
//!
//! REST API for the health agent.

use std::time::Duration;

use axum::{
    extract::{Json, Query, State},
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use health_agent_core::Language;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::channels;
use crate::metrics::metrics_handler;
use crate::state::AppState;
use crate::ServerError;

const TARGET_ACCURACY_PERCENT: u32 = 80;
const INTERACTION_WINDOW_DAYS: i64 = 7;
const ACCURACY_WINDOW_DAYS: i64 = 30;
const TOP_QUERY_LIMIT: usize = 10;
const DEFAULT_ALERT_LIMIT: usize = 20;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );
    let timeout = Duration::from_secs(state.config.server.timeout_seconds);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // Inbound channels
        .route("/webhook", post(channels::webhook))
        .route("/whatsapp", post(channels::whatsapp))
        .route("/sms", post(channels::sms))
        // Feedback and analytics
        .route("/feedback", post(submit_feedback))
        .route("/analytics/interactions", get(interaction_analytics))
        .route("/analytics/accuracy", get(accuracy_metrics))
        .route("/health/accuracy", get(accuracy_metrics))
        .route("/analytics/alerts", get(recent_alerts))
        // Prometheus metrics
        .route("/metrics", get(metrics_handler))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - disabled: permissive (development only)
/// - no valid origins: localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.iter().any(|o| o == "*") {
        tracing::warn!("Wildcard CORS origin configured");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let parsed_origins = if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to localhost:3000");
        vec![HeaderValue::from_static("http://localhost:3000")]
    } else {
        tracing::info!("CORS configured with {} origins", parsed_origins.len());
        parsed_origins
    };

    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "AI Healthcare Chatbot",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "features": [
            "Multilingual support (Hindi/English)",
            "Disease symptom and prevention guidance",
            "Real-time health statistics",
            "WhatsApp and SMS integration",
            "Disease outbreak monitoring",
            "Rural healthcare focus"
        ]
    }))
}

/// Health check with a live statistics probe
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let interactions = state
        .services
        .analytics
        .interaction_count()
        .await
        .unwrap_or_default();

    let region = state.config.stats.default_region.clone();
    let probe = tokio::time::timeout(
        state.stats_timeout(),
        state.services.stats.fetch_stats(&region),
    )
    .await;
    let stats_status = match probe {
        Ok(Ok(_)) => "operational",
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Statistics probe failed");
            "error"
        },
        Err(_) => "timeout",
    };

    let configured = |yes: bool| if yes { "configured" } else { "not_configured" };
    let translation = state
        .services
        .translator
        .supports_pair(Language::English, Language::Hindi);

    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
        "analytics": {
            "status": "connected",
            "total_interactions": interactions
        },
        "external_apis": {
            "disease_stats": stats_status
        },
        "services": {
            "whatsapp": configured(state.services.whatsapp.is_configured()),
            "sms": configured(state.services.sms.is_configured()),
            "translation": configured(translation),
            "ml_matching": "active"
        }
    }))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub session_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Attach a 1-5 rating to the newest interaction of a session
async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<serde_json::Value>, ServerError> {
    if !(1..=5).contains(&request.rating) {
        return Err(ServerError::InvalidRequest(format!(
            "rating must be between 1 and 5, got {}",
            request.rating
        )));
    }

    let updated = state
        .services
        .analytics
        .record_feedback(&request.session_id, request.rating)
        .await?;

    if !updated {
        return Err(ServerError::NotFound(format!(
            "no interaction for session {}",
            request.session_id
        )));
    }

    tracing::info!(
        session = %request.session_id,
        rating = request.rating,
        has_comment = request.comment.as_deref().map_or(false, |c| !c.is_empty()),
        "Feedback recorded"
    );

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Feedback submitted successfully"
    })))
}

async fn interaction_analytics(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let since = Utc::now() - chrono::Duration::days(INTERACTION_WINDOW_DAYS);
    let analytics = &state.services.analytics;

    let stats = analytics.interaction_summary(since).await?;
    let top_queries = analytics.top_queries(since, TOP_QUERY_LIMIT).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "period": "last_7_days",
        "interaction_stats": stats,
        "top_queries": top_queries
    })))
}

async fn accuracy_metrics(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let since = Utc::now() - chrono::Duration::days(ACCURACY_WINDOW_DAYS);
    let metrics = state.services.analytics.accuracy_summary(since).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "period": "last_30_days",
        "target_accuracy": format!("{}%", TARGET_ACCURACY_PERCENT),
        "current_metrics": metrics
    })))
}

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub limit: Option<usize>,
}

async fn recent_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let limit = query.limit.unwrap_or(DEFAULT_ALERT_LIMIT);
    let alerts = state.services.alerts.recent(limit).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "count": alerts.len(),
        "alerts": alerts
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Services;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use health_agent_agent::templates;
    use health_agent_config::Settings;
    use health_agent_core::{
        AlertLog, AlertSeverity, DiseaseStats, Error, HealthAlert, MessageTransport, Result,
        StatsProvider,
    };
    use health_agent_integrations::{InMemoryAlertLog, InMemoryAnalyticsStore, LoggingTransport};
    use health_agent_text_processing::{NoopTranslator, CONTINUATION_NOTICE};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Keeps every message it is asked to send
    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl MessageTransport for RecordingTransport {
        async fn send(&self, to: &str, body: &str) -> Result<String> {
            let mut sent = self.sent.lock().unwrap();
            sent.push((to.to_string(), body.to_string()));
            Ok(format!("SM{}", sent.len()))
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct OfflineStats;

    #[async_trait]
    impl StatsProvider for OfflineStats {
        async fn fetch_stats(&self, _region: &str) -> Result<DiseaseStats> {
            Err(Error::Stats("offline".into()))
        }

        fn name(&self) -> &str {
            "offline"
        }
    }

    struct TestApp {
        router: Router,
        sms: Arc<RecordingTransport>,
        alerts: Arc<InMemoryAlertLog>,
    }

    fn app() -> TestApp {
        let mut settings = Settings::default();
        settings.messaging.sms_max_length = 300;

        let sms = Arc::new(RecordingTransport::default());
        let alerts = Arc::new(InMemoryAlertLog::new());
        let services = Services {
            stats: Arc::new(OfflineStats),
            translator: Arc::new(NoopTranslator::new()),
            analytics: Arc::new(InMemoryAnalyticsStore::new()),
            alerts: alerts.clone(),
            whatsapp: Arc::new(LoggingTransport::new("whatsapp:+14155238886")),
            sms: sms.clone(),
        };

        let state = AppState::new(settings, services).unwrap();
        TestApp {
            router: create_router(state),
            sms,
            alerts,
        }
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_webhook_fulfillment() {
        let app = app();
        let (status, body) = send(
            &app.router,
            json_post(
                "/webhook",
                serde_json::json!({
                    "session": "projects/demo/agent/sessions/s-42",
                    "queryResult": {
                        "queryText": "symptoms",
                        "intent": { "displayName": "symptoms.query" },
                        "parameters": { "disease": "malaria" }
                    }
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["fulfillmentText"].as_str().unwrap().contains("MALARIA"));
    }

    #[tokio::test]
    async fn test_malformed_webhook_gets_apology() {
        let app = app();
        let request = Request::post("/webhook")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fulfillmentText"], templates::APOLOGY);
    }

    #[tokio::test]
    async fn test_whatsapp_empty_body() {
        let app = app();
        let (status, body) = send(&app.router, form_post("/whatsapp", "From=whatsapp%3A%2B91&Body=")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Empty message body");
    }

    #[tokio::test]
    async fn test_whatsapp_reply() {
        let app = app();
        let (_, body) = send(
            &app.router,
            form_post("/whatsapp", "From=whatsapp%3A%2B919800000000&Body=dengue+symptoms"),
        )
        .await;

        assert_eq!(body["status"], "success");
        assert!(body["message_sid"].as_str().unwrap().starts_with("SIM"));
        assert_eq!(body["delivered"], false);
    }

    #[tokio::test]
    async fn test_sms_reply_is_truncated_and_sent() {
        let app = app();
        let (_, body) = send(&app.router, form_post("/sms", "From=%2B919800000000&Body=hello")).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["message_sid"], "SM1");

        let sent = app.sms.sent.lock().unwrap();
        let (to, text) = &sent[0];
        assert_eq!(to, "+919800000000");
        assert!(text.chars().count() <= 300);
        assert!(text.ends_with(CONTINUATION_NOTICE));
    }

    #[tokio::test]
    async fn test_feedback_and_analytics() {
        let app = app();
        send(
            &app.router,
            json_post(
                "/webhook",
                serde_json::json!({
                    "session": "projects/demo/agent/sessions/fb-1",
                    "queryResult": { "queryText": "hello" }
                }),
            ),
        )
        .await;

        let (status, _) = send(
            &app.router,
            json_post("/feedback", serde_json::json!({"session_id": "fb-1", "rating": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app.router,
            json_post("/feedback", serde_json::json!({"session_id": "fb-1", "rating": 9})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app.router,
            json_post("/feedback", serde_json::json!({"session_id": "nobody", "rating": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let request = Request::get("/analytics/interactions").body(Body::empty()).unwrap();
        let (_, body) = send(&app.router, request).await;
        assert_eq!(body["interaction_stats"][0]["total_interactions"], 1);
        assert_eq!(body["top_queries"][0]["query"], "hello");

        let request = Request::get("/analytics/accuracy").body(Body::empty()).unwrap();
        let (_, body) = send(&app.router, request).await;
        assert_eq!(body["target_accuracy"], "80%");
        assert_eq!(body["current_metrics"][0]["source"], "default");
    }

    #[tokio::test]
    async fn test_alerts_and_health() {
        let app = app();
        app.alerts
            .append(HealthAlert::outbreak("alert", AlertSeverity::High, "india"))
            .await
            .unwrap();

        let request = Request::get("/analytics/alerts?limit=5").body(Body::empty()).unwrap();
        let (_, body) = send(&app.router, request).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["alerts"][0]["severity"], "high");

        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["external_apis"]["disease_stats"], "error");
        assert_eq!(body["services"]["whatsapp"], "not_configured");
        assert_eq!(body["services"]["translation"], "not_configured");
    }

    #[tokio::test]
    async fn test_root_banner() {
        let app = app();
        let request = Request::get("/").body(Body::empty()).unwrap();
        let (_, body) = send(&app.router, request).await;
        assert_eq!(body["message"], "AI Healthcare Chatbot");
        assert!(body["features"].as_array().unwrap().len() >= 5);
    }
}
