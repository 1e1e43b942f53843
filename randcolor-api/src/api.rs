use axum::{
    body::Bytes,
    extract::{Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use randcolor::{ColorError, ColorInfo, ColorModel};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Application-specific error types for the API
#[derive(Debug)]
pub enum AppError {
    /// Color input that could not be understood (bad hex, etc.)
    Color(ColorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_msg) = match self {
            AppError::Color(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let error_response = ErrorResponse { error: error_msg };

        (status, Json(error_response)).into_response()
    }
}

impl From<ColorError> for AppError {
    fn from(err: ColorError) -> Self {
        AppError::Color(err)
    }
}

/// Build the application router with all routes configured
pub fn app() -> Router {
    Router::new()
        .route("/api/color", get(random_color).post(random_color))
        .route("/api/color/{hex}", get(describe_color))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Generate a random color and return every representation of it
///
/// The request body is accepted but does not influence the result.
pub async fn random_color(body: Bytes) -> Json<ColorInfo> {
    debug!(body_len = body.len(), "random color requested");

    let mut color = ColorModel::default();
    color.randomize();

    debug!(color = %color, "generated color");

    Json(color.info())
}

/// Describe a caller-supplied hex color (`A1B2C3`, `a1b2c3`, `FA0`)
pub async fn describe_color(Path(hex): Path<String>) -> Result<Json<ColorInfo>, AppError> {
    let color = ColorModel::from_hex(&hex)?;

    debug!(input = %hex, color = %color, "described color");

    Ok(Json(color.info()))
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "randcolor API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
