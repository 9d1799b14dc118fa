use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid request: {0}")]
    InvalidParam(String),

    #[error("metric '{0}' not present in snapshot")]
    MetricNotFound(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error(transparent)]
    ConfigLoad(#[from] config::ConfigError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidParam(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MetricNotFound(_) => (StatusCode::NOT_FOUND, "Metric not found".to_string()),
            // Everything else is an internal failure. The caller only ever sees
            // the fixed opaque message; detail goes to the log.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred".to_string(),
            ),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_param_maps_to_bad_request() {
        let response =
            AppError::InvalidParam("unsupported output_type 'bogus'".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn metric_not_found_maps_to_not_found() {
        let response = AppError::MetricNotFound("mrr".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_failures_map_to_internal_error() {
        let response = AppError::Upstream("stripe returned HTTP 503".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_error_keeps_context_in_display() {
        let err = AppError::Config("invalid listen address".into());
        assert!(err.to_string().contains("config error"));
    }
}
