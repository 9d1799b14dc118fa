//! Axum router and request handlers.

use crate::error::AppError;
use crate::models::{OutputType, RevenueSummary, TimeRange};
use crate::service::RevenueService;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    service: Arc<RevenueService>,
}

impl AppState {
    pub fn new(service: RevenueService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/stripe_revenue", get(stripe_revenue))
        .route("/revenuecat", get(revenuecat_metric))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct StripeRevenueQuery {
    date_range: Option<String>,
}

async fn stripe_revenue(
    State(state): State<AppState>,
    Query(query): Query<StripeRevenueQuery>,
) -> Result<Json<RevenueSummary>, AppError> {
    let range = TimeRange::parse(query.date_range.as_deref().unwrap_or("all"));
    let summary = state.service.stripe_revenue(range).await?;
    Ok(Json(summary))
}

#[derive(Debug, Deserialize)]
struct RevenueCatQuery {
    output_type: Option<String>,
}

async fn revenuecat_metric(
    State(state): State<AppState>,
    Query(query): Query<RevenueCatQuery>,
) -> Result<Json<RevenueSummary>, AppError> {
    let raw = query.output_type.as_deref().unwrap_or("revenue");
    // Validation happens before any upstream call.
    let output_type = OutputType::parse(raw)
        .ok_or_else(|| AppError::InvalidParam(format!("unsupported output_type '{raw}'")))?;
    let summary = state.service.metric_summary(output_type).await?;
    Ok(Json(summary))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
