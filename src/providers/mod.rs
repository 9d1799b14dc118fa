use crate::error::AppError;
use crate::models::{ChargePage, Metric};
use async_trait::async_trait;

pub mod revenuecat;
pub mod stripe;

/// Time bounds applied to a charge listing, in epoch seconds.
///
/// `start` is absent for an unbounded listing; `end` is always the request
/// instant.
#[derive(Debug, Clone, Copy)]
pub struct ChargeWindow {
    pub start: Option<i64>,
    pub end: i64,
}

/// Cursor-paginated source of charge records.
///
/// The seam exists so the aggregation loop can run against a fake in tests;
/// the production implementation is [`stripe::StripeClient`].
#[async_trait]
pub trait ChargeSource: Send + Sync {
    async fn charges_page(
        &self,
        window: ChargeWindow,
        starting_after: Option<&str>,
    ) -> Result<ChargePage, AppError>;
}

/// Single-shot metrics snapshot from the subscription-analytics provider.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn overview(&self) -> Result<Vec<Metric>, AppError>;
}
