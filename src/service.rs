use crate::error::AppError;
use crate::format;
use crate::models::{ChargeTotals, OutputType, RevenueSummary, TimeRange};
use crate::providers::{ChargeSource, ChargeWindow, MetricsSource};
use chrono::Local;
use std::sync::Arc;

/// Request-scoped composition of provider fetches and formatting.
pub struct RevenueService {
    charges: Arc<dyn ChargeSource>,
    metrics: Arc<dyn MetricsSource>,
}

impl RevenueService {
    pub fn new(charges: Arc<dyn ChargeSource>, metrics: Arc<dyn MetricsSource>) -> Self {
        Self { charges, metrics }
    }

    /// Drains the cursor-paginated charge listing and sums succeeded amounts.
    ///
    /// Pages are fetched strictly in sequence; the cursor for page N+1 is the
    /// last item id of page N. Any page failure discards everything fetched so
    /// far.
    pub async fn succeeded_total(&self, window: ChargeWindow) -> Result<ChargeTotals, AppError> {
        let mut totals = ChargeTotals::default();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.charges.charges_page(window, cursor.as_deref()).await?;

            for charge in &page.data {
                if charge.status == "succeeded" {
                    totals.amount += charge.amount;
                    totals.count += 1;
                }
            }

            if !page.has_more {
                break;
            }

            // A non-terminal empty page would leave the cursor stuck.
            let Some(last) = page.data.last() else {
                return Err(AppError::Upstream(
                    "charge listing returned an empty page with has_more=true".into(),
                ));
            };
            cursor = Some(last.id.clone());
        }

        Ok(totals)
    }

    pub async fn stripe_revenue(&self, range: TimeRange) -> Result<RevenueSummary, AppError> {
        let now = Local::now();
        let window = ChargeWindow {
            start: range.start_time(now).map(|t| t.timestamp()),
            end: now.timestamp(),
        };

        let totals = self.succeeded_total(window).await?;
        tracing::info!(
            range = range.as_label(),
            charges = totals.count,
            amount_minor = totals.amount,
            "aggregated charge listing"
        );

        let dollars = totals.amount as f64 / 100.0;
        Ok(RevenueSummary {
            short: format::short_form(dollars, true),
            long: format::range_sentence(range, &format::currency_full(dollars)),
        })
    }

    pub async fn metric_summary(&self, output_type: OutputType) -> Result<RevenueSummary, AppError> {
        let metrics = self.metrics.overview().await?;
        let metric = metrics
            .into_iter()
            .find(|m| m.id == output_type.as_id())
            .ok_or_else(|| AppError::MetricNotFound(output_type.as_id().to_string()))?;

        let currency = metric.is_currency();
        let amount = format::amount_full(metric.value, currency);
        Ok(RevenueSummary {
            short: format::short_form(metric.value, currency),
            long: format::metric_sentence(&metric.id, &metric.name, &amount),
        })
    }
}
