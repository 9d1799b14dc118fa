use chrono::{DateTime, Datelike, Duration, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Reporting window for the Stripe revenue endpoint.
///
/// `Today`, `Month` and `Year` align to local calendar boundaries; `SevenDays`
/// and `ThirtyDays` are rolling windows anchored at the request instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Today,
    SevenDays,
    ThirtyDays,
    Month,
    Year,
    All,
}

impl TimeRange {
    /// Unknown values fall back to `All`, matching the endpoint default.
    pub fn parse(input: &str) -> TimeRange {
        match input {
            "today" => TimeRange::Today,
            "7d" => TimeRange::SevenDays,
            "30d" => TimeRange::ThirtyDays,
            "month" => TimeRange::Month,
            "year" => TimeRange::Year,
            _ => TimeRange::All,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::All => "all",
        }
    }

    /// Lower bound of the window, or `None` when the listing is unbounded.
    pub fn start_time(self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        let midnight = |year: i32, month: u32, day: u32| {
            Local
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .earliest()
                .unwrap_or(now)
        };

        match self {
            TimeRange::Today => Some(midnight(now.year(), now.month(), now.day())),
            TimeRange::SevenDays => Some(now - Duration::days(7)),
            TimeRange::ThirtyDays => Some(now - Duration::days(30)),
            TimeRange::Month => Some(midnight(now.year(), now.month(), 1)),
            TimeRange::Year => Some(midnight(now.year(), 1, 1)),
            TimeRange::All => None,
        }
    }
}

/// Named metric selectable on the RevenueCat endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Mrr,
    Revenue,
    NewCustomers,
    ActiveSubscriptions,
    ActiveTrials,
}

impl OutputType {
    /// Strict allow-list; anything else is a client error.
    pub fn parse(input: &str) -> Option<OutputType> {
        match input {
            "mrr" => Some(OutputType::Mrr),
            "revenue" => Some(OutputType::Revenue),
            "new_customers" => Some(OutputType::NewCustomers),
            "active_subscriptions" => Some(OutputType::ActiveSubscriptions),
            "active_trials" => Some(OutputType::ActiveTrials),
            _ => None,
        }
    }

    pub fn as_id(self) -> &'static str {
        match self {
            OutputType::Mrr => "mrr",
            OutputType::Revenue => "revenue",
            OutputType::NewCustomers => "new_customers",
            OutputType::ActiveSubscriptions => "active_subscriptions",
            OutputType::ActiveTrials => "active_trials",
        }
    }
}

/// One record from the payment provider's charge listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Charge {
    pub id: String,
    pub status: String,
    /// Minor currency units (cents).
    pub amount: i64,
}

/// One page of the cursor-paginated charge listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargePage {
    pub data: Vec<Charge>,
    pub has_more: bool,
}

/// One named metric from the analytics provider's overview snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    pub id: String,
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Metric {
    pub fn is_currency(&self) -> bool {
        self.unit.as_deref() == Some("$")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsOverview {
    pub metrics: Vec<Metric>,
}

/// Result of draining the charge listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChargeTotals {
    /// Sum of succeeded amounts, in minor currency units.
    pub amount: i64,
    pub count: usize,
}

/// Response body shared by both endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub short: String,
    pub long: String,
}
