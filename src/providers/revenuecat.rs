use crate::config::RevenueCatConfig;
use crate::error::AppError;
use crate::models::{Metric, MetricsOverview};
use crate::providers::MetricsSource;
use async_trait::async_trait;
use reqwest::Client;

pub struct RevenueCatClient {
    client: Client,
    api_key: String,
    project_id: String,
    base_url: String,
}

impl RevenueCatClient {
    pub fn new(client: Client, cfg: &RevenueCatConfig) -> Self {
        Self {
            client,
            api_key: cfg.api_key.clone(),
            project_id: cfg.project_id.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn overview_url(&self) -> String {
        format!(
            "{}/v2/projects/{}/metrics/overview",
            self.base_url, self.project_id
        )
    }
}

#[async_trait]
impl MetricsSource for RevenueCatClient {
    async fn overview(&self) -> Result<Vec<Metric>, AppError> {
        let response = self
            .client
            .get(self.overview_url())
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Upstream bodies are logged for diagnostics but never echoed.
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "revenuecat overview request failed");
            return Err(AppError::Upstream(format!(
                "revenuecat overview returned HTTP {status}"
            )));
        }

        let overview: MetricsOverview = response.json().await?;
        Ok(overview.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RevenueCatClient {
        RevenueCatClient::new(
            Client::new(),
            &RevenueCatConfig {
                api_key: "sk_rc_123".into(),
                project_id: "proj1".into(),
                base_url: server.uri(),
            },
        )
    }

    #[tokio::test]
    async fn overview_parses_metric_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/projects/proj1/metrics/overview"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "metrics": [
                    { "id": "mrr", "name": "MRR", "value": 3100.5, "unit": "$" },
                    { "id": "active_trials", "name": "Active Trials", "value": 17.0 },
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let metrics = client_for(&server).overview().await.expect("metrics");
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].id, "mrr");
        assert!(metrics[0].is_currency());
        assert!(!metrics[1].is_currency());
    }

    #[tokio::test]
    async fn auth_failure_surfaces_as_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/projects/proj1/metrics/overview"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string("{\"message\":\"Invalid API key\"}"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .overview()
            .await
            .expect_err("expected upstream error");
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
