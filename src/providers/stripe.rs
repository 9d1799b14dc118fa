use crate::config::StripeConfig;
use crate::error::AppError;
use crate::models::ChargePage;
use crate::providers::{ChargeSource, ChargeWindow};
use async_trait::async_trait;
use reqwest::Client;

/// Fixed page size for the charge listing.
pub const PAGE_LIMIT: usize = 100;

pub struct StripeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl StripeClient {
    pub fn new(client: Client, cfg: &StripeConfig) -> Self {
        Self {
            client,
            api_key: cfg.api_key.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn charges_url(&self) -> String {
        format!("{}/v1/charges", self.base_url)
    }
}

#[async_trait]
impl ChargeSource for StripeClient {
    async fn charges_page(
        &self,
        window: ChargeWindow,
        starting_after: Option<&str>,
    ) -> Result<ChargePage, AppError> {
        let mut query: Vec<(&str, String)> = vec![("limit", PAGE_LIMIT.to_string())];
        if let Some(cursor) = starting_after {
            query.push(("starting_after", cursor.to_string()));
        }
        if let Some(start) = window.start {
            query.push(("created[gte]", start.to_string()));
            query.push(("created[lte]", window.end.to_string()));
        }

        let response = self
            .client
            .get(self.charges_url())
            .bearer_auth(&self.api_key)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "stripe charge listing failed");
            return Err(AppError::Upstream(format!(
                "stripe charge listing returned HTTP {status}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> StripeClient {
        StripeClient::new(
            Client::new(),
            &StripeConfig {
                api_key: "sk_test_123".into(),
                base_url: server.uri(),
            },
        )
    }

    #[tokio::test]
    async fn bounded_window_sends_created_range_and_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/charges"))
            .and(query_param("limit", "100"))
            .and(query_param("created[gte]", "1700000000"))
            .and(query_param("created[lte]", "1700003600"))
            .and(query_param_is_missing("starting_after"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "has_more": false,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let window = ChargeWindow {
            start: Some(1_700_000_000),
            end: 1_700_003_600,
        };
        let page = client_for(&server)
            .charges_page(window, None)
            .await
            .expect("page");
        assert!(page.data.is_empty());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn unbounded_window_omits_created_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/charges"))
            .and(query_param_is_missing("created[gte]"))
            .and(query_param_is_missing("created[lte]"))
            .and(query_param("starting_after", "ch_42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "id": "ch_43", "status": "succeeded", "amount": 1000 }],
                "has_more": false,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let window = ChargeWindow {
            start: None,
            end: 1_700_003_600,
        };
        let page = client_for(&server)
            .charges_page(window, Some("ch_42"))
            .await
            .expect("page");
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "ch_43");
    }

    #[tokio::test]
    async fn upstream_error_status_surfaces_as_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/charges"))
            .respond_with(
                ResponseTemplate::new(503).set_body_string("{\"error\":\"rate limited\"}"),
            )
            .mount(&server)
            .await;

        let window = ChargeWindow {
            start: None,
            end: 1_700_003_600,
        };
        let err = client_for(&server)
            .charges_page(window, None)
            .await
            .expect_err("expected upstream error");
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
