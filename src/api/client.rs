use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::pipeline::feed::EmailSource;

use super::endpoints;
use super::models::{RawEmailRecord, RetrievalParams};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct EmailClient {
    http: Client,
    base_url: Url,
}

impl EmailClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "base_url must use http or https, got {}",
                base_url.scheme()
            )));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn list(&self, params: &RetrievalParams) -> AppResult<Vec<RawEmailRecord>> {
        let endpoint = endpoints::list_endpoint();
        let query = endpoints::list_query(params);
        tracing::debug!(
            days = params.days(),
            max_results = params.max_results(),
            "requesting email list"
        );
        self.get_json(endpoint, &query).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> AppResult<T> {
        let url = self.endpoint_url(endpoint);
        let response = self.http.get(url).query(query).send().await?;
        self.parse_json_response(response).await
    }

    fn endpoint_url(&self, endpoint: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        url.set_path(&path);
        url
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return decode_body(&body);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl EmailSource for EmailClient {
    async fn fetch(&self, params: &RetrievalParams) -> AppResult<Vec<RawEmailRecord>> {
        self.list(params).await
    }
}

fn decode_body<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|err| AppError::ResponseParse(err.to_string()))
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    detail: serde_json::Value,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|envelope| match envelope.detail {
            serde_json::Value::String(detail) => detail,
            other => other.to_string(),
        })
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    AppError::Transport {
        status: Some(status.as_u16()),
        message,
    }
}
