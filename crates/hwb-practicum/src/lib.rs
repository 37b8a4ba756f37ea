//! Homework-status API adapter.
//!
//! Implements `hwb_core::ports::HomeworkSource` with a single authenticated GET:
//! `Authorization: OAuth <token>` and `?from_date=<unix seconds>`.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};

use hwb_core::{config::Config, errors::Error, ports::HomeworkSource, Result};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: reqwest::Client,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Transport(format!("http client build error: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            token: token.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(cfg.endpoint.clone(), cfg.practicum_token.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        debug!(endpoint = %self.endpoint, from_date, "requesting homework statuses");

        let resp = self
            .http
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %self.endpoint, error = %e, "homework API request failed");
                Error::Transport(format!("homework API request error: {e}"))
            })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            error!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "homework API endpoint is unavailable"
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }
        info!(status = status.as_u16(), "homework API response received");

        let body: Value = resp.json().await.map_err(|e| {
            error!(endpoint = %self.endpoint, error = %e, "homework API returned invalid JSON");
            Error::Transport(format!("homework API json error: {e}"))
        })?;

        if let Some(detail) = reported_error(&body) {
            error!(endpoint = %self.endpoint, error = %detail, "homework API reported an error");
            return Err(Error::RemoteService(detail));
        }

        Ok(body)
    }
}

/// Text of the `error` field of an object body, with `code` appended when present.
fn reported_error(body: &Value) -> Option<String> {
    let obj = body.as_object()?;
    let err = obj.get("error")?;
    let detail = match err {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(match obj.get("code") {
        Some(Value::String(code)) => format!("{detail} ({code})"),
        Some(Value::Null) | None => detail,
        Some(code) => format!("{detail} ({code})"),
    })
}
