//! Delivery of rendered emails to the remote send-email endpoint

use reqwest::{header, Client};
use serde::Serialize;

use crate::config::EndpointConfig;
use crate::error::{AppError, Result};

/// A rendered email ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    /// Subject line
    pub subject: String,
    /// Rendered HTML body
    pub html: String,
    /// Recipient address; omitted from the payload when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Client for the remote send-email function endpoint.
///
/// Performs a single POST per message. Retries, timeouts and backoff are
/// left to the endpoint and its infrastructure.
#[derive(Debug, Clone)]
pub struct EmailEndpointClient {
    client: Client,
    config: EndpointConfig,
}

impl EmailEndpointClient {
    pub fn new(config: EndpointConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(key) = &config.key {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", key)).map_err(|e| {
                    AppError::Config(config::ConfigError::Message(format!(
                        "Invalid endpoint key: {}",
                        e
                    )))
                })?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, config })
    }

    /// POST the message as JSON and return the endpoint's JSON response.
    ///
    /// The response body is returned as-is, without schema validation.
    pub async fn send(&self, message: &EmailMessage) -> Result<serde_json::Value> {
        tracing::info!(
            url = %self.config.url,
            subject = %message.subject,
            "Sending rendered email"
        );

        let response = self
            .client
            .post(&self.config.url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Endpoint {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        tracing::info!(status = status.as_u16(), "Endpoint accepted email");

        Ok(body)
    }
}
