use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// URL of the remote send-email function
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    /// Optional bearer token sent with every request
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Subject line for outgoing messages
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Recipient address (optional, the endpoint may supply its own)
    pub to: Option<String>,
}

fn default_endpoint_url() -> String {
    "http://localhost:54321/functions/v1/send-email".to_string()
}

fn default_subject() -> String {
    "You're invited".to_string()
}

impl Settings {
    pub fn new() -> Result<Self> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("endpoint.url", default_endpoint_url())?
            .set_default("email.subject", default_subject())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // ENDPOINT_URL, ENDPOINT_KEY, EMAIL_SUBJECT, EMAIL_TO
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true),
            );

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            key: None,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            to: None,
        }
    }
}
