use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mailsmith::config::Settings;
use mailsmith::dispatch::{EmailEndpointClient, EmailMessage};
use mailsmith::template::{
    placeholders, sample_event_values, substitute, EVENT_ANNOUNCEMENT_HTML,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded");

    // Render the demo template with the sample event data
    let values = sample_event_values();
    let html = substitute(EVENT_ANNOUNCEMENT_HTML, &values);

    let unresolved = placeholders(&html);
    if !unresolved.is_empty() {
        tracing::warn!(
            tokens = ?unresolved,
            "Rendered output contains unresolved placeholders"
        );
    }

    // Send to the configured endpoint and print its JSON response
    let client = EmailEndpointClient::new(settings.endpoint)?;
    let message = EmailMessage {
        subject: settings.email.subject,
        html,
        to: settings.email.to,
    };

    let response = client.send(&message).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
