use quotes_api::config::Settings;
use quotes_api::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("quotes-api", "info", settings.otlp_endpoint.as_deref());

    let application = Application::build(settings).await?;
    application.run_until_stopped().await?;

    Ok(())
}
