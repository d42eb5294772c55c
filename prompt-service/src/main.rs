use prompt_service::config::PromptConfig;
use prompt_service::observability::init_tracing;
use prompt_service::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PromptConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    init_tracing(&config.service_name, &config.telemetry)?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
