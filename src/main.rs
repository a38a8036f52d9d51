use std::process::ExitCode;
use std::sync::Arc;

use error_stack::ResultExt;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Registry;

use bms_health_check::adapters::app_config::{AppConfig, AppConfigError, RuntimeFiles};
use bms_health_check::adapters::service_api::BmsServiceApi;
use bms_health_check::adapters::sheets::credential_source::SheetsCredentialSource;
use bms_health_check::adapters::webhook::WebhookNotifier;
use bms_health_check::application::health_check::HealthCheckRoutine;
use bms_health_check::ports::routine::Routine;

fn build_routine(
    config: &AppConfig,
    files: RuntimeFiles,
) -> error_stack::Result<HealthCheckRoutine, AppConfigError> {
    let service_api = BmsServiceApi::new(&config.auth_api_url, &config.service_api_url)
        .change_context(AppConfigError::HttpClient)?;
    let notifier = WebhookNotifier::new(config.webhook_url.clone())
        .change_context(AppConfigError::HttpClient)?;
    let credentials = SheetsCredentialSource::new(files);

    Ok(HealthCheckRoutine::new(
        Arc::new(credentials),
        Arc::new(service_api),
        Arc::new(notifier),
    ))
}

#[tokio::main]
async fn main() -> ExitCode {
    Registry::default()
        .with(
            Targets::new()
                .with_target("bms_health_check", tracing::Level::TRACE)
                .with_default(tracing::Level::INFO),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(report) => {
            tracing::error!("❌ Configuration error: {report:?}");
            return ExitCode::FAILURE;
        }
    };

    let files = match RuntimeFiles::materialize(&config) {
        Ok(files) => files,
        Err(report) => {
            tracing::error!("❌ Configuration error: {report:?}");
            return ExitCode::FAILURE;
        }
    };

    let routine = match build_routine(&config, files) {
        Ok(routine) => routine,
        Err(report) => {
            tracing::error!("❌ Configuration error: {report:?}");
            return ExitCode::FAILURE;
        }
    };

    match routine.run().await {
        Ok(()) => {
            tracing::info!("✅ {}: OK", routine.name());
            ExitCode::SUCCESS
        }
        Err(report) => {
            tracing::error!("❌ {}: {report:?}", routine.name());
            ExitCode::FAILURE
        }
    }
}
