use std::fmt;
use std::sync::Arc;

use error_stack::ResultExt;
use tracing::instrument;

use crate::domain::status::CardColor;
use crate::ports::credential_source::CredentialSource;
use crate::ports::notifier::Notifier;
use crate::ports::routine::{Routine, RoutineError};
use crate::ports::service_api::ServiceApi;

/// Logical name of the spreadsheet holding the Windows server credentials.
pub const WINDOWS_SERVER_PASS_KEY: &str = "WINDOWS_SERVER_PASS";

/// The whole pipeline: read credentials, authenticate, check the service
/// status, post a status card. Strictly linear, one pass, no retries; any
/// failure before the notification short-circuits the run.
pub struct HealthCheckRoutine {
    credentials: Arc<dyn CredentialSource>,
    service_api: Arc<dyn ServiceApi>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for HealthCheckRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HealthCheckRoutine")
    }
}

impl HealthCheckRoutine {
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        service_api: Arc<dyn ServiceApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        HealthCheckRoutine {
            credentials,
            service_api,
            notifier,
        }
    }
}

#[async_trait::async_trait]
impl Routine for HealthCheckRoutine {
    fn name(&self) -> &str {
        "BMS Health Check"
    }

    #[instrument(skip(self), name = "HealthCheckRoutine::run")]
    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        tracing::trace!("{}: 📋 Reading stored credentials", self.name());
        let record = self
            .credentials
            .fetch_credentials(WINDOWS_SERVER_PASS_KEY)
            .await
            .change_context(RoutineError::routine_failure(
                "Failed to read credentials from the store",
            ))?;

        tracing::trace!("{}: 🔑 Authenticating as {}", self.name(), record.username);
        let token = self
            .service_api
            .authenticate(&record.username, &record.password)
            .await
            .change_context(RoutineError::routine_failure(
                "Failed to authenticate against the service",
            ))?;

        tracing::trace!("{}: ☁️  Checking service status", self.name());
        let status = self
            .service_api
            .check_status(&token)
            .await
            .change_context(RoutineError::routine_failure(
                "Failed to check the service status",
            ))?;

        let color = CardColor::for_status(&status);
        tracing::info!("{}: service status is {status:?} ({color} card)", self.name());

        // Best effort: a lost notification must not fail an otherwise
        // healthy run.
        if let Err(report) = self.notifier.notify(&status, color).await {
            tracing::error!("{}: ❌ Failed to notify webhook: {report:?}", self.name());
        }

        Ok(())
    }
}
