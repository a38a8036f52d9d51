use thiserror::Error;

use crate::domain::token::AccessToken;

#[derive(Error, Debug)]
pub enum ServiceApiError {
    #[error("HTTP request failed")]
    HttpError,

    #[error("HTTP status error: {0}")]
    HttpStatusError(String),

    #[error("JSON parsing failed")]
    JsonError,
}

/// The two calls this program makes against the monitored service.
#[async_trait::async_trait]
pub trait ServiceApi: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> error_stack::Result<AccessToken, ServiceApiError>;

    /// Returns the service's status label, e.g. `"Running"`.
    async fn check_status(
        &self,
        token: &AccessToken,
    ) -> error_stack::Result<String, ServiceApiError>;
}
