use thiserror::Error;

use crate::domain::status::CardColor;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Failed to deliver webhook notification")]
    DeliveryFailed,

    #[error("Webhook rejected the notification: {0}")]
    Rejected(String),
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Posts a status card. Best effort: callers log delivery failures and
    /// carry on.
    async fn notify(
        &self,
        status_text: &str,
        color: CardColor,
    ) -> error_stack::Result<(), NotifierError>;
}
