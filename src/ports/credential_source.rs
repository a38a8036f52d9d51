use thiserror::Error;

use crate::domain::credentials::CredentialRecord;

#[derive(Error, Debug)]
pub enum CredentialSourceError {
    #[error("Not connected to the credential store")]
    NotConnected,
    #[error("Failed to read credentials from the store")]
    ReadFailed,
}

#[async_trait::async_trait]
pub trait CredentialSource: Send + Sync {
    /// Resolves the store behind `key_name` and returns the active (last)
    /// credential record. Any store failure is a hard stop for the caller.
    async fn fetch_credentials(
        &self,
        key_name: &str,
    ) -> error_stack::Result<CredentialRecord, CredentialSourceError>;
}
