use error_stack::{report, ResultExt};
use tracing::instrument;

use crate::adapters::app_config::RuntimeFiles;
use crate::domain::credentials::CredentialRecord;
use crate::ports::credential_source::{CredentialSource, CredentialSourceError};

use super::keys;
use super::spreadsheet_manager::SpreadsheetManager;

/// Credential store backed by a Google spreadsheet: the logical key name is
/// resolved through the keys file, the sheet is opened with the
/// service-account key, and the last data row holds the active credentials.
#[derive(Debug)]
pub struct SheetsCredentialSource {
    files: RuntimeFiles,
}

impl SheetsCredentialSource {
    pub fn new(files: RuntimeFiles) -> Self {
        SheetsCredentialSource { files }
    }
}

#[async_trait::async_trait]
impl CredentialSource for SheetsCredentialSource {
    #[instrument(skip(self))]
    async fn fetch_credentials(
        &self,
        key_name: &str,
    ) -> error_stack::Result<CredentialRecord, CredentialSourceError> {
        let spreadsheet_id = keys::spreadsheet_key(&self.files.keys_path, key_name);
        if spreadsheet_id.is_empty() {
            // No point authenticating when there is no sheet to open.
            return Err(report!(CredentialSourceError::NotConnected)
                .attach_printable("empty spreadsheet id, logical name missing from keys file"));
        }

        let manager = SpreadsheetManager::connect(&self.files.service_account_path)
            .await
            .change_context(CredentialSourceError::NotConnected)?;

        let rows = manager
            .read_first_worksheet(&spreadsheet_id)
            .await
            .change_context(CredentialSourceError::NotConnected)?;

        CredentialRecord::last_from_rows(&rows).change_context(CredentialSourceError::ReadFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn files_with_keys(keys_json: &str) -> (tempfile::NamedTempFile, RuntimeFiles) {
        let mut keys_file = tempfile::NamedTempFile::new().unwrap();
        keys_file.write_all(keys_json.as_bytes()).unwrap();
        let files = RuntimeFiles {
            service_account_path: PathBuf::from("/nonexistent/service_account.json"),
            keys_path: keys_file.path().to_path_buf(),
        };
        (keys_file, files)
    }

    #[tokio::test]
    async fn test_missing_logical_name_yields_not_connected_before_any_auth() {
        let (_keys_file, files) = files_with_keys(r#"{"OTHER":"SHEET999"}"#);
        let source = SheetsCredentialSource::new(files);

        let err = source
            .fetch_credentials("WINDOWS_SERVER_PASS")
            .await
            .unwrap_err();
        assert!(matches!(
            err.current_context(),
            CredentialSourceError::NotConnected
        ));
        // The guard fires on the empty id itself, before any auth attempt.
        assert!(format!("{err:?}").contains("empty spreadsheet id"));
    }
}

