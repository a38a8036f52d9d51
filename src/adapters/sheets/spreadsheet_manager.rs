use std::fmt;
use std::path::Path;

use error_stack::{report, ResultExt};
use google_sheets4::{hyper, hyper_rustls, Sheets};
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use super::{auth, http_client};

#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("Not connected to the spreadsheet backend")]
    NotConnected,

    #[error("Failed to fetch worksheet values")]
    FailedToFetchRange,

    #[error("Worksheet is missing or empty")]
    EmptyWorksheet,
}

// A range with no sheet qualifier addresses the first visible worksheet.
const FIRST_WORKSHEET_RANGE: &str = "A1:ZZ";

pub struct SpreadsheetManager {
    hub: Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
}

impl fmt::Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SpreadsheetManager")
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::connect", skip_all)]
    pub async fn connect(
        service_account_path: &Path,
    ) -> error_stack::Result<Self, SpreadsheetError> {
        let client = http_client::http_client();
        let auth = auth::service_account_auth(service_account_path, client.clone()).await?;

        Ok(SpreadsheetManager {
            hub: Sheets::new(client, auth),
        })
    }

    /// Reads every populated cell of the first worksheet of `spreadsheet_id`.
    #[instrument(skip(self))]
    pub async fn read_first_worksheet(
        &self,
        spreadsheet_id: &str,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(spreadsheet_id, FIRST_WORKSHEET_RANGE)
            .doit()
            .await
            .change_context(SpreadsheetError::FailedToFetchRange)?;

        response
            .1
            .values
            .ok_or(report!(SpreadsheetError::EmptyWorksheet))
    }
}
