use std::path::Path;

use error_stack::ResultExt;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};

use super::http_client::HttpsClient;
use super::spreadsheet_manager::SpreadsheetError;

/// Authenticates against the spreadsheet backend with the service-account
/// key materialized at startup. A missing or malformed key file, like any
/// other auth failure, surfaces as `NotConnected`.
pub async fn service_account_auth(
    key_path: &Path,
    client: HttpsClient,
) -> error_stack::Result<
    Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    SpreadsheetError,
> {
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(key_path)
        .await
        .change_context(SpreadsheetError::NotConnected)?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetError::NotConnected)
}
