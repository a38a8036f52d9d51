use std::time::Duration;

use error_stack::{report, ResultExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::token::AccessToken;
use crate::ports::service_api::{ServiceApi, ServiceApiError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: StatusDetail,
}

#[derive(Debug, Deserialize)]
struct StatusDetail {
    status: String,
}

/// HTTP client for the monitored BMS service: one POST to exchange
/// credentials for a bearer token, one GET to read the service status.
pub struct BmsServiceApi {
    http: Client,
    auth_url: String,
    status_url: String,
}

impl BmsServiceApi {
    pub fn new(auth_url: &str, status_url: &str) -> error_stack::Result<Self, ServiceApiError> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .change_context(ServiceApiError::HttpError)?;

        Ok(BmsServiceApi {
            http,
            auth_url: auth_url.to_owned(),
            status_url: status_url.to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl ServiceApi for BmsServiceApi {
    #[instrument(skip(self, password))]
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> error_stack::Result<AccessToken, ServiceApiError> {
        let response = self
            .http
            .post(&self.auth_url)
            .json(&AuthRequest { username, password })
            .send()
            .await
            .change_context(ServiceApiError::HttpError)?;

        if !response.status().is_success() {
            return Err(report!(ServiceApiError::HttpStatusError(
                response.status().to_string()
            )));
        }

        let body: AuthResponse = response
            .json()
            .await
            .change_context(ServiceApiError::JsonError)?;

        Ok(AccessToken::new(body.token))
    }

    #[instrument(skip(self, token))]
    async fn check_status(
        &self,
        token: &AccessToken,
    ) -> error_stack::Result<String, ServiceApiError> {
        let response = self
            .http
            .get(&self.status_url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .change_context(ServiceApiError::HttpError)?;

        if !response.status().is_success() {
            return Err(report!(ServiceApiError::HttpStatusError(
                response.status().to_string()
            )));
        }

        let body: StatusResponse = response
            .json()
            .await
            .change_context(ServiceApiError::JsonError)?;

        Ok(body.status.status)
    }
}
