use std::path::PathBuf;

use config::Config;
use error_stack::ResultExt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Failed to load configuration from the environment")]
    Load,

    #[error("Failed to write {0}")]
    WriteFile(&'static str),

    #[error("Failed to build HTTP client")]
    HttpClient,
}

/// Process-wide configuration, read once at startup from the environment and
/// passed by reference from then on.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Chat webhook to post status cards to. Optional: without it the run
    /// still checks the service, it just skips the notification.
    pub webhook_url: Option<String>,
    /// Raw service-account JSON for the spreadsheet backend.
    pub service_json: String,
    /// Status endpoint of the monitored service.
    pub service_api_url: String,
    /// Auth endpoint of the monitored service.
    pub auth_api_url: String,
    /// Raw JSON object mapping logical key names to spreadsheet ids.
    pub keys_json: String,
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(".")
}

impl AppConfig {
    /// Reads `WEBHOOK_URL`, `SERVICE_JSON`, `SERVICE_API_URL`,
    /// `AUTH_API_URL`, `KEYS_JSON` and the optional `WORK_DIR`. A missing
    /// required variable fails the run before any network call.
    pub fn from_env() -> error_stack::Result<Self, AppConfigError> {
        Config::builder()
            .add_source(config::Environment::default())
            .build()
            .change_context(AppConfigError::Load)?
            .try_deserialize()
            .change_context(AppConfigError::Load)
    }
}

/// Locations of the two JSON blobs written out of the environment at startup.
/// Overwritten on every start; later steps only ever read them.
#[derive(Debug, Clone)]
pub struct RuntimeFiles {
    pub service_account_path: PathBuf,
    pub keys_path: PathBuf,
}

impl RuntimeFiles {
    pub fn materialize(config: &AppConfig) -> error_stack::Result<Self, AppConfigError> {
        let service_account_path = config.work_dir.join("service_account.json");
        let keys_path = config.work_dir.join("keys.json");

        std::fs::write(&service_account_path, &config.service_json)
            .change_context(AppConfigError::WriteFile("service_account.json"))?;
        std::fs::write(&keys_path, &config.keys_json)
            .change_context(AppConfigError::WriteFile("keys.json"))?;

        Ok(RuntimeFiles {
            service_account_path,
            keys_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(work_dir: &std::path::Path) -> AppConfig {
        AppConfig {
            webhook_url: None,
            service_json: r#"{"type":"service_account"}"#.to_owned(),
            service_api_url: "http://localhost/status".to_owned(),
            auth_api_url: "http://localhost/auth".to_owned(),
            keys_json: r#"{"WINDOWS_SERVER_PASS":"SHEET123"}"#.to_owned(),
            work_dir: work_dir.to_path_buf(),
        }
    }

    #[test]
    fn test_materialize_writes_both_blobs_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let files = RuntimeFiles::materialize(&config).unwrap();

        assert_eq!(
            std::fs::read_to_string(&files.service_account_path).unwrap(),
            config.service_json
        );
        assert_eq!(
            std::fs::read_to_string(&files.keys_path).unwrap(),
            config.keys_json
        );
    }

    #[test]
    fn test_materialize_overwrites_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());

        RuntimeFiles::materialize(&config).unwrap();

        config.keys_json = r#"{"WINDOWS_SERVER_PASS":"SHEET456"}"#.to_owned();
        let files = RuntimeFiles::materialize(&config).unwrap();

        assert_eq!(
            std::fs::read_to_string(&files.keys_path).unwrap(),
            config.keys_json
        );
    }

    #[test]
    fn test_materialize_fails_on_unwritable_work_dir() {
        let mut config = config_in(std::path::Path::new("."));
        config.work_dir = PathBuf::from("/nonexistent/workdir");

        let err = RuntimeFiles::materialize(&config).unwrap_err();
        assert!(matches!(
            err.current_context(),
            AppConfigError::WriteFile("service_account.json")
        ));
    }
}
