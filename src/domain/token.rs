use std::fmt;

/// Opaque short-lived bearer token, valid only within the run that minted it.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        AccessToken(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The token is a credential; keep it out of logs and error reports.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
