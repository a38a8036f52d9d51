pub mod credential_source;
pub mod notifier;
pub mod routine;
pub mod service_api;
