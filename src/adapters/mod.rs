pub mod app_config;
pub mod service_api;
pub mod sheets;
pub mod webhook;
