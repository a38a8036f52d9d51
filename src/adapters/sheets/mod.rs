pub mod auth;
pub mod credential_source;
pub mod http_client;
pub mod keys;
pub mod spreadsheet_manager;
