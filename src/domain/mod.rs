pub mod credentials;
pub mod status;
pub mod token;
