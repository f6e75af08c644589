mod api;
mod config;
mod error;
mod models;

pub use api::RegistryApi;
pub use config::Config;
pub use error::Error;
pub use models::CrateVersion;
