//! Wait for a freshly published crate version to become visible on a
//! registry.
//!
//! `cargo publish` returns before the registry has fully processed the
//! publish: the new version shows up in the metadata API first and
//! becomes downloadable a little later. [`wait_for_version`] polls both
//! stages and returns once the version can actually be fetched, so
//! whatever runs next (doc builds, dependent publishes, smoke tests) can
//! rely on it.
//!
//! ```no_run
//! use publish_wait::{Config, RegistryApi, RegistryConfig, wait_for_version};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = RegistryApi::from_config(&RegistryConfig::from_environment()?)?;
//! wait_for_version(&api, &Config::default(), "my-crate", "1.2.3").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod wait;

pub use config::Config;
pub use wait::{Error, wait_for_version};

pub use publish_wait_registry_api::{
    Config as RegistryConfig, CrateVersion, Error as RegistryError, RegistryApi,
};
