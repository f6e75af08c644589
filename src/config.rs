use anyhow::Result;
use publish_wait_env_vars::env;
use std::time::Duration;

/// Polling cadence and deadline for the publish wait.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hard deadline for the whole wait. Covers both the registry
    /// metadata polling and the download probing, it does not restart
    /// between the two.
    pub publish_timeout: Duration,
    /// Pause before each registry metadata fetch. The registry needs a
    /// moment after `cargo publish` returns anyway, so the first fetch
    /// is delayed too.
    pub delay_between_metadata_fetches: Duration,
    /// Pause between download probes for a version that already shows
    /// up in the metadata.
    pub delay_between_download_checks: Duration,
}

impl Config {
    pub fn from_environment() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            publish_timeout: Duration::from_secs(env(
                "PUBLISHWAIT_TIMEOUT",
                defaults.publish_timeout.as_secs(),
            )?),
            delay_between_metadata_fetches: Duration::from_secs(env(
                "PUBLISHWAIT_DELAY_BETWEEN_METADATA_FETCHES",
                defaults.delay_between_metadata_fetches.as_secs(),
            )?),
            delay_between_download_checks: Duration::from_secs(env(
                "PUBLISHWAIT_DELAY_BETWEEN_DOWNLOAD_CHECKS",
                defaults.delay_between_download_checks.as_secs(),
            )?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            publish_timeout: Duration::from_secs(60),
            delay_between_metadata_fetches: Duration::from_secs(5),
            delay_between_download_checks: Duration::from_secs(1),
        }
    }
}
