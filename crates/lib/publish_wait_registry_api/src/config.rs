use anyhow::Result;
use publish_wait_env_vars::env;
use url::Url;

#[derive(Debug)]
pub struct Config {
    pub registry_api_host: Url,
}

impl Config {
    pub fn from_environment() -> Result<Self> {
        Ok(Self {
            registry_api_host: env(
                "PUBLISHWAIT_REGISTRY_API_HOST",
                "https://crates.io".parse().unwrap(),
            )?,
        })
    }
}
