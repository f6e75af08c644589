use crate::Config;
use publish_wait_registry_api::RegistryApi;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{self, Instant};
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "timeout of {timeout:?} reached waiting for crate `{name}` {version} to be published on {registry}"
    )]
    PublishTimeout {
        name: String,
        version: String,
        registry: Url,
        timeout: Duration,
    },
    #[error(
        "timeout of {timeout:?} reached waiting for crate `{name}` {version} to be downloadable from {registry}"
    )]
    DownloadTimeout {
        name: String,
        version: String,
        registry: Url,
        timeout: Duration,
    },
    #[error(transparent)]
    Registry(#[from] publish_wait_registry_api::Error),
}

/// Wait until `version` of crate `name` is published and downloadable.
///
/// Polls the registry metadata until the version shows up, then probes its
/// download endpoint until that serves the file too. The two stages run
/// under one shared deadline, `config.publish_timeout`; finding the
/// version in the metadata does not restart it.
///
/// The first metadata fetch only happens after
/// `config.delay_between_metadata_fetches`. Right after `cargo publish`
/// returns the registry hasn't processed the publish yet, an immediate
/// fetch would be wasted.
///
/// Registry errors other than "crate not found" abort the wait, waiting
/// out the timeout against a failing registry would only hide them.
pub async fn wait_for_version(
    api: &RegistryApi,
    config: &Config,
    name: &str,
    version: &str,
) -> Result<(), Error> {
    let started = Instant::now();

    let dl_path = loop {
        time::sleep(config.delay_between_metadata_fetches).await;

        let versions = api.get_crate_versions(name).await?;

        if let Some(found) = versions.iter().flatten().find(|v| v.version == version) {
            info!(
                dl_path = %found.dl_path,
                "crate `{name}` {version} appeared in the registry metadata",
            );
            break found.dl_path.clone();
        }

        if started.elapsed() > config.publish_timeout {
            return Err(Error::PublishTimeout {
                name: name.to_owned(),
                version: version.to_owned(),
                registry: api.api_base().clone(),
                timeout: config.publish_timeout,
            });
        }

        debug!("crate `{name}` {version} is not in the registry metadata yet");
    };

    loop {
        if api.is_downloadable(&dl_path).await? {
            info!("crate `{name}` {version} is downloadable");
            return Ok(());
        }

        if started.elapsed() > config.publish_timeout {
            return Err(Error::DownloadTimeout {
                name: name.to_owned(),
                version: version.to_owned(),
                registry: api.api_base().clone(),
                timeout: config.publish_timeout,
            });
        }

        debug!("crate `{name}` {version} is not downloadable yet");

        time::sleep(config.delay_between_download_checks).await;
    }
}
