use crate::{
    Config,
    error::{Error, Result},
    models::{CrateMetadata, CrateVersion},
};
use reqwest::{
    StatusCode,
    header::{ACCEPT, HeaderValue, USER_AGENT},
};
use tracing::{debug, instrument};
use url::Url;

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct RegistryApi {
    api_base: Url,
    client: reqwest::Client,
}

impl RegistryApi {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.registry_api_host.clone())
    }

    pub fn new(api_base: Url) -> Result<Self> {
        let headers = vec![
            (USER_AGENT, HeaderValue::from_static(APP_USER_AGENT)),
            (ACCEPT, HeaderValue::from_static("application/json")),
        ]
        .into_iter()
        .collect();

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { api_base, client })
    }

    /// The registry API base URL this client talks to.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Fetch the registry's metadata document for one crate.
    ///
    /// A 404 means the registry doesn't know the crate (yet) and maps to
    /// `Ok(None)`. Every call is a single request; callers decide whether
    /// and when to poll again.
    async fn get_crate_metadata(&self, name: &str) -> Result<Option<CrateMetadata>> {
        let url = {
            let mut url = self.api_base.clone();
            url.path_segments_mut()
                .map_err(|()| Error::InvalidApiUrl)?
                .extend(&["api", "v1", "crates", name]);
            url
        };

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Ok(None),
            status => {
                return Err(Error::UnexpectedStatus {
                    name: name.to_owned(),
                    registry: self.api_base.clone(),
                    status,
                    body: response.text().await.unwrap_or_default(),
                });
            }
        }

        let metadata: CrateMetadata = serde_json::from_str(&response.text().await?)?;

        debug!(
            crate_name = %metadata.krate.name,
            versions = metadata.versions.len(),
            "fetched crate metadata",
        );

        Ok(Some(metadata))
    }

    /// List the published versions of a crate, in the order the registry
    /// returned them.
    ///
    /// `Ok(None)` means the crate is not known to the registry at all,
    /// which for a fresh publish usually just means "not yet".
    #[instrument(skip(self))]
    pub async fn get_crate_versions(&self, name: &str) -> Result<Option<Vec<CrateVersion>>> {
        let Some(metadata) = self.get_crate_metadata(name).await? else {
            return Ok(None);
        };

        Ok(Some(
            metadata
                .versions
                .into_iter()
                .map(CrateVersion::from)
                .collect(),
        ))
    }

    /// Probe whether a version's download endpoint actually serves the
    /// file, via a HEAD request to `dl_path`.
    ///
    /// The registry can list a version in its metadata before the file is
    /// reachable, so a listed version is not necessarily downloadable.
    /// Only a 200 counts; any other status maps to `false`.
    #[instrument(skip(self))]
    pub async fn is_downloadable(&self, dl_path: &str) -> Result<bool> {
        let url = self.download_url(dl_path)?;
        let response = self.client.head(url).send().await?;

        Ok(response.status() == StatusCode::OK)
    }

    // dl_path starts with a slash; Url::join would drop a base path
    // prefix like "/mirror", so append to the raw string instead.
    fn download_url(&self, dl_path: &str) -> Result<Url> {
        format!("{}{}", self.api_base.as_str().trim_end_matches('/'), dl_path)
            .parse()
            .map_err(|_| Error::InvalidApiUrl)
    }
}
