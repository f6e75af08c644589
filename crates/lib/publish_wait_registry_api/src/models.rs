use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One crate as returned by the registry's `/api/v1/crates/{name}` endpoint,
/// reduced to the fields we consume. Rebuilt on every fetch, never cached.
#[derive(Debug, Deserialize)]
pub(crate) struct CrateMetadata {
    #[serde(rename = "crate")]
    pub(crate) krate: CrateData,
    /// All published versions, in the order the registry returned them.
    pub(crate) versions: Vec<VersionMetadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CrateData {
    pub(crate) name: String,
}

/// One entry of the `versions` array. `num` is unique within a response
/// (registry-guaranteed; we don't deduplicate).
#[derive(Debug, Deserialize)]
pub(crate) struct VersionMetadata {
    pub(crate) num: String,
    #[serde(default = "Utc::now")]
    pub(crate) created_at: DateTime<Utc>,
    // kept for parity with the registry payload, nothing reads it yet
    #[allow(dead_code)]
    #[serde(default = "Utc::now")]
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) dl_path: String,
}

/// A single published version of a crate, as listed by the registry.
///
/// The version identifier is semver-like but treated as an opaque string;
/// `dl_path` is the registry-relative download path, passed through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateVersion {
    pub version: String,
    pub created: DateTime<Utc>,
    pub dl_path: String,
}

impl From<VersionMetadata> for CrateVersion {
    fn from(meta: VersionMetadata) -> Self {
        Self {
            version: meta.num,
            created: meta.created_at,
            dl_path: meta.dl_path,
        }
    }
}
