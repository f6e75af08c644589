use anyhow::{Context as _, Result, anyhow};
use std::{env::VarError, error::Error, str::FromStr};
use tracing::trace;

/// Read a typed configuration value from the environment, falling back to
/// `default` when the variable is not set.
pub fn env<T>(var: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    Ok(maybe_env(var)?.unwrap_or(default))
}

/// Read a typed configuration value from the environment.
///
/// Returns `None` when the variable is not set, an error when it is set but
/// can't be parsed as `T`.
pub fn maybe_env<T>(var: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    match std::env::var(var) {
        Ok(content) => content
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("couldn't parse configuration variable {var}")),
        Err(VarError::NotPresent) => {
            trace!("optional configuration variable {var} is not set");
            Ok(None)
        }
        Err(VarError::NotUnicode(_)) => Err(anyhow!("configuration variable {var} is not UTF-8")),
    }
}
