use super::{
    error::ConfigError,
    store::{EnvStore, ProcessEnv},
};
use std::{
    env,
    path::{Path, PathBuf},
};

pub const ENV_FILE_NAME: &str = ".env";

/// The `.env` file that lives next to this crate.
pub fn env_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(ENV_FILE_NAME)
}

/// Load [`env_path`] into the process environment.
///
/// A missing file is not an error, and neither is a malformed one; both are
/// only logged. Variables that are already set are left untouched.
pub fn load_env() {
    load_env_from(env_path());
}

/// Load an env file into the process environment.
///
/// Lines that fail to parse are logged and skipped. Returns `true` if every
/// line in the file was applied.
pub fn load_env_from(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();

    let entries = match dotenv::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => {
            tracing::debug!("No env file at {}, skipping", path.display());
            return false;
        }
        Err(e) => {
            tracing::warn!("Failed to load env file {}: {e}", path.display());
            return false;
        }
    };

    let mut is_complete = true;

    for entry in entries {
        match entry {
            Ok((key, value)) => {
                if env::var_os(&key).is_none() {
                    env::set_var(&key, value);
                }
            }
            Err(e @ dotenv::Error::LineParse(..)) => {
                tracing::warn!("Skipping line in {}: {e}", path.display());
                is_complete = false;
            }
            Err(e) => {
                tracing::warn!("Failed to read env file {}: {e}", path.display());
                return false;
            }
        }
    }

    tracing::info!("Loaded environment from {}", path.display());

    is_complete
}

/// Check that every key has a non-empty value in the process environment.
pub fn require_keys<K: AsRef<str>>(keys: &[K]) -> Result<(), ConfigError> {
    require_keys_in(&ProcessEnv, keys)
}

pub fn require_keys_in<S, K>(store: &S, keys: &[K]) -> Result<(), ConfigError>
where
    S: EnvStore + ?Sized,
    K: AsRef<str>,
{
    let missing: Vec<String> = keys
        .iter()
        .map(|key| key.as_ref())
        .filter(|key| !store.is_set(key))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(ConfigError::MissingKeys(missing))
}

pub fn get_optional(var_name: &str) -> Option<String> {
    ProcessEnv
        .var(var_name)
        // Empty values count as unset
        .and_then(|val| if val.is_empty() { None } else { Some(val) })
}
