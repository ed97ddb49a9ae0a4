use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Keys are kept in the order they were requested.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingKeys(Vec<String>),
}

impl ConfigError {
    pub fn missing_keys(&self) -> &[String] {
        match self {
            Self::MissingKeys(keys) => keys,
        }
    }
}
