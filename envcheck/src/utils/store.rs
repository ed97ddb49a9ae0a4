//! Read access to an environment, so validation can run against the real
//! process environment or a plain map.

use std::{collections::HashMap, env};

pub trait EnvStore {
    fn var(&self, key: &str) -> Option<String>;

    /// Present with a non-empty value.
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some_and(|val| !val.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    /// Non-unicode values read as `None` here.
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn is_set(&self, key: &str) -> bool {
        env::var_os(key).is_some_and(|val| !val.is_empty())
    }
}

impl EnvStore for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
