pub mod utils;

pub use utils::{
    config::{load_env, require_keys},
    error::ConfigError,
};
