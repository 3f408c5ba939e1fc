mod load_config;

pub use load_config::{PathOverrides, StorePaths, load_config, resolve_store_paths};
