//! Tool configuration loading and store file resolution.

use std::path::{Path, PathBuf};

use crate::domain::config::{self, paths};
use crate::domain::{AppError, ManagerConfig};
use crate::ports::StoreFilesystem;

/// Store file locations after applying config file and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub tenants: PathBuf,
    pub plugins: PathBuf,
}

/// Explicit overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub config: Option<PathBuf>,
    pub tenants: Option<PathBuf>,
    pub plugins: Option<PathBuf>,
}

/// Load the tool configuration.
///
/// An explicit `config_path` must exist. Without one, `tenant-manager.toml`
/// in `root` is used when present and defaults apply otherwise.
pub fn load_config<F: StoreFilesystem>(
    fs: &F,
    root: &Path,
    config_path: Option<&Path>,
) -> Result<(ManagerConfig, Option<PathBuf>), AppError> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = paths::config(root);
            if !fs.file_exists(&default_path) {
                tracing::debug!("no {} found; using defaults", paths::CONFIG_FILE);
                return Ok((ManagerConfig::default(), None));
            }
            default_path
        }
    };

    let content = fs.read_file(&path)?;
    let config = config::parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok((config, Some(path)))
}

/// Resolve store file paths: CLI flags win, then the config file (relative to
/// its own directory), then the defaults (relative to `root`).
pub fn resolve_store_paths<F: StoreFilesystem>(
    fs: &F,
    root: &Path,
    overrides: &PathOverrides,
) -> Result<StorePaths, AppError> {
    let (config, config_path) = load_config(fs, root, overrides.config.as_deref())?;
    let base = config_path.as_deref().and_then(Path::parent).unwrap_or(root);

    let tenants = match &overrides.tenants {
        Some(path) => path.clone(),
        None => paths::resolve(Some(base), &config.files.tenants),
    };
    let plugins = match &overrides.plugins {
        Some(path) => path.clone(),
        None => paths::resolve(Some(base), &config.files.plugins),
    };

    Ok(StorePaths { tenants, plugins })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockStoreFs, TestFiles};

    #[test]
    fn defaults_apply_without_config_file() {
        let fs = MockStoreFs::new(TestFiles::new());
        let paths = resolve_store_paths(&fs, Path::new("work"), &PathOverrides::default()).unwrap();
        assert_eq!(paths.tenants, PathBuf::from("work/tenants.json"));
        assert_eq!(paths.plugins, PathBuf::from("work/plugins.json"));
    }

    #[test]
    fn config_file_paths_resolve_against_its_directory() {
        let files = TestFiles::new();
        files.add("conf/custom.toml", "[files]\ntenants = \"data/t.json\"\n");
        let fs = MockStoreFs::new(files);
        let overrides =
            PathOverrides { config: Some(PathBuf::from("conf/custom.toml")), ..Default::default() };

        let paths = resolve_store_paths(&fs, Path::new("work"), &overrides).unwrap();
        assert_eq!(paths.tenants, PathBuf::from("conf/data/t.json"));
        assert_eq!(paths.plugins, PathBuf::from("conf/plugins.json"));
    }

    #[test]
    fn default_config_file_is_picked_up() {
        let files = TestFiles::new();
        files.add("work/tenant-manager.toml", "[files]\nplugins = \"catalog.json\"\n");
        let fs = MockStoreFs::new(files);

        let paths = resolve_store_paths(&fs, Path::new("work"), &PathOverrides::default()).unwrap();
        assert_eq!(paths.plugins, PathBuf::from("work/catalog.json"));
    }

    #[test]
    fn cli_overrides_win() {
        let files = TestFiles::new();
        files.add("work/tenant-manager.toml", "[files]\ntenants = \"a.json\"\n");
        let fs = MockStoreFs::new(files);
        let overrides =
            PathOverrides { tenants: Some(PathBuf::from("/tmp/b.json")), ..Default::default() };

        let paths = resolve_store_paths(&fs, Path::new("work"), &overrides).unwrap();
        assert_eq!(paths.tenants, PathBuf::from("/tmp/b.json"));
    }

    #[test]
    fn explicit_missing_config_is_not_found() {
        let fs = MockStoreFs::new(TestFiles::new());
        let overrides =
            PathOverrides { config: Some(PathBuf::from("missing.toml")), ..Default::default() };

        let err = resolve_store_paths(&fs, Path::new("."), &overrides).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
