use crate::app::config::StorePaths;
use crate::ports::StoreFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: StoreFilesystem> {
    filesystem: F,
    paths: StorePaths,
}

impl<F: StoreFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F, paths: StorePaths) -> Self {
        Self { filesystem, paths }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Resolved store file locations.
    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }
}
