use std::path::PathBuf;

use crate::errors::ResumeError;
use crate::layout::Icon;

/// Directory holding the PNG icon set.
#[derive(Debug, Clone)]
pub struct IconStore {
    dir: PathBuf,
}

impl IconStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        IconStore { dir: dir.into() }
    }

    pub fn path(&self, icon: Icon) -> PathBuf {
        self.dir.join(icon.file_name())
    }

    pub fn read(&self, icon: Icon) -> Result<Vec<u8>, ResumeError> {
        let path = self.path(icon);
        std::fs::read(&path).map_err(|e| {
            ResumeError::Render(format!("Failed to read icon '{}': {e}", path.display()))
        })
    }

    /// Icons of the fixed set that are not present on disk.
    pub fn missing(&self) -> Vec<Icon> {
        Icon::ALL
            .into_iter()
            .filter(|icon| !self.path(*icon).is_file())
            .collect()
    }
}
