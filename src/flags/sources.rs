use crate::constants::{BASE_OPTIONS_FILE, EXTRA_OPTIONS_FILE};
use std::path::{Path, PathBuf};

/// Ordered list of candidate option files. Earlier files contribute their
/// tokens first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSources {
    pub paths: Vec<PathBuf>,
}

impl FlagSources {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// The base & extra option files under `dir`.
    pub fn conventional(dir: &Path) -> Self {
        Self::new(vec![dir.join(BASE_OPTIONS_FILE), dir.join(EXTRA_OPTIONS_FILE)])
    }
}

impl Default for FlagSources {
    fn default() -> Self {
        Self::new(vec![
            PathBuf::from(BASE_OPTIONS_FILE),
            PathBuf::from(EXTRA_OPTIONS_FILE),
        ])
    }
}
