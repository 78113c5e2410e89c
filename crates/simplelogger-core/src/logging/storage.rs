//! Storage availability checks used by the file logger

use std::path::PathBuf;

/// Reports whether the medium holding log files is currently usable
///
/// Only consulted after a failed write, to decide whether retrying makes sense.
pub trait StorageProbe: Send + Sync {
    fn is_available(&self) -> bool;
}

/// Considers storage available while a directory exists
#[derive(Debug, Clone)]
pub struct DirectoryProbe {
    dir: PathBuf,
}

impl DirectoryProbe {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl StorageProbe for DirectoryProbe {
    fn is_available(&self) -> bool {
        self.dir.is_dir()
    }
}

impl<F> StorageProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_available(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_directory_probe() {
        let dir = tempdir().unwrap();
        let probe = DirectoryProbe::new(dir.path());
        assert!(probe.is_available());

        let missing = DirectoryProbe::new(dir.path().join("unmounted"));
        assert!(!missing.is_available());
    }

    #[test]
    fn test_closure_probe() {
        let up = || true;
        let down = || false;
        assert!(up.is_available());
        assert!(!down.is_available());
    }
}
