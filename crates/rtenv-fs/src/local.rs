use std::fs;
use std::path::{Path, PathBuf};

use crate::{FileSystem, FsError, Result};

/// [`FileSystem`] backed by the real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn user_home(&self) -> Result<PathBuf> {
        dirs::home_dir().ok_or(FsError::HomeNotFound)
    }

    fn path_exists(&self, path: &Path) -> Result<bool> {
        path.try_exists().map_err(|source| FsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn list_dir_names(&self, dir: &Path) -> Result<Vec<String>> {
        let io_err = |source| FsError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            // Follow symlinks: rbenv users often link system rubies into versions/.
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::warn!("Skipping non UTF-8 directory name {:?} in {}", raw, dir.display());
                }
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_dir_names_only_directories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("2.7.8")).unwrap();
        fs::create_dir_all(tmp.path().join("3.2.2")).unwrap();
        fs::write(tmp.path().join("version"), "3.2.2\n").unwrap();

        let mut names = LocalFileSystem.list_dir_names(tmp.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["2.7.8".to_string(), "3.2.2".to_string()]);
    }

    #[test]
    fn test_list_dir_names_empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(LocalFileSystem.list_dir_names(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_dir_names_missing_directory_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFileSystem
            .list_dir_names(&tmp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, FsError::Io { .. }));
    }

    #[test]
    fn test_path_exists_and_assert() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("ruby");
        assert!(!LocalFileSystem.path_exists(&file).unwrap());

        let err = LocalFileSystem
            .assert_path_exists(&file, "no ruby here")
            .unwrap_err();
        match err {
            FsError::PathNotFound(msg) => assert_eq!(msg, "no ruby here"),
            other => panic!("unexpected error: {other}"),
        }

        fs::write(&file, "").unwrap();
        assert!(LocalFileSystem.path_exists(&file).unwrap());
        assert!(LocalFileSystem.assert_path_exists(&file, "no ruby here").is_ok());
    }
}
