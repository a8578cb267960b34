use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure on a single file. The run logs it and moves on to the next one.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("{}: no such file or directory", .path.display())]
    NotFound { path: PathBuf },

    #[error("{}: permission denied", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl FileError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => FileError::AlreadyExists { path },
            _ => FileError::Io { path, source: err },
        }
    }
}

pub type FileResult<T> = Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_io_kinds() {
        let p = Path::new("a.jpg");
        assert!(matches!(
            FileError::from_io(p, io::Error::from(io::ErrorKind::NotFound)),
            FileError::NotFound { .. }
        ));
        assert!(matches!(
            FileError::from_io(p, io::Error::from(io::ErrorKind::PermissionDenied)),
            FileError::PermissionDenied { .. }
        ));
        assert!(matches!(
            FileError::from_io(p, io::Error::from(io::ErrorKind::AlreadyExists)),
            FileError::AlreadyExists { .. }
        ));
        assert!(matches!(
            FileError::from_io(p, io::Error::new(io::ErrorKind::Other, "disk on fire")),
            FileError::Io { .. }
        ));
    }

    #[test]
    fn test_message_names_path() {
        let err = FileError::from_io(
            Path::new("dir/photo.png"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.to_string(), "dir/photo.png: no such file or directory");
    }
}
