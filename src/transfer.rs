use crate::error::{FileError, FileResult};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, PartialEq, Eq)]
pub enum Placement {
    Copied(PathBuf),
    /// A file with the target name is already in the destination; nothing was written.
    AlreadyExists(PathBuf),
}

/// Copy `src` into `dest_dir` as `new_name`, never overwriting.
pub fn place_image(src: &Path, new_name: &OsStr, dest_dir: &Path) -> FileResult<Placement> {
    let dest = dest_dir.join(new_name);
    if dest.exists() {
        return Ok(Placement::AlreadyExists(dest));
    }

    if let Err(e) = copy_preserving_mtime(src, &dest) {
        remove_partial(&dest);
        return Err(e);
    }
    Ok(Placement::Copied(dest))
}

fn remove_partial(dest: &Path) {
    if !dest.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(dest) {
        log::warn!("could not remove partial copy {}: {}", dest.display(), e);
    }
}

fn copy_preserving_mtime(src: &Path, dest: &Path) -> FileResult<()> {
    let meta = fs::metadata(src).map_err(|e| FileError::from_io(src, e))?;
    fs::copy(src, dest).map_err(|e| FileError::from_io(src, e))?;

    if let Ok(mtime) = meta.modified() {
        set_mtime(dest, mtime).map_err(|e| FileError::from_io(dest, e))?;
    }
    Ok(())
}

fn set_mtime(path: &Path, mtime: SystemTime) -> std::io::Result<()> {
    // `fs::copy` carries over the source permissions, which may be read-only.
    let file = match fs::OpenOptions::new().write(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            fs::File::open(path)?
        }
        Err(e) => return Err(e),
    };
    file.set_modified(mtime)
}
