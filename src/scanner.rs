use crate::error::{FileError, FileResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp", "heic",
];

/// List the regular files directly inside `dir`, sorted by name.
/// Fails only when `dir` itself cannot be read; unreadable entries are dropped.
pub fn list_files(dir: &Path) -> FileResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                return Err(match e.into_io_error() {
                    Some(io) => FileError::from_io(&path, io),
                    None => FileError::Io {
                        path,
                        source: std::io::Error::other("filesystem loop"),
                    },
                });
            }
            Err(e) => {
                log::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Matches the text after the last '.' of the file name, so `.png` counts too.
pub fn is_image(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    let Some(dot) = name.iter().rposition(|&b| b == b'.') else {
        return false;
    };
    let ext = &name[dot + 1..];
    IMAGE_EXTENSIONS
        .iter()
        .any(|e| ext.eq_ignore_ascii_case(e.as_bytes()))
}

pub fn filter_images(files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.into_iter().filter(|p| is_image(p)).collect()
}
