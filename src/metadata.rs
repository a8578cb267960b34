use crate::error::{FileError, FileResult};
use chrono::{DateTime, Local, NaiveDateTime};
use std::ffi::{OsStr, OsString};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// Zero-padded so names sort in chronological order.
pub const DATE_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Read the creation time of a file, in local time.
/// Uses the birth time when the filesystem records one, the inode change
/// time on Unix otherwise, and the modified time as a last resort.
pub fn creation_time(path: &Path) -> FileResult<NaiveDateTime> {
    let meta = std::fs::metadata(path).map_err(|e| FileError::from_io(path, e))?;
    let created = match meta.created() {
        Ok(t) => t,
        Err(e) => {
            log::debug!("no birth time for {:?} ({}), falling back", path, e);
            fallback_time(&meta).map_err(|e| FileError::from_io(path, e))?
        }
    };
    let datetime: DateTime<Local> = created.into();
    Ok(datetime.naive_local())
}

#[cfg(unix)]
fn fallback_time(meta: &Metadata) -> std::io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = meta.ctime();
    let nanos = meta.ctime_nsec() as u32;
    let time = if secs >= 0 {
        SystemTime::UNIX_EPOCH + Duration::new(secs as u64, nanos)
    } else {
        SystemTime::UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
    };
    Ok(time)
}

#[cfg(not(unix))]
fn fallback_time(meta: &Metadata) -> std::io::Result<SystemTime> {
    meta.modified()
}

pub fn format_prefix(datetime: &NaiveDateTime) -> String {
    datetime.format(DATE_FORMAT).to_string()
}

/// Original name bytes are kept as-is, even when they are not UTF-8.
pub fn name_with_prefix(datetime: &NaiveDateTime, file_name: &OsStr) -> OsString {
    let mut name = OsString::from(format_prefix(datetime));
    name.push("_");
    name.push(file_name);
    name
}

/// `<creation time>_<original file name>` for the given file.
pub fn prefixed_name(path: &Path) -> FileResult<OsString> {
    let file_name = path.file_name().ok_or_else(|| FileError::NotFound {
        path: path.to_path_buf(),
    })?;
    let created = creation_time(path)?;
    Ok(name_with_prefix(&created, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_name_with_prefix() {
        assert_eq!(
            name_with_prefix(&at(2023, 3, 1, 10, 0, 0), OsStr::new("photo.JPG")),
            "2023-03-01_10-00-00_photo.JPG"
        );
    }

    #[test]
    fn test_prefix_sorts_chronologically() {
        let times = [
            at(2021, 12, 31, 23, 59, 59),
            at(2022, 1, 1, 0, 0, 0),
            at(2022, 1, 1, 9, 5, 3),
            at(2022, 1, 1, 10, 0, 0),
            at(2022, 10, 2, 0, 0, 0),
        ];
        let names: Vec<String> = times.iter().map(format_prefix).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names[2], "2022-01-01_09-05-03");
    }

    #[test]
    fn test_prefixed_name_for_real_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("beach.png");
        file.touch().unwrap();

        let name = prefixed_name(file.path()).unwrap();
        let expected = name_with_prefix(
            &creation_time(file.path()).unwrap(),
            OsStr::new("beach.png"),
        );
        assert_eq!(name, expected);
        assert_eq!(name.len(), "YYYY-MM-DD_HH-MM-SS_beach.png".len());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_kept_byte_for_byte() {
        use std::os::unix::ffi::OsStrExt;

        let name = name_with_prefix(&at(2024, 5, 6, 7, 8, 9), OsStr::from_bytes(b"caf\xe9.jpg"));
        assert_eq!(name.as_bytes(), b"2024-05-06_07-08-09_caf\xe9.jpg");
    }

    #[test]
    fn test_creation_time_is_recent() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("new.jpg");
        file.touch().unwrap();

        let created = creation_time(file.path()).unwrap();
        let now = Local::now().naive_local();
        assert!((now - created).num_seconds().abs() < 60);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let err = prefixed_name(&temp.path().join("gone.jpg")).unwrap_err();
        assert!(matches!(err, FileError::NotFound { .. }));
    }
}
