use anyhow::{Context, Result};
use chrono::Local;
use indicatif::ProgressBar;
use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::metadata::DATE_FORMAT;

pub const LOG_DIR: &str = "logs";
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Per-run log: every line goes to the log file and to stdout.
pub struct RunLog {
    path: PathBuf,
    file: File,
    bar: Option<ProgressBar>,
}

impl RunLog {
    /// Create `<log_dir>/<start time>_process_log.txt`, creating the folder if needed.
    /// A run never writes into an earlier run's file: when one started in the
    /// same second, the name gets a `_2`, `_3`, ... suffix.
    pub fn create(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("could not create log folder {}", log_dir.display()))?;
        let stamp = Local::now().format(DATE_FORMAT).to_string();
        let (path, file) = open_fresh(log_dir, &stamp)?;
        log::debug!("logging to {:?}", path);

        Ok(Self {
            path,
            file,
            bar: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Route stdout lines around `bar` until [`RunLog::detach_bar`].
    pub fn attach_bar(&mut self, bar: ProgressBar) {
        self.bar = Some(bar);
    }

    pub fn bar(&self) -> Option<&ProgressBar> {
        self.bar.as_ref()
    }

    pub fn detach_bar(&mut self) -> Option<ProgressBar> {
        self.bar.take()
    }

    pub fn line(&mut self, message: impl Display) {
        let message = message.to_string();
        if let Err(e) = writeln!(self.file, "{}", message).and_then(|_| self.file.flush()) {
            log::warn!("could not write to {}: {}", self.path.display(), e);
        }
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{}", message)),
            None => println!("{}", message),
        }
    }
}

fn open_fresh(log_dir: &Path, stamp: &str) -> Result<(PathBuf, File)> {
    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let name = match attempt {
            1 => format!("{}_process_log.txt", stamp),
            n => format!("{}_process_log_{}.txt", stamp, n),
        };
        let path = log_dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("could not create log file {}", path.display()));
            }
        }
    }
    anyhow::bail!("too many log files for {} in {}", stamp, log_dir.display())
}
