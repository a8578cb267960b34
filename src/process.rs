use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::logger::RunLog;
use crate::metadata;
use crate::progress::RunStats;
use crate::scanner;
use crate::transfer::{self, Placement};

/// Copy every image in `source` into `dest` under its dated name.
/// Returns `None` when there was nothing to do.
pub fn process_images(source: &Path, dest: &Path, log: &mut RunLog) -> Option<RunStats> {
    let files = match scanner::list_files(source) {
        Ok(files) => files,
        Err(e) => {
            log.line(format_args!(
                "An error occurred while listing {}: {}",
                source.display(),
                e
            ));
            Vec::new()
        }
    };
    let images = scanner::filter_images(files);
    if images.is_empty() {
        log.line("No images found to process.");
        return None;
    }

    Some(process_candidates(&images, dest, log))
}

/// Handle each candidate in turn, logging progress after every one and the
/// summary at the end. A file that fails is counted as skipped.
pub fn process_candidates(images: &[PathBuf], dest: &Path, log: &mut RunLog) -> RunStats {
    let mut stats = RunStats::new(images.len());
    log.attach_bar(progress_bar(images.len()));

    for path in images {
        if let Some(bar) = log.bar() {
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }

        if handle_image(path, dest, log) {
            stats.record_copied();
        } else {
            stats.record_skipped();
        }

        if let Some(bar) = log.bar() {
            bar.inc(1);
        }
        for line in stats.progress_lines() {
            log.line(line);
        }
    }

    if let Some(bar) = log.detach_bar() {
        bar.finish_and_clear();
    }
    for line in stats.summary_lines() {
        log.line(line);
    }
    stats
}

/// Rename and copy one file. `false` means it was skipped.
fn handle_image(path: &Path, dest: &Path, log: &mut RunLog) -> bool {
    let new_name = match metadata::prefixed_name(path) {
        Ok(name) => name,
        Err(e) => {
            log.line(format_args!(
                "An error occurred while processing {}: {}",
                path.display(),
                e
            ));
            return false;
        }
    };

    match transfer::place_image(path, &new_name, dest) {
        Ok(Placement::Copied(target)) => {
            log::debug!("copied {:?} -> {:?}", path, target);
            true
        }
        Ok(Placement::AlreadyExists(target)) => {
            log.line(format_args!(
                "File already exists and will be skipped: {}",
                target.display()
            ));
            false
        }
        Err(e) => {
            log.line(format_args!(
                "An error occurred while copying {}: {}",
                path.display(),
                e
            ));
            false
        }
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::default_bar().template("{pos}/{len} {wide_bar} {msg}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}
