use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_SOURCE: &str = "source";
const DEFAULT_DEST_SUBDIR: &str = "processed_images";

#[derive(Parser, Debug)]
#[command(name = "image-date-prefix", version)]
#[command(about = "Copy images into a destination folder, prefixing each name with its creation date")]
pub struct Args {
    /// Folder containing the images
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Folder the renamed copies go to (default: <source>/processed_images)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Folders {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl Args {
    pub fn dest_or_default(&self) -> PathBuf {
        self.dest
            .clone()
            .unwrap_or_else(|| self.source.join(DEFAULT_DEST_SUBDIR))
    }

    /// Validate the source folder and make sure the destination exists.
    pub fn resolve(&self) -> Result<Folders> {
        if !self.source.is_dir() {
            anyhow::bail!("Invalid source folder path.");
        }

        let dest = self.dest_or_default();
        std::fs::create_dir_all(&dest)
            .with_context(|| format!("could not create destination {}", dest.display()))?;
        log::debug!("source={:?} dest={:?}", self.source, dest);

        Ok(Folders {
            source: self.source.clone(),
            dest,
        })
    }
}
