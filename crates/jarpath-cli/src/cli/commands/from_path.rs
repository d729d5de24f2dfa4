//! `jarpath from-path <path> [--dir]` – filesystem path to `file:` locator.

use anyhow::{Context, Result};
use jarpath_core::Locator;
use std::path::Path;

pub(super) fn locator_for_path(path: &Path, dir: bool) -> Result<Locator> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("current directory")?
            .join(path)
    };
    Ok(Locator::from_file_path(&absolute, dir)?)
}

pub fn run_from_path(path: &Path, dir: bool) -> Result<()> {
    let locator = locator_for_path(path, dir)?;
    println!("{locator}");
    Ok(())
}
