use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::ScaffoldOptions;

/// Directories every project gets, relative to its root
pub const BASE_DIRECTORIES: [&str; 6] = [
    "backend/config",
    "backend/controllers",
    "backend/models",
    "backend/routes",
    "frontend/src",
    "frontend/public",
];

pub const SHARED_UTILS_DIRECTORY: &str = "shared/utils";

pub fn directories(options: &ScaffoldOptions) -> Vec<&'static str> {
    let mut dirs = BASE_DIRECTORIES.to_vec();
    if options.include_shared_utils_dir {
        dirs.push(SHARED_UTILS_DIRECTORY);
    }
    dirs
}

/// Create the fixed directory tree below `root`.
///
/// Existing directories are left alone. Nothing is rolled back when a later
/// directory fails.
pub fn create_folder_structure(root: &Path, options: &ScaffoldOptions) -> Result<()> {
    info!("Creating project folder structure...");
    for dir in directories(options) {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("cannot create directory {}", path.display()))?;
        debug!("created {}", path.display());
    }
    info!("Folder structure created successfully!");
    Ok(())
}
