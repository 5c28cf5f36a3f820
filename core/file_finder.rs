use crate::CoreError;
use crate::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions picked up while walking a folder. Compared case-sensitively.
pub const VALID_EXTENSIONS: &[&str] = &["html", "hbs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

pub fn resolve_target(path: &Path) -> Result<Target, CoreError> {
    if path.is_file() {
        Ok(Target::File(path.to_path_buf()))
    } else if path.is_dir() {
        Ok(Target::Directory(path.to_path_buf()))
    } else {
        Err(CoreError::InvalidPath(path.to_path_buf()))
    }
}

/// Lists the files a run will visit. An explicitly named file is returned as is,
/// whatever its extension; a folder is walked and filtered by [`VALID_EXTENSIONS`].
pub fn find_files(config: &Config) -> Result<Vec<PathBuf>, CoreError> {
    match resolve_target(&config.path)? {
        Target::File(p) => Ok(vec![p]),
        Target::Directory(root) => Ok(walk_directory(&root)),
    }
}

fn walk_directory(root: &Path) -> Vec<PathBuf> {
    let mut f = Vec::new();
    for i in WalkDir::new(root).follow_links(false) {
        match i {
            Ok(e) => {
                if is_target_entry(&e) {
                    f.push(e.into_path());
                } else {
                    log::trace!("Skipping {}", e.path().display());
                }
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
            }
        }
    }
    f.sort();
    log::debug!("Found {} candidate files under {}", f.len(), root.display());
    f
}

fn is_target_entry(e: &DirEntry) -> bool {
    let ft = e.file_type();
    let is_file = ft.is_file()
        || (ft.is_symlink() && fs::metadata(e.path()).is_ok_and(|m| m.is_file()));
    is_file && has_valid_extension(e.path())
}

pub fn has_valid_extension(p: &Path) -> bool {
    match p.extension() {
        Some(x) => VALID_EXTENSIONS.iter().any(|v| x == *v),
        None => false,
    }
}
