use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every directory under `root` (including `root` itself) whose name is exactly `name`.
///
/// The walk is sorted by file name at every level so the result does not
/// depend on the platform's directory listing order.
pub fn find_named_dirs(root: &Path, name: &str) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.file_name() == name {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Regular files directly inside `dir`, sorted by path.
pub fn files_in(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
