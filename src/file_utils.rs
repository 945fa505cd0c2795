use anyhow::{anyhow, Context, Result};
use chrono::Local;
use log::{debug, warn};
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Find files under `dir` whose file name ends with one of `suffixes`.
    /// Results are ordered by directory walk with file names sorted.
    ///
    /// Symbolic links are not followed into directories; a link is kept only
    /// when it resolves to a regular file. Entries that cannot be read, such
    /// as unreadable subdirectories, are logged and skipped.
    pub fn find_files_with_suffixes<P: AsRef<Path>>(dir: P, suffixes: &[String]) -> Result<Vec<PathBuf>> {
        let result = WalkDir::new(dir.as_ref())
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .filter(|entry| {
                entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
            })
            .filter(|entry| {
                let name = entry.file_name().to_string_lossy();
                suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
            })
            .map(|entry| entry.into_path())
            .collect();

        Ok(result)
    }

    /// Destination of `file` when its path relative to `root` is re-rooted
    /// under `dest_root`
    pub fn relocated_path<P1: AsRef<Path>, P2: AsRef<Path>, P3: AsRef<Path>>(
        file: P1,
        root: P2,
        dest_root: P3,
    ) -> Result<PathBuf> {
        let file = file.as_ref();
        let relative = file
            .strip_prefix(root.as_ref())
            .with_context(|| format!("{:?} is not under {:?}", file, root.as_ref()))?;
        Ok(dest_root.as_ref().join(relative))
    }

    /// Move `file` from under `root` to the same relative location under
    /// `dest_root`, creating parent directories. Either the file ends up at
    /// the destination and is gone from the source, or the source is left
    /// untouched.
    pub fn move_preserving_structure<P1: AsRef<Path>, P2: AsRef<Path>, P3: AsRef<Path>>(
        file: P1,
        root: P2,
        dest_root: P3,
    ) -> Result<PathBuf> {
        let file = file.as_ref();
        let destination = Self::relocated_path(file, root, dest_root)?;

        if destination.exists() {
            return Err(anyhow!("Destination already exists: {:?}", destination));
        }
        if let Some(parent) = destination.parent() {
            Self::ensure_dir(parent)?;
        }

        if fs::rename(file, &destination).is_ok() {
            return Ok(destination);
        }

        // rename fails across file systems; fall back to copy + remove
        debug!("Rename failed, copying {:?} to {:?}", file, destination);
        fs::copy(file, &destination)
            .with_context(|| format!("Failed to copy {:?} to {:?}", file, destination))?;

        if let Err(e) = fs::remove_file(file) {
            if let Err(cleanup) = fs::remove_file(&destination) {
                warn!("Failed to remove partial copy {:?}: {}", destination, cleanup);
            }
            return Err(anyhow!("Failed to remove source {:?} after copy: {}", file, e));
        }

        Ok(destination)
    }

    /// Append content to a log file with timestamp
    pub fn append_to_log_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Get current timestamp
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        // Open file in append mode, create if it doesn't exist
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {:?}", path.as_ref()))?;

        writeln!(file, "[{}] {}", timestamp, content)
            .with_context(|| format!("Failed to write to log file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
