//! Atomic file writes.
//!
//! Content goes to a sibling temp file, is synced to disk, then renamed
//! over the target. A crash at any point leaves the previous file intact.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

/// Write `content` to `path` atomically.
///
/// Creates the parent directory if needed.
///
/// # Errors
///
/// Returns an error if any file operation fails. The target is untouched
/// in that case.
pub fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    write_via_temp(path, content, None)
}

/// Like [`atomic_write`], but the file is only readable by its owner.
///
/// Used for files holding credentials.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write_private(path: &Path, content: &str) -> std::io::Result<()> {
    write_via_temp(path, content, Some(0o600))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("getpkt"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_via_temp(path: &Path, content: &str, mode: Option<u32>) -> std::io::Result<()> {
    write_with(path, mode, |writer| writer.write_all(content.as_bytes()))
}

/// Fill a temp file with `fill`, sync it and rename it over `path`.
/// The temp file is removed whenever a step after its creation fails.
#[cfg_attr(not(unix), allow(unused_variables))]
fn write_with<F>(path: &Path, mode: Option<u32>, fill: F) -> std::io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let temp_path = temp_path(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    if let Some(mode) = mode {
        opts.mode(mode);
    }
    let file = opts.open(&temp_path)?;

    let result = finish(BufWriter::new(file), fill).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn finish<F>(mut writer: BufWriter<File>, fill: F) -> std::io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    fill(&mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
