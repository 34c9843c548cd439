//! Append-only line writer that rotates by size.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the active file is rotated.
pub const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;

/// Rotated files kept next to the active one.
pub const BACKUPS_KEPT: usize = 3;

/// Line writer for a single trace file.
///
/// The handle is opened lazily. Before each append the file size is checked;
/// once it exceeds the limit the file is renamed to
/// `<name>.<UTC timestamp>` and the oldest backups past the retention count
/// are removed.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    keep: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Writer with the default limits: 5 MiB and three backups.
    ///
    /// Nothing is opened until the first [`RotatingFile::append`].
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, ROTATE_AT_BYTES, BACKUPS_KEPT)
    }

    /// Writer rotating above `max_bytes` and keeping `keep` backups.
    ///
    /// # Parameters
    ///
    /// * `path` - Active file; backups are created next to it
    /// * `max_bytes` - Size above which the next append rotates
    /// * `keep` - Number of backups retained after pruning
    pub const fn with_limits(path: PathBuf, max_bytes: u64, keep: usize) -> Self {
        Self {
            path,
            max_bytes,
            keep,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// Rotates first if the file has grown past the limit, and opens the file
    /// if no handle is held yet.
    ///
    /// # Parameters
    ///
    /// * `line` - One serialized record, without trailing newline
    ///
    /// # Returns
    ///
    /// - `Ok(())` once the line is flushed
    /// - `Err(io::Error)` on failure
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening or writing the file fails, or if the lock
    /// was poisoned.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    /// Renames the active file to `<name>.<timestamp>` and prunes backups.
    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.9f");
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));
        fs::rename(&self.path, PathBuf::from(backup))?;

        self.prune()
    }

    /// Deletes backups beyond the retention count, oldest first.
    ///
    /// Timestamps sort lexically, so name order is age order.
    fn prune(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let prefix = match self.path.file_name().and_then(|n| n.to_str()) {
            Some(name) => format!("{name}."),
            None => return Ok(()),
        };

        let mut backups = backups_in(dir, &prefix)?;
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.keep) {
            if let Err(e) = fs::remove_file(stale) {
                tracing::warn!(path = %stale.display(), error = %e, "could not remove old trace backup");
            }
        }

        Ok(())
    }
}

fn backups_in(dir: &Path, prefix: &str) -> io::Result<Vec<PathBuf>> {
    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let file = RotatingFile::new(path.clone());

        file.append("{\"a\":1}").unwrap();
        file.append("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn poisoned_lock_is_reported_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = std::sync::Arc::new(RotatingFile::new(dir.path().join("spans.json")));

        let holder = std::sync::Arc::clone(&file);
        let _ = std::thread::spawn(move || {
            let _guard = holder.handle.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = file.append("line").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(err.to_string().contains("poisoned"));
    }

    #[test]
    fn rotates_once_over_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let file = RotatingFile::with_limits(path.clone(), 8, 3);

        file.append("0123456789").unwrap();
        file.append("next").unwrap();

        let names = names(dir.path());
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], "spans.json");
        assert!(names[1].starts_with("spans.json."));
        assert_eq!(fs::read_to_string(path).unwrap(), "next\n");
    }

    #[test]
    fn keeps_only_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        for stamp in ["20000101T000000.1", "20000101T000000.2", "20000101T000000.3"] {
            fs::write(dir.path().join(format!("spans.json.{stamp}")), "old\n").unwrap();
        }
        fs::write(dir.path().join("unrelated.json"), "keep\n").unwrap();

        let file = RotatingFile::with_limits(path, 2, 2);
        file.append("long enough").unwrap();
        file.append("after").unwrap();

        let names = names(dir.path());
        assert_eq!(names.len(), 4, "{names:?}");
        assert!(!names.contains(&"spans.json.20000101T000000.1".to_string()));
        assert!(!names.contains(&"spans.json.20000101T000000.2".to_string()));
        assert!(names.contains(&"spans.json.20000101T000000.3".to_string()));
        assert!(names.contains(&"unrelated.json".to_string()));
    }
}
