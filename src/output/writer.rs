use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Output path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write a finished document, creating or replacing the file at `path`.
///
/// An existing target (or symlink) is overwritten in place so its permissions,
/// ownership and link stay as they are. A new file is written to a hidden
/// sibling first and renamed into place, so it never appears half written.
pub fn write_document(path: &Path, html: &str) -> Result<(), WriteError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| WriteError::InvalidPath(path.to_path_buf()))?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(WriteError::MissingDirectory(parent.to_path_buf()));
    }

    let result = if fs::symlink_metadata(path).is_ok() {
        fs::write(path, html)
    } else {
        write_staged(parent, file_name, path, html)
    };

    result.map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

fn write_staged(parent: &Path, file_name: &OsStr, path: &Path, html: &str) -> io::Result<()> {
    let mut staging_name = OsString::from(".");
    staging_name.push(file_name);
    staging_name.push(".partial");
    let staging = parent.join(staging_name);

    let result = fs::write(&staging, html).and_then(|_| fs::rename(&staging, path));
    if result.is_err() && staging.exists() {
        if let Err(e) = fs::remove_file(&staging) {
            tracing::warn!("Could not remove {}: {}", staging.display(), e);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_and_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");

        write_document(&path, "<p>first</p>").unwrap();
        write_document(&path, "<p>second</p>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>second</p>");
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.html");

        let err = write_document(&path, "x").unwrap_err();
        assert!(matches!(err, WriteError::MissingDirectory(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_target_is_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();

        let err = write_document(&target, "x").unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_is_followed() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real.html");
        let link = dir.path().join("link.html");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_document(&link, "new").unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_target_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("locked.html");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users may write regardless of mode bits
        let writable = fs::OpenOptions::new().write(true).open(&path).is_ok();
        let result = write_document(&path, "new");

        if writable {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(WriteError::Io { .. })));
            assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        }
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o444);
    }
}
