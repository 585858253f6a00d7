//! File helpers for generated artifacts
//!
//! Public artifacts (CSRs) are written directly. Private keys are written to a
//! temporary sibling that only the owner can read and renamed into place.

use log::{info, warn};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Create `dir` and any missing parents.
///
/// Returns `true` when the directory did not exist and was created.
///
/// # Errors
///
/// Returns an I/O error if the path exists but is not a directory, or if the
/// directory cannot be created.
pub async fn ensure_directory(dir: &Path) -> io::Result<bool> {
    match fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Ok(false),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dir.display()),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).await?;
            info!("Created output directory {}", dir.display());
            Ok(true)
        }
        Err(e) => Err(e),
    }
}

/// Write a public artifact, replacing any existing file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub async fn write_public_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents).await
}

/// Write private key material.
///
/// The data goes to a freshly created `<path>.tmp` and is renamed over `path`,
/// so a crash never leaves a truncated key behind. On Unix the temporary file
/// is created with mode `0600` and never through an existing link.
///
/// # Errors
///
/// Returns an I/O error if the temporary file cannot be created, written or
/// renamed. The temporary file is removed on every failure.
pub async fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(path);

    let mut file = match create_private(&temp_path).await {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            // Stale temp entry; remove_file unlinks a symlink itself, not its target
            warn!("Removing stale temporary file {}", temp_path.display());
            fs::remove_file(&temp_path).await?;
            create_private(&temp_path).await?
        }
        Err(e) => return Err(e),
    };

    let written = async {
        file.write_all(contents).await?;
        file.sync_all().await
    }
    .await;
    drop(file);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e);
    }

    Ok(())
}

async fn create_private(path: &Path) -> io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600); // rw-------
    options.open(path).await
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
