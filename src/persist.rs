//! Writing fetched lists to disk and reading them back

use crate::error::PersistError;
use std::path::Path;

/// Overwrite `path` with `content` exactly as given (create or truncate)
///
/// The write is not staged through a temporary file: a crash mid-write can leave a
/// truncated file behind.
pub async fn write_bytes(path: &Path, content: &[u8]) -> Result<(), PersistError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Overwrite `path` with `content` encoded as UTF-8 (create or truncate)
pub async fn write_text(path: &Path, content: &str) -> Result<(), PersistError> {
    write_bytes(path, content.as_bytes()).await
}

/// Read a persisted file back as text, returning `None` if it does not exist
///
/// Invalid UTF-8 sequences are replaced rather than rejected; callers only count lines.
pub async fn read_text(path: &Path) -> Result<Option<String>, PersistError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(PersistError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
