//! Loading of the wildcard and subdomain lists.

use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error_handling::InputError;

/// Reads a list file: one entry per line.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// - `InputError::NotFound` if `path` is not an existing regular file
/// - `InputError::Read` if reading fails
pub async fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let is_file = tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let read_error = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = tokio::fs::File::open(path).await.map_err(read_error)?;
    let mut lines = BufReader::new(file).lines();

    let mut entries = Vec::new();
    while let Some(line) = lines.next_line().await.map_err(read_error)? {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            entries.push(trimmed.to_string());
        }
    }
    Ok(entries)
}
