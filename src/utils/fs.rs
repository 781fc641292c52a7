use crate::error::BumpError;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn io_error(path: &Path, source: std::io::Error) -> BumpError {
    BumpError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads and parses a JSON document.
pub async fn read_json(path: &Path) -> Result<Value, BumpError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| io_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| BumpError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Renders a document with two-space indentation and a single trailing newline.
pub fn to_pretty_json(doc: &Value) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}

/// Overwrites `path` with the pretty-printed document.
///
/// The content goes to a temporary file next to the real target and is then
/// renamed over it, so the target is either the old or the new document.
/// A symlinked `path` keeps pointing at its target, and an existing file keeps
/// its permissions.
pub async fn write_json_pretty(path: &Path, doc: &Value) -> Result<(), BumpError> {
    let content = to_pretty_json(doc).map_err(|e| BumpError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let target = match tokio::fs::canonicalize(path).await {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(io_error(path, e)),
    };
    let permissions = tokio::fs::metadata(&target)
        .await
        .ok()
        .map(|meta| meta.permissions());

    let tmp = temp_sibling(&target);
    if let Err(e) = replace_with(&tmp, &target, content, permissions).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(io_error(path, e));
    }
    Ok(())
}

async fn replace_with(
    tmp: &Path,
    target: &Path,
    content: String,
    permissions: Option<std::fs::Permissions>,
) -> std::io::Result<()> {
    tokio::fs::write(tmp, content).await?;
    if let Some(permissions) = permissions {
        tokio::fs::set_permissions(tmp, permissions).await?;
    }
    tokio::fs::rename(tmp, target).await
}

/// Returns true if a regular file exists at `path`.
pub async fn is_file(path: &Path) -> Result<bool, BumpError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error(path, e)),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
