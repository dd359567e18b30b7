use crate::{Result, StackError};
use std::path::Path;
use tracing::debug;

/// Reads the pipeline template. The body is passed to the stack provider untouched.
pub async fn load_template(path: &Path) -> Result<String> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StackError::Template {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded template {} ({} bytes)", path.display(), body.len());

    Ok(body)
}
