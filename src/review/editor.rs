//! Editing a message in the user's external editor.

use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;

use tempfile::Builder;
use tracing::{debug, warn};

use crate::error::ReviewError;

/// Editor used when `$EDITOR` is unset or empty.
pub const DEFAULT_EDITOR: &str = "vim";

/// The editor command from `$EDITOR`, or [`DEFAULT_EDITOR`].
pub fn editor_command() -> String {
    match env::var("EDITOR") {
        Ok(editor) if !editor.trim().is_empty() => editor,
        _ => DEFAULT_EDITOR.to_string(),
    }
}

/// Open `message` in `editor` and return the saved content, trimmed.
///
/// `editor` is split on whitespace so values like `code --wait` work. The
/// call blocks until the editor exits. The temp file is removed on return.
pub fn edit_in_editor(message: &str, editor: &str) -> Result<String, ReviewError> {
    let mut file = Builder::new()
        .prefix("gemmit-")
        .suffix(".md")
        .tempfile()
        .map_err(ReviewError::TempFile)?;
    file.write_all(message.as_bytes())
        .map_err(ReviewError::TempFile)?;
    file.flush().map_err(ReviewError::TempFile)?;

    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(DEFAULT_EDITOR);

    debug!("Launching editor {} on {}", editor, file.path().display());

    let status = Command::new(program)
        .args(parts)
        .arg(file.path())
        .status()
        .map_err(|e| ReviewError::EditorSpawnFailed {
            editor: editor.to_string(),
            source: e,
        })?;

    if !status.success() {
        warn!("Editor '{}' exited with {}", editor, status);
    }

    let edited = fs::read_to_string(file.path()).map_err(ReviewError::TempFile)?;
    Ok(edited.trim().to_string())
}
