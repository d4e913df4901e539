//! The `saveFile` command: materialize a base64 payload as a file in the scratch directory.

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};
use uuid::Uuid;

use crate::command::{CommandHandler, Parameters};
use crate::decode::decode_file_payload;
use crate::errors::{Error, Result};
use crate::temp_dir::{EnvTempDir, TempDirProvider};

/// Shortest usable scratch directory path. Anything shorter (e.g. a bare drive-letter
/// fragment) is treated as unresolved.
const MIN_TEMP_DIR_LEN: usize = 3;

/// Decodes the base64 `file` parameter and writes it to `<temp-dir>/<uuid>.txt`.
///
/// The success value carries the generated identifier and the written path so the caller can
/// reference the file in later commands. Every error path leaves the filesystem untouched:
/// the write happens only after the parameter is validated, the payload decoded, and the
/// scratch directory resolved.
pub struct SaveFileHandler {
    temp_dir: Box<dyn TempDirProvider>,
}

impl SaveFileHandler {
    /// Handler that resolves the scratch directory from the process environment.
    pub fn new() -> Self {
        Self {
            temp_dir: Box::new(EnvTempDir),
        }
    }

    /// Handler with an explicit temp-directory provider (configuration override, tests).
    pub fn with_provider(provider: Box<dyn TempDirProvider>) -> Self {
        Self { temp_dir: provider }
    }

    fn resolve_output_dir(&self) -> Result<PathBuf> {
        let dir = self
            .temp_dir
            .resolve_temp_dir()
            .ok_or(Error::TempDirUnavailable)?;
        if dir.as_os_str().len() < MIN_TEMP_DIR_LEN {
            return Err(Error::TempDirUnavailable);
        }
        Ok(dir)
    }
}

impl Default for SaveFileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for SaveFileHandler {
    fn execute(&self, parameters: &Parameters) -> Result<Value> {
        tracing::trace!("entering saveFile handler");

        let file_value = parameters.get("file").ok_or_else(|| Error::MissingParameter {
            name: "file".to_string(),
        })?;
        // A non-text value carries no decodable payload, same as empty text
        let file_in_base64 = file_value.as_str().unwrap_or("");
        if file_in_base64.is_empty() {
            return Err(Error::EmptyFileParameter);
        }

        let decoded = decode_file_payload(file_in_base64)?;

        let output_dir = self.resolve_output_dir()?;
        tracing::debug!(dir = %output_dir.display(), "resolved temporary folder");

        let file_id = Uuid::new_v4();
        let output_path = output_dir.join(format!("{file_id}.txt"));

        fs::write(&output_path, &decoded).map_err(|source| Error::Io {
            operation: format!("write {}", output_path.display()),
            source,
        })?;

        tracing::info!(
            file_id = %file_id,
            path = %output_path.display(),
            bytes = decoded.len(),
            "wrote file payload"
        );

        Ok(json!({
            "id": file_id.to_string(),
            "path": output_path.display().to_string(),
        }))
    }
}
