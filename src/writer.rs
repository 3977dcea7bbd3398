//! Flat-file persistence of exported documents
//!
//! One file per dataset, named by [`filename_for`](crate::types::filename_for).
//! The default open mode is append (see
//! [`ExistingFileAction`](crate::config::ExistingFileAction)): re-running an
//! export over the same identifier concatenates documents in one file, which
//! is kept as the historical default rather than silently changed.

use crate::config::ExistingFileAction;
use crate::error::Result;
use crate::types::filename_for;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes exported documents to individual files under an output directory
///
/// The output directory must already exist and be writable; it is never
/// created, cleaned up, or deduplicated by this writer.
#[derive(Clone, Debug)]
pub struct DocumentWriter {
    output_dir: PathBuf,
    on_existing: ExistingFileAction,
}

impl DocumentWriter {
    /// Create a writer for the given output directory and collision policy
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, on_existing: ExistingFileAction) -> Self {
        Self {
            output_dir: output_dir.into(),
            on_existing,
        }
    }

    /// The directory this writer persists documents into
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `document` as compact JSON text to the file derived from
    /// `persistent_id`, returning the path written (or skipped).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the output directory is
    /// missing or not writable, and
    /// [`Error::Serialization`](crate::Error::Serialization) if the document
    /// cannot be serialized.
    pub fn write(&self, document: &Value, persistent_id: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(filename_for(persistent_id));
        let text = serde_json::to_string(document)?;

        if self.on_existing == ExistingFileAction::Skip && path.exists() {
            warn!(path = %path.display(), persistent_id, "output file exists, skipping write");
            return Ok(path);
        }

        let mut file = match self.on_existing {
            ExistingFileAction::Append | ExistingFileAction::Skip => {
                OpenOptions::new().create(true).append(true).open(&path)?
            }
            ExistingFileAction::Overwrite => OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)?,
        };
        file.write_all(text.as_bytes())?;

        debug!(path = %path.display(), bytes = text.len(), "wrote exported document");
        Ok(path)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn write_creates_file_named_after_identifier() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DocumentWriter::new(temp_dir.path(), ExistingFileAction::Append);

        let path = writer
            .write(&json!({"name": "x"}), "doi:10.1/ABC123")
            .unwrap();

        assert_eq!(path, temp_dir.path().join("doi:10.1-ABC123.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"name":"x"}"#);
    }

    #[test]
    fn append_concatenates_across_writes() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DocumentWriter::new(temp_dir.path(), ExistingFileAction::Append);

        writer.write(&json!({"run": 1}), "doi:10.1/A").unwrap();
        let path = writer.write(&json!({"run": 2}), "doi:10.1/A").unwrap();

        // The historical behavior: two documents back to back in one file
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"run":1}{"run":2}"#
        );
    }

    #[test]
    fn overwrite_replaces_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DocumentWriter::new(temp_dir.path(), ExistingFileAction::Overwrite);

        writer.write(&json!({"run": 1}), "doi:10.1/A").unwrap();
        let path = writer.write(&json!({"run": 2}), "doi:10.1/A").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"run":2}"#);
    }

    #[test]
    fn skip_leaves_existing_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DocumentWriter::new(temp_dir.path(), ExistingFileAction::Skip);

        writer.write(&json!({"run": 1}), "doi:10.1/A").unwrap();
        let path = writer.write(&json!({"run": 2}), "doi:10.1/A").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"run":1}"#,
            "skip must not modify the first write"
        );
    }

    #[test]
    fn skip_still_writes_when_file_is_new() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DocumentWriter::new(temp_dir.path(), ExistingFileAction::Skip);

        let path = writer.write(&json!({"run": 1}), "doi:10.1/A").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"run":1}"#);
    }

    #[test]
    fn write_fails_when_output_directory_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let writer = DocumentWriter::new(&missing, ExistingFileAction::Append);

        let err = writer.write(&json!({}), "doi:10.1/A").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn distinct_identifiers_land_in_distinct_files() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DocumentWriter::new(temp_dir.path(), ExistingFileAction::Append);

        writer.write(&json!({"a": 1}), "doi:10.1/A").unwrap();
        writer.write(&json!({"b": 2}), "doi:10.1/B").unwrap();

        assert!(temp_dir.path().join("doi:10.1-A.json").exists());
        assert!(temp_dir.path().join("doi:10.1-B.json").exists());
    }
}
