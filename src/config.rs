//! Configuration types for dataverse-export

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// How to handle an output file left behind by a previous run
///
/// Historically the exporter opened output files in append mode, so
/// re-running against the same output directory concatenated the new
/// document after the old one in the same file — producing a file that is
/// no longer valid JSON. That behavior is kept as the default rather than
/// silently changed; pick [`Overwrite`](ExistingFileAction::Overwrite) or
/// [`Skip`](ExistingFileAction::Skip) to opt out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingFileAction {
    /// Append the new document after any existing content (default)
    #[default]
    Append,
    /// Truncate the existing file and replace its content
    Overwrite,
    /// Leave the existing file untouched and skip the write
    Skip,
}

/// Main configuration for the exporter
///
/// Constructed once by the embedding application and passed by value into
/// [`ExportClient::new`](crate::ExportClient::new) or
/// [`Exporter::new`](crate::Exporter::new). Nothing here is process-global.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Dataverse installation
    /// (e.g., "https://dataverse.example.org"; a trailing slash is tolerated)
    pub base_url: String,

    /// API token sent as the `key` query parameter on authenticated calls
    ///
    /// Both the listing and the export endpoints request authentication, so
    /// leaving this unset makes those calls fail with an authorization error.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Directory exported documents are written to (default: "./exports")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// What to do when the output file for a dataset already exists
    #[serde(default)]
    pub on_existing: ExistingFileAction,

    /// Per-request timeout (default: None = no timeout)
    ///
    /// The upstream service configures no timeout, so none is applied unless
    /// set here. Without one, a hung call blocks the entire run.
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_token: None,
            output_dir: default_output_dir(),
            on_existing: ExistingFileAction::default(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Root of the native API: `{base_url}/api`, tolerating a trailing slash
    /// on the configured base.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL is empty or is not an
    /// absolute `http`/`https` URL.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config {
                message: "base_url must not be empty".to_string(),
                key: Some("base_url".to_string()),
            });
        }
        let parsed = url::Url::parse(&self.base_url).map_err(|e| Error::Config {
            message: format!("base_url is not a valid URL: {}", e),
            key: Some("base_url".to_string()),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config {
                message: format!("base_url must use http or https, got {}", parsed.scheme()),
                key: Some("base_url".to_string()),
            });
        }
        Ok(())
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./exports")
}
