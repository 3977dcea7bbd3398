//! HTTP client for the Dataverse native API
//!
//! Thin wrapper over one GET endpoint family: authenticated requests carry
//! the API token as the `key` query parameter, success is any status in
//! [200, 299], and there is no retry.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::ExportFormat;
use crate::types::{ContentsResponse, PersistentId};
use tracing::debug;
use url::Url;

/// Client for the listing and export endpoints of a Dataverse installation
#[derive(Clone, Debug)]
pub struct ExportClient {
    config: Config,
    http: reqwest::Client,
}

impl ExportClient {
    /// Create a client from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid, or
    /// [`Error::Network`] if the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::Network)?;
        Ok(Self { config, http })
    }

    /// The configuration this client was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the query string for a metadata export call
    ///
    /// Kept as a standalone builder so custom queries stay flexible:
    /// `datasets/export?exporter={format}&persistentId={id}`.
    #[must_use]
    pub fn export_query_string(persistent_id: &str, format: ExportFormat) -> String {
        format!(
            "datasets/export?exporter={}&persistentId={}",
            format.wire_token(),
            persistent_id
        )
    }

    /// Issue one GET against `{base}/api/{query}`
    ///
    /// When `auth` is set the configured token is appended as the `key`
    /// query parameter; requesting auth without a configured token is an
    /// error, reported before any request is sent.
    async fn get_request(&self, query: &str, auth: bool) -> Result<reqwest::Response> {
        let raw = format!("{}/{}", self.config.api_url(), query);
        let mut url = Url::parse(&raw).map_err(|e| Error::Config {
            message: format!("cannot build request URL {}: {}", raw, e),
            key: Some("base_url".to_string()),
        })?;

        if auth {
            match &self.config.api_token {
                Some(token) => {
                    url.query_pairs_mut().append_pair("key", token);
                }
                None => return Err(Error::Authorization { url: raw }),
            }
        }

        // `raw` has no token in it, safe to log and to put in errors
        debug!(url = %raw, auth, "issuing GET request");

        self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                Error::Connection {
                    url: raw,
                    source: e,
                }
            } else {
                Error::Network(e)
            }
        })
    }

    /// Query the service status banner (GET `info/version`)
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx response.
    pub async fn status(&self) -> Result<String> {
        let operation = "info/version";
        let resp = self.get_request(operation, false).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::ApiCall {
                operation: operation.to_string(),
                status: status.as_u16(),
            });
        }
        let body: serde_json::Value = resp.json().await?;
        Ok(body
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("UNKNOWN")
            .to_string())
    }

    /// List the datasets directly contained in the named collection
    ///
    /// Entries typed `"dataverse"` are sub-collections and are silently
    /// skipped, never recursed into; everything else is treated as a dataset
    /// and must carry the three identifier components. Order follows the
    /// server response.
    ///
    /// # Errors
    ///
    /// Fails on missing token, transport errors, a non-2xx response, or a
    /// dataset entry with missing identifier components.
    pub async fn find_datasets(&self, collection: &str) -> Result<Vec<PersistentId>> {
        let operation = format!("dataverses/{}/contents", collection);
        let resp = self.get_request(&operation, true).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::ApiCall {
                operation,
                status: status.as_u16(),
            });
        }

        let body: ContentsResponse = resp.json().await?;
        let mut dataset_ids = Vec::new();
        for entry in &body.data {
            if entry.object_type == "dataverse" {
                continue;
            }
            let id = entry.persistent_id().ok_or_else(|| Error::UnexpectedResponse {
                operation: operation.clone(),
                message: format!(
                    "entry of type {:?} is missing protocol/authority/identifier",
                    entry.object_type
                ),
            })?;
            dataset_ids.push(id);
        }
        debug!(
            collection,
            datasets = dataset_ids.len(),
            entries = body.data.len(),
            "listed collection contents"
        );
        Ok(dataset_ids)
    }

    /// Fetch the exported metadata document for one dataset
    ///
    /// The document is returned as parsed JSON and is otherwise opaque;
    /// persistence is a separate step.
    ///
    /// # Errors
    ///
    /// Fails on missing token, transport errors, or a non-2xx response
    /// (reported as [`Error::ExportFailed`] naming the dataset).
    pub async fn fetch_export(
        &self,
        persistent_id: &str,
        format: ExportFormat,
    ) -> Result<serde_json::Value> {
        let query = Self::export_query_string(persistent_id, format);
        let resp = self.get_request(&query, true).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::ExportFailed {
                persistent_id: persistent_id.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}
