//! Pipeline orchestration: list, fetch, persist
//!
//! Datasets are processed strictly one at a time, in listing order. The
//! first failure aborts the remainder of the run; files already written for
//! earlier datasets stay on disk (no rollback).

use crate::client::ExportClient;
use crate::config::Config;
use crate::error::Result;
use crate::format::ExportFormat;
use crate::writer::DocumentWriter;
use tracing::info;

/// The full export pipeline over one configuration
///
/// Owns an [`ExportClient`] for the network side and a [`DocumentWriter`]
/// for the filesystem side; no state is retained across runs.
#[derive(Clone, Debug)]
pub struct Exporter {
    client: ExportClient,
    writer: DocumentWriter,
}

impl Exporter {
    /// Build client and writer from one configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the configuration
    /// is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let writer = DocumentWriter::new(config.output_dir.clone(), config.on_existing);
        let client = ExportClient::new(config)?;
        Ok(Self { client, writer })
    }

    /// The underlying API client (e.g., for a startup status check)
    #[must_use]
    pub fn client(&self) -> &ExportClient {
        &self.client
    }

    /// Export every dataset directly contained in the named collection
    ///
    /// Sub-collections are not descended into. Returns the persistent
    /// identifiers that were exported, in listing order.
    ///
    /// # Errors
    ///
    /// Propagates the first listing, fetch, or write failure and halts;
    /// datasets after the failing one are not attempted.
    pub async fn export_collection(
        &self,
        collection: &str,
        format: ExportFormat,
    ) -> Result<Vec<String>> {
        let ids: Vec<String> = self
            .client
            .find_datasets(collection)
            .await?
            .iter()
            .map(ToString::to_string)
            .collect();
        info!(collection, datasets = ids.len(), "starting collection export");
        self.export_many(&ids, format).await?;
        Ok(ids)
    }

    /// Export the datasets named by `ids`, in order
    ///
    /// An empty list is a no-op: no network calls, no files written.
    ///
    /// # Errors
    ///
    /// Propagates the first fetch or write failure and halts.
    pub async fn export_many(&self, ids: &[String], format: ExportFormat) -> Result<()> {
        for id in ids {
            self.export_one(id, format).await?;
        }
        info!(datasets = ids.len(), "export run complete");
        Ok(())
    }

    /// Export a single dataset by persistent identifier, skipping the
    /// listing step
    ///
    /// # Errors
    ///
    /// Propagates fetch failures ([`Error::ExportFailed`](crate::Error::ExportFailed)
    /// for a non-2xx response) and write failures; nothing is written when
    /// the fetch fails.
    pub async fn export_one(&self, persistent_id: &str, format: ExportFormat) -> Result<()> {
        let document = self.client.fetch_export(persistent_id, format).await?;
        let path = self.writer.write(&document, persistent_id)?;
        info!(persistent_id, path = %path.display(), "exported dataset");
        Ok(())
    }
}
