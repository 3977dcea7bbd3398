//! # dataverse-export
//!
//! Batch exporter for dataset metadata held in a Dataverse installation.
//!
//! The crate wraps the Dataverse native API in a small, strictly sequential
//! pipeline: list the datasets directly contained in a named collection,
//! fetch each dataset's exported metadata document in a chosen serialization
//! format, and write each document to its own file on local disk.
//!
//! ## Design Philosophy
//!
//! dataverse-export is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Explicitly configured** - No process-wide state; every client is built
//!   from a [`Config`] value, so multiple configurations coexist in one process
//! - **Predictably sequential** - Datasets are exported one at a time in
//!   listing order, and the first failure aborts the remainder of the run
//!
//! ## Quick Start
//!
//! ```no_run
//! use dataverse_export::{Config, Exporter, ExportFormat};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         base_url: "https://dataverse.example.org".to_string(),
//!         api_token: Some("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx".to_string()),
//!         output_dir: "./exports".into(),
//!         ..Default::default()
//!     };
//!
//!     let exporter = Exporter::new(config)?;
//!     let exported = exporter
//!         .export_collection("liss_dc", ExportFormat::default())
//!         .await?;
//!
//!     println!("exported {} datasets", exported.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// HTTP client for the Dataverse native API
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Pipeline orchestration (list, fetch, persist)
pub mod exporter;
/// Metadata export formats
pub mod format;
/// Persistent identifiers and listing records
pub mod types;
/// Flat-file persistence of exported documents
pub mod writer;

// Re-export commonly used types
pub use client::ExportClient;
pub use config::{Config, ExistingFileAction};
pub use error::{Error, Result};
pub use exporter::Exporter;
pub use format::ExportFormat;
pub use types::PersistentId;
pub use writer::DocumentWriter;
