//! Metadata export formats supported by the Dataverse export API

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A metadata serialization format the server can export
///
/// Closed set: each variant maps to the literal `exporter` token the server
/// expects via [`wire_token`](ExportFormat::wire_token), and unknown tokens
/// are rejected at the boundary by the [`FromStr`] impl. The default is the
/// schema.org flavored JSON-LD export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    /// DDI Codebook XML
    #[serde(rename = "ddi")]
    Ddi,
    /// DDI as served over OAI-PMH
    #[serde(rename = "oai_ddi")]
    OaiDdi,
    /// Dublin Core Terms XML
    #[serde(rename = "dcterms")]
    Dcterms,
    /// Dublin Core as served over OAI-PMH
    #[serde(rename = "oai_dc")]
    OaiDc,
    /// schema.org flavored JSON-LD (the server calls this `schema.org`)
    #[default]
    #[serde(rename = "schema.org")]
    SchemaOrgJsonLd,
    /// OAI-ORE map
    #[serde(rename = "OAI_ORE")]
    OaiOre,
    /// DataCite XML
    #[serde(rename = "Datacite")]
    Datacite,
    /// DataCite as served over OAI-PMH
    #[serde(rename = "oai_datacite")]
    OaiDatacite,
    /// Dataverse's native JSON form
    #[serde(rename = "dataverse_json")]
    DataverseJson,
}

impl ExportFormat {
    /// The literal token the server expects as the `exporter` query parameter
    #[must_use]
    pub const fn wire_token(self) -> &'static str {
        match self {
            ExportFormat::Ddi => "ddi",
            ExportFormat::OaiDdi => "oai_ddi",
            ExportFormat::Dcterms => "dcterms",
            ExportFormat::OaiDc => "oai_dc",
            ExportFormat::SchemaOrgJsonLd => "schema.org",
            ExportFormat::OaiOre => "OAI_ORE",
            ExportFormat::Datacite => "Datacite",
            ExportFormat::OaiDatacite => "oai_datacite",
            ExportFormat::DataverseJson => "dataverse_json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_token())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ddi" => Ok(ExportFormat::Ddi),
            "oai_ddi" => Ok(ExportFormat::OaiDdi),
            "dcterms" => Ok(ExportFormat::Dcterms),
            "oai_dc" => Ok(ExportFormat::OaiDc),
            "schema.org" => Ok(ExportFormat::SchemaOrgJsonLd),
            "OAI_ORE" => Ok(ExportFormat::OaiOre),
            "Datacite" => Ok(ExportFormat::Datacite),
            "oai_datacite" => Ok(ExportFormat::OaiDatacite),
            "dataverse_json" => Ok(ExportFormat::DataverseJson),
            other => Err(Error::Config {
                message: format!("unknown export format token: {}", other),
                key: Some("format".to_string()),
            }),
        }
    }
}
