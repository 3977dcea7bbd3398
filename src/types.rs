//! Persistent identifiers and records returned by the listing endpoint

use serde::Deserialize;
use std::fmt;

/// A compound persistent identifier for a dataset
///
/// Rendered as `protocol:authority/identifier`, e.g. `doi:10.1/ABC123`.
/// The pipeline treats the rendered form as opaque except for deriving a
/// filesystem-safe filename from it (see [`filename_for`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersistentId {
    /// Identifier protocol scheme (e.g., "doi", "hdl")
    pub protocol: String,
    /// Naming authority (e.g., "10.1")
    pub authority: String,
    /// Identifier body within the authority's namespace
    pub identifier: String,
}

impl PersistentId {
    /// Build a persistent identifier from its three components
    #[must_use]
    pub fn new(
        protocol: impl Into<String>,
        authority: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            authority: authority.into(),
            identifier: identifier.into(),
        }
    }

    /// The output filename for this identifier (see [`filename_for`])
    #[must_use]
    pub fn filename(&self) -> String {
        filename_for(&self.to_string())
    }
}

impl fmt::Display for PersistentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.protocol, self.authority, self.identifier)
    }
}

/// Derive the output filename for a persistent identifier string
///
/// Every `/` is replaced with `-` and a `.json` suffix is appended:
/// `doi:10.1/ABC123` becomes `doi:10.1-ABC123.json`. Deterministic, so the
/// same identifier always maps to the same file.
#[must_use]
pub fn filename_for(persistent_id: &str) -> String {
    format!("{}.json", persistent_id.replace('/', "-"))
}

/// One entry of a collection's contents listing
///
/// The listing mixes sub-collections (`type == "dataverse"`) with datasets;
/// only dataset-typed entries carry the identifier components, so those
/// fields are optional here.
#[derive(Clone, Debug, Deserialize)]
pub struct DvObject {
    /// Type tag: `"dataverse"` for a sub-collection, `"dataset"` otherwise
    #[serde(rename = "type")]
    pub object_type: String,
    /// Identifier protocol scheme, present on dataset-typed entries
    #[serde(default)]
    pub protocol: Option<String>,
    /// Naming authority, present on dataset-typed entries
    #[serde(default)]
    pub authority: Option<String>,
    /// Identifier body, present on dataset-typed entries
    #[serde(default)]
    pub identifier: Option<String>,
}

impl DvObject {
    /// Assemble the persistent identifier from a dataset-typed entry,
    /// or `None` if any component is missing.
    #[must_use]
    pub fn persistent_id(&self) -> Option<PersistentId> {
        match (&self.protocol, &self.authority, &self.identifier) {
            (Some(protocol), Some(authority), Some(identifier)) => {
                Some(PersistentId::new(protocol, authority, identifier))
            }
            _ => None,
        }
    }
}

/// Envelope of the contents listing response: a `data` array of entries
#[derive(Clone, Debug, Deserialize)]
pub struct ContentsResponse {
    /// The listed entries, in server order
    pub data: Vec<DvObject>,
}
