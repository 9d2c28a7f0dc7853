//! Region entities for the three administrative levels.
//!
//! These mirror the directory service payloads verbatim. Entities are
//! read-only: they are created by a successful fetch and replaced wholesale
//! by the next fetch for their level.

use serde::{Deserialize, Serialize};

/// A top-level administrative unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Opaque identifier assigned by the directory service.
    pub id: String,

    /// Display name.
    pub name: String,
}

impl Province {
    /// Create a new province.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A regency (kabupaten), belonging to exactly one province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    pub id: String,
    pub name: String,

    /// Id of the owning province.
    pub province_id: String,
}

impl Regency {
    /// Create a new regency scoped to a province.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        province_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            province_id: province_id.into(),
        }
    }
}

/// A district (kecamatan), belonging to exactly one regency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,

    /// Id of the owning regency.
    pub regency_id: String,
}

impl District {
    /// Create a new district scoped to a regency.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        regency_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            regency_id: regency_id.into(),
        }
    }
}

/// Common accessors shared by all three levels.
///
/// Rendering and selection only ever need the id and the display name,
/// so panels can be generic over the level.
pub trait Region {
    /// Opaque string id, scoped to the parent level.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;
}

impl Region for Province {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Region for Regency {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Region for District {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
