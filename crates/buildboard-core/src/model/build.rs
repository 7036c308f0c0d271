use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A build submission, already normalized by the command layer
///
/// The store persists these fields verbatim. Hero allow-listing and the
/// five character code shape are checked by `validation` before a
/// `NewBuild` is ever constructed from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBuild {
    /// Hero the build applies to
    pub name: String,

    /// Shareable build code, unique across all records
    pub code: String,

    /// Free-form description
    pub description: String,

    /// Id of the submitting user; the only identity allowed to delete it
    pub owner_id: String,

    /// Display label of the submitter, stored for listing only
    pub owner_display_name: String,
}

impl NewBuild {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
        owner_id: impl Into<String>,
        owner_display_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            description: description.into(),
            owner_id: owner_id.into(),
            owner_display_name: owner_display_name.into(),
        }
    }
}

/// A persisted build row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Store-assigned surrogate key, never reused
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: String,
    pub owner_id: String,
    pub owner_display_name: String,
    /// Assigned by the store at insertion (second resolution, UTC)
    pub created_at: DateTime<Utc>,
}

/// One line of a hero's build listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildListing {
    pub code: String,
    pub description: String,
    pub owner_display_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<BuildRecord> for BuildListing {
    fn from(record: BuildRecord) -> Self {
        Self {
            code: record.code,
            description: record.description,
            owner_display_name: record.owner_display_name,
            created_at: record.created_at,
        }
    }
}
