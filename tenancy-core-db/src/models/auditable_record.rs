use serde::{Deserialize, Serialize};

use super::auditable::HasAuditAttributes;
use super::identifiable::Identifiable;

/// # Documentation
/// - Base record carrying an identifier and creation/modification audit attributes.
/// - Created with no identifier and empty audit attributes.
/// - A persistence layer assigns the identifier once stored and overwrites the
///   audit attributes to describe the operation performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct AuditableRecord {
    /// Assigned by the persistence layer; `None` for records never stored
    id: Option<i64>,

    #[serde(default)]
    created_attributes: String,

    #[serde(default)]
    modified_attributes: String,
}

impl AuditableRecord {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Identifiable for AuditableRecord {
    fn get_id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl HasAuditAttributes for AuditableRecord {
    fn get_created_attributes(&self) -> &str {
        &self.created_attributes
    }

    fn set_created_attributes(&mut self, attributes: String) {
        self.created_attributes = attributes;
    }

    fn get_modified_attributes(&self) -> &str {
        &self.modified_attributes
    }

    fn set_modified_attributes(&mut self, attributes: String) {
        self.modified_attributes = attributes;
    }
}
