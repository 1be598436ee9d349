use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

use super::auditable::HasAuditAttributes;
use super::auditable_record::AuditableRecord;
use super::identifiable::Identifiable;
use super::tenancy::HasTenant;

/// # Documentation
/// - Named feature scoped to exactly one tenant (many features per tenant).
/// - Embeds an [`AuditableRecord`] for identity and audit attributes; its
///   fields are flattened when serialized.
/// - The tenant link is weak: the caller owns the tenant, and the feature
///   reports no tenant once the caller drops it. No referential integrity is
///   enforced here.
/// - The tenant serializes by value but is never decoded; a persistence layer
///   re-links a decoded feature to a live tenant.
#[derive(Debug, Serialize, Deserialize)]
pub struct TenantScopedFeature<T> {
    #[serde(flatten)]
    record: AuditableRecord,

    #[serde(skip_deserializing, default = "Weak::new")]
    tenant: Weak<T>,

    name: Option<String>,
}

impl<T> TenantScopedFeature<T> {
    pub fn new() -> Self {
        Self {
            record: AuditableRecord::new(),
            tenant: Weak::new(),
            name: None,
        }
    }

    /// Returns the embedded base record
    pub fn record(&self) -> &AuditableRecord {
        &self.record
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

impl<T> Default for TenantScopedFeature<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TenantScopedFeature<T> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            tenant: self.tenant.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> Identifiable for TenantScopedFeature<T> {
    fn get_id(&self) -> Option<i64> {
        self.record.get_id()
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.record.set_id(id);
    }
}

impl<T> HasAuditAttributes for TenantScopedFeature<T> {
    fn get_created_attributes(&self) -> &str {
        self.record.get_created_attributes()
    }

    fn set_created_attributes(&mut self, attributes: String) {
        self.record.set_created_attributes(attributes);
    }

    fn get_modified_attributes(&self) -> &str {
        self.record.get_modified_attributes()
    }

    fn set_modified_attributes(&mut self, attributes: String) {
        self.record.set_modified_attributes(attributes);
    }
}

impl<T> HasTenant for TenantScopedFeature<T> {
    type Tenant = T;

    fn get_tenant(&self) -> Option<Arc<T>> {
        self.tenant.upgrade()
    }

    fn set_tenant(&mut self, tenant: Option<&Arc<T>>) {
        self.tenant = tenant.map_or_else(Weak::new, Arc::downgrade);
    }
}
