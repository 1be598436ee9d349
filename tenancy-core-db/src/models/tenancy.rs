use std::sync::Arc;

/// Trait for records scoped to a tenant
///
/// The record holds a non-owning link to a tenant whose lifetime is managed
/// elsewhere. Dropping the record never destroys the tenant, and setting the
/// tenant does not update the tenant side of the relationship.
pub trait HasTenant {
    /// Tenant type the record is scoped to
    type Tenant;

    /// Returns the tenant, if assigned and still alive
    fn get_tenant(&self) -> Option<Arc<Self::Tenant>>;

    /// Links the record to a tenant owned by the caller, or unlinks it with `None`
    fn set_tenant(&mut self, tenant: Option<&Arc<Self::Tenant>>);
}
