/// Sentinel written into audit attributes for system-initiated changes.
///
/// Records store it like any other attribute string and never interpret it.
pub const SYSTEM_USER: &str = "System";

/// Trait for records carrying creation and modification audit attributes
///
/// Both attributes are opaque strings produced and consumed by an audit
/// subsystem outside this crate. They are never absent, only possibly empty.
pub trait HasAuditAttributes {
    /// Returns the attributes recorded when the record was created
    fn get_created_attributes(&self) -> &str;

    /// Replaces the creation attributes, stored as given
    fn set_created_attributes(&mut self, attributes: String);

    /// Returns the attributes recorded at the last modification
    fn get_modified_attributes(&self) -> &str;

    /// Replaces the modification attributes, stored as given
    fn set_modified_attributes(&mut self, attributes: String);
}
