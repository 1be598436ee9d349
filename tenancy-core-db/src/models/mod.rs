pub mod auditable;
pub mod auditable_record;
pub mod identifiable;
pub mod tenancy;
pub mod tenant_scoped_feature;

// Re-exports
pub use auditable::*;
pub use auditable_record::*;
pub use identifiable::*;
pub use tenancy::*;
pub use tenant_scoped_feature::*;
