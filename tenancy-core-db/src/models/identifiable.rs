/// Trait for records that can be identified by an integer key
///
/// The key stays `None` until a persistence layer assigns one; the record
/// never assigns it itself.
pub trait Identifiable {
    /// Returns the identifier of the record, if persisted
    fn get_id(&self) -> Option<i64>;

    /// Replaces the identifier of the record
    fn set_id(&mut self, id: Option<i64>);
}
