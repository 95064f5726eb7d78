pub mod assessment;
pub mod candidate;
pub mod job;
pub mod question;

/// Numeric identity shared by every entity kind.
pub type EntityId = u64;

/// A stored entity with a store-assigned identity.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in logs and NotFound messages.
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    fn assign_id(&mut self, id: EntityId);

    /// Soft-deleted records are hidden from default listings.
    fn is_archived(&self) -> bool {
        false
    }
}
