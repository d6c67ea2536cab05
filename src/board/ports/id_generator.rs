//! Identifier generation port.

use uuid::Uuid;

/// Source of fresh, globally unique identifiers.
///
/// Implementations must never return the same value twice.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn next_id(&self) -> Uuid;
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> Uuid {
        (**self).next_id()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<T> {
    fn next_id(&self) -> Uuid {
        (**self).next_id()
    }
}
