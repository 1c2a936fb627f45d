//! Record identity generator.

use crate::types::RecordId;

/// Hands out record identities.
///
/// Identities are:
/// - Unique within the generator's lifetime
/// - Assigned once and immutable
/// - Never reused, even after the record is removed
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: RecordId,
}

impl IdGenerator {
    /// Creates a generator whose first identity is `rec:1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: RecordId::new(1),
        }
    }

    /// Returns a fresh identity.
    pub fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next = id.next();
        id
    }

    /// Returns the identity the next call to `next_id` will produce.
    #[must_use]
    pub const fn peek(&self) -> RecordId {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), RecordId::new(1));
        assert_eq!(ids.next_id(), RecordId::new(2));
        assert_eq!(ids.peek(), RecordId::new(3));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
    }
}
