//! Entity identification.
//!
//! Every card gets a unique `EntityId` at construction. The id is a plain
//! monotonic sequence number, stable for the lifetime of the card and
//! meaningful in logs and display output (unlike a pointer or runtime
//! object identity, which would not survive serialization).
//!
//! ## Usage
//!
//! ```
//! use card_duel::core::{EntityId, IdAllocator};
//!
//! let mut ids = IdAllocator::new();
//! let first = ids.allocate();
//! let second = ids.allocate();
//!
//! assert_eq!(first, EntityId(0));
//! assert_eq!(second, EntityId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card entity.
///
/// Assigned once at construction and never reused within an allocator's
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic `EntityId` source.
///
/// Hand one of these to whatever constructs cards. Ids start at 0 and
/// increase by one per allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Create an allocator starting at a given id.
    ///
    /// Useful when resuming a sequence from serialized state.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Allocate the next id in the sequence.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Peek at the id the next call to `allocate` will return.
    #[must_use]
    pub const fn peek(&self) -> EntityId {
        EntityId(self.next)
    }
}
