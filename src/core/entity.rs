//! Entity identification for cards held in containers.
//!
//! Cards have no identity of their own: two Goblin Warriors built by the same
//! factory are indistinguishable by their fields. A container that needs to
//! tell its entries apart (the deck) hands out an `EntityId` for every card it
//! accepts and uses that handle for later lookups.
//!
//! ## Usage
//!
//! ```
//! use datadeck::core::EntityAllocator;
//!
//! let mut ids = EntityAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_ne!(first, second);
//! assert_eq!(second.raw(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Handle for one entry in a card container.
///
/// Only meaningful for the container that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic allocator for `EntityId`s.
///
/// IDs are never reused, even after the entry they named is removed.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unused ID.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
