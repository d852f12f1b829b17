//! Entity management

use std::fmt;

/// Opaque entity handle.
///
/// The tag is assigned by an [`EntityAllocator`] starting at 1; 0 is reserved
/// as "no entity" and is what `Entity::default()` returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(u32);

impl Entity {
    /// The reserved "no entity" value.
    pub const NULL: Entity = Entity(0);

    /// Raw numeric tag, for display and diagnostics.
    pub fn id(self) -> u32 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Entity allocator
///
/// Hands out strictly increasing entities. Tags are never recycled, so an
/// entity whose components have all been removed stays retired.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    last: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Issue the next entity.
    ///
    /// # Panics
    ///
    /// Panics once all `u32::MAX` tags have been handed out.
    pub fn next(&mut self) -> Entity {
        self.last = self
            .last
            .checked_add(1)
            .expect("entity allocator exhausted");
        Entity(self.last)
    }

    /// Number of entities issued so far.
    pub fn issued(&self) -> u32 {
        self.last
    }

    /// Most recently issued entity, or [`Entity::NULL`] before the first call.
    pub fn last(&self) -> Entity {
        Entity(self.last)
    }
}
