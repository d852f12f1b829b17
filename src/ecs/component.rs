//! Dense component storage with swap-remove

use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use super::Entity;
use crate::error::{Error, Result};

/// Trait for components
pub trait Component: 'static {}

/// Type-erased view of a component container.
///
/// Every `ComponentContainer<T>` implements this, which lets the registry
/// clear, count, query and strip entities across all component types without
/// knowing what those types are.
pub trait Container: Any {
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn has(&self, entity: Entity) -> bool;
    /// Returns `true` if the entity held a component here.
    fn remove(&mut self, entity: Entity) -> bool;
    fn entities(&self) -> &[Entity];
    fn slot_of(&self, entity: Entity) -> Option<usize>;
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Concrete storage for a specific component type
///
/// Components live in a dense `Vec` with a parallel `Vec` of owning entities;
/// `index` maps each entity to its slot. Removal moves the last record into
/// the freed slot, so the sequences never have gaps and iteration order is
/// only stable until the next mutation.
pub struct ComponentContainer<T: Component> {
    components: Vec<T>,
    entities: Vec<Entity>,
    index: HashMap<Entity, usize>,
}

impl<T: Component> ComponentContainer<T> {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            entities: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            components: Vec::with_capacity(capacity),
            entities: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Attach `component` to `entity`.
    ///
    /// # Panics
    ///
    /// Panics if the entity already has a component of this type. Nothing is
    /// modified in that case.
    pub fn insert(&mut self, entity: Entity, component: T) -> &mut T {
        self.try_insert(entity, component)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`insert`](Self::insert), but reports a duplicate instead of
    /// panicking.
    pub fn try_insert(&mut self, entity: Entity, component: T) -> Result<&mut T> {
        if self.has(entity) {
            return Err(Error::DuplicateComponent {
                entity,
                component: type_name::<T>(),
            });
        }
        Ok(self.push(entity, component))
    }

    /// Attach `component` to `entity` without the uniqueness check.
    ///
    /// If the entity already had a component here, that record becomes an
    /// orphan: it still occupies a slot and shows up when iterating, but no
    /// lookup will ever reach it again. Only [`clear`](Self::clear) drops
    /// orphans; see [`orphans`](Self::orphans).
    pub fn insert_with_duplicates(&mut self, entity: Entity, component: T) -> &mut T {
        if let Some(&slot) = self.index.get(&entity) {
            log::debug!(
                "orphaning slot {slot} of {} held by {entity}",
                type_name::<T>()
            );
        }
        self.push(entity, component)
    }

    /// Insert a value built from `args`.
    pub fn emplace<A: Into<T>>(&mut self, entity: Entity, args: A) -> &mut T {
        self.insert(entity, args.into())
    }

    pub fn emplace_with_duplicates<A: Into<T>>(&mut self, entity: Entity, args: A) -> &mut T {
        self.insert_with_duplicates(entity, args.into())
    }

    pub fn emplace_default(&mut self, entity: Entity) -> &mut T
    where
        T: Default,
    {
        self.insert(entity, T::default())
    }

    fn push(&mut self, entity: Entity, component: T) -> &mut T {
        let slot = self.components.len();
        self.index.insert(entity, slot);
        self.entities.push(entity);
        self.components.push(component);
        &mut self.components[slot]
    }

    /// # Panics
    ///
    /// Panics if the entity has no component of this type.
    pub fn get(&self, entity: Entity) -> &T {
        match self.index.get(&entity) {
            Some(&slot) => &self.components[slot],
            None => panic!("{}", Self::missing(entity)),
        }
    }

    /// # Panics
    ///
    /// Panics if the entity has no component of this type.
    pub fn get_mut(&mut self, entity: Entity) -> &mut T {
        match self.index.get(&entity) {
            Some(&slot) => &mut self.components[slot],
            None => panic!("{}", Self::missing(entity)),
        }
    }

    pub fn try_get(&self, entity: Entity) -> Option<&T> {
        let slot = *self.index.get(&entity)?;
        self.components.get(slot)
    }

    pub fn try_get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = *self.index.get(&entity)?;
        self.components.get_mut(slot)
    }

    pub fn has(&self, entity: Entity) -> bool {
        self.index.contains_key(&entity)
    }

    /// Slot currently holding the entity's component.
    pub fn slot_of(&self, entity: Entity) -> Option<usize> {
        self.index.get(&entity).copied()
    }

    /// Detach and return the entity's component. Absent entities are a no-op.
    ///
    /// The last record is moved into the freed slot, so this is O(1) but
    /// reorders the container.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.index.remove(&entity)?;
        let last = self.components.len() - 1;
        let removed = self.components.swap_remove(slot);
        self.entities.swap_remove(slot);
        if slot != last {
            // Orphans have no index entry, and a live entry pointing
            // elsewhere belongs to a different slot.
            let moved = self.entities[slot];
            if let Some(moved_slot) = self.index.get_mut(&moved) {
                if *moved_slot == last {
                    *moved_slot = slot;
                }
            }
        }
        Some(removed)
    }

    /// Drop every component, orphans included. Capacity is kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.components.clear();
        self.entities.clear();
    }

    /// Number of occupied slots, orphans included.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.components.capacity()
    }

    /// Slots left behind by [`insert_with_duplicates`](Self::insert_with_duplicates).
    pub fn orphans(&self) -> usize {
        self.components.len() - self.index.len()
    }

    /// Reorder the container so that entities follow `compare`.
    ///
    /// The sort is stable. Lookups keep resolving to the same components and
    /// orphans stay orphaned.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Entity, &Entity) -> Ordering,
    {
        let live: Vec<bool> = self
            .entities
            .iter()
            .enumerate()
            .map(|(slot, entity)| self.index.get(entity) == Some(&slot))
            .collect();
        let mut records: Vec<(Entity, bool, T)> = self
            .entities
            .drain(..)
            .zip(live)
            .zip(self.components.drain(..))
            .map(|((entity, live), component)| (entity, live, component))
            .collect();
        records.sort_by(|a, b| compare(&a.0, &b.0));

        self.index.clear();
        for (slot, (entity, live, component)) in records.into_iter().enumerate() {
            if live {
                self.index.insert(entity, slot);
            }
            self.entities.push(entity);
            self.components.push(component);
        }
    }

    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&Entity) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn components(&self) -> &[T] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.components.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.components.iter_mut())
    }

    fn missing(entity: Entity) -> Error {
        Error::MissingComponent {
            entity,
            component: type_name::<T>(),
        }
    }
}

impl<T: Component> Default for ComponentContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> Container for ComponentContainer<T> {
    fn clear(&mut self) {
        ComponentContainer::clear(self);
    }

    fn len(&self) -> usize {
        ComponentContainer::len(self)
    }

    fn has(&self, entity: Entity) -> bool {
        ComponentContainer::has(self, entity)
    }

    fn remove(&mut self, entity: Entity) -> bool {
        ComponentContainer::remove(self, entity).is_some()
    }

    fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn slot_of(&self, entity: Entity) -> Option<usize> {
        ComponentContainer::slot_of(self, entity)
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T: Component> Index<Entity> for ComponentContainer<T> {
    type Output = T;

    fn index(&self, entity: Entity) -> &Self::Output {
        self.get(entity)
    }
}

impl<T: Component> IndexMut<Entity> for ComponentContainer<T> {
    fn index_mut(&mut self, entity: Entity) -> &mut Self::Output {
        self.get_mut(entity)
    }
}
