//! Registry - owner of every component container

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use super::entity::EntityAllocator;
use super::{Component, ComponentContainer, Container, Entity};
use crate::config::RegistryConfig;
use crate::diagnostics::{ComponentSlot, ContainerSummary, EntityReport};
use crate::error::Error;

/// Registry holds the entity allocator and one container per component type.
///
/// Containers are created the first time a type is asked for mutably and
/// stay registered for the registry's lifetime. Cross-type operations go
/// through the [`Container`] trait, in registration order.
pub struct Registry {
    entities: EntityAllocator,
    containers: Vec<Box<dyn Container>>,
    lookup: HashMap<TypeId, usize>,
    config: RegistryConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entities: EntityAllocator::new(),
            containers: Vec::new(),
            lookup: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create a new entity
    pub fn spawn(&mut self) -> Entity {
        self.entities.next()
    }

    pub fn entities(&self) -> &EntityAllocator {
        &self.entities
    }

    /// Container for `T`, registering it on first use.
    pub fn register<T: Component>(&mut self) -> &mut ComponentContainer<T> {
        let type_id = TypeId::of::<T>();
        let slot = match self.lookup.get(&type_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.containers.len();
                log::debug!("registering container #{slot} for {}", type_name::<T>());
                self.containers
                    .push(Box::new(ComponentContainer::<T>::with_capacity(
                        self.config.initial_capacity,
                    )));
                self.lookup.insert(type_id, slot);
                slot
            }
        };
        self.containers[slot]
            .as_any_mut()
            .downcast_mut()
            .expect("container registered under a foreign type id")
    }

    /// Same as [`register`](Self::register).
    pub fn container_mut<T: Component>(&mut self) -> &mut ComponentContainer<T> {
        self.register::<T>()
    }

    /// Container for `T`, if one has been registered.
    pub fn container<T: Component>(&self) -> Option<&ComponentContainer<T>> {
        let slot = *self.lookup.get(&TypeId::of::<T>())?;
        self.containers[slot].as_any().downcast_ref()
    }

    fn existing_mut<T: Component>(&mut self) -> Option<&mut ComponentContainer<T>> {
        let slot = *self.lookup.get(&TypeId::of::<T>())?;
        self.containers[slot].as_any_mut().downcast_mut()
    }

    /// Attach a component to an entity. Panics on a duplicate.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) -> &mut T {
        self.register::<T>().insert(entity, component)
    }

    pub fn emplace<T: Component, A: Into<T>>(&mut self, entity: Entity, args: A) -> &mut T {
        self.register::<T>().emplace(entity, args)
    }

    /// Panics if the entity has no `T`.
    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        match self.container::<T>() {
            Some(container) => container.get(entity),
            None => panic!("{}", missing::<T>(entity)),
        }
    }

    /// Panics if the entity has no `T`.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
        match self.existing_mut::<T>() {
            Some(container) => container.get_mut(entity),
            None => panic!("{}", missing::<T>(entity)),
        }
    }

    pub fn try_get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.container::<T>()?.try_get(entity)
    }

    pub fn try_get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.existing_mut::<T>()?.try_get_mut(entity)
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.container::<T>()
            .map(|container| container.has(entity))
            .unwrap_or(false)
    }

    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.existing_mut::<T>()?.remove(entity)
    }

    /// Empty every registered container. Registrations are kept.
    pub fn clear_all(&mut self) {
        log::trace!("clearing {} containers", self.containers.len());
        for container in &mut self.containers {
            container.clear();
        }
    }

    /// Strip the entity of every component it has.
    ///
    /// Returns the number of containers that held it.
    pub fn remove_entity_everywhere(&mut self, entity: Entity) -> usize {
        let removed = self
            .containers
            .iter_mut()
            .map(|container| container.remove(entity))
            .filter(|&held| held)
            .count();
        log::trace!("removed {entity} from {removed} containers");
        removed
    }

    /// Summary of every non-empty container.
    pub fn list_all(&self) -> Vec<ContainerSummary> {
        self.containers
            .iter()
            .filter(|container| !container.is_empty())
            .map(|container| ContainerSummary {
                component: container.type_name(),
                count: container.len(),
                entities: container.entities().iter().map(|e| e.id()).collect(),
            })
            .collect()
    }

    /// Component types attached to `entity` and the slots they occupy.
    pub fn list_components_of(&self, entity: Entity) -> EntityReport {
        let components = self
            .containers
            .iter()
            .filter_map(|container| {
                container.slot_of(entity).map(|slot| ComponentSlot {
                    component: container.type_name(),
                    slot,
                })
            })
            .collect();
        EntityReport {
            entity: entity.id(),
            components,
        }
    }

    /// Every registered container, in registration order.
    pub fn containers(&self) -> impl Iterator<Item = &dyn Container> {
        self.containers.iter().map(|container| &**container)
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn missing<T: Component>(entity: Entity) -> Error {
    Error::MissingComponent {
        entity,
        component: type_name::<T>(),
    }
}
