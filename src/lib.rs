//! A minimal entity-component store.
//!
//! Components of each type live in their own dense [`ComponentContainer`];
//! the [`Registry`] owns every container and reaches them all through the
//! type-erased [`Container`] trait for operations such as clearing
//! everything or stripping an entity of all its components.

pub mod config;
pub mod diagnostics;
pub mod ecs;
pub mod error;
pub mod scenario;
pub mod zoo;

pub use config::{Config, RegistryConfig};
pub use ecs::{Component, ComponentContainer, Container, Entity, EntityAllocator, Registry};
pub use error::Error;
pub use scenario::Scenario;
