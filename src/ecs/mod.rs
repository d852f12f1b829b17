//! Entity-component store
//!
//! Dense per-type component containers with swap-remove, plus a registry
//! that reaches every container through a type-erased interface.

pub mod component;
pub mod entity;
pub mod registry;

pub use component::{Component, ComponentContainer, Container};
pub use entity::{Entity, EntityAllocator};
pub use registry::Registry;
