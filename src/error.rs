use thiserror::Error;

use crate::ecs::Entity;

/// Contract violations raised by component containers.
///
/// The panicking operations (`insert`, `get`, ...) format their panic message
/// from these; the `try_` variants hand them back instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("entity {entity} already has a component of type {component}")]
    DuplicateComponent {
        entity: Entity,
        component: &'static str,
    },
    #[error("entity {entity} has no component of type {component}")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
