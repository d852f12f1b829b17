//! Demo components: animals described by what they can do rather than what
//! they are.

use crate::ecs::{Component, Entity, Registry};

#[derive(Clone, Debug, PartialEq)]
pub struct Name(pub String);

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name(value.to_string())
    }
}

impl Component for Name {}

#[derive(Clone, Debug, PartialEq)]
pub struct Swims {
    pub speed: f32,
}

impl Default for Swims {
    fn default() -> Self {
        Self { speed: 3.0 }
    }
}

impl Component for Swims {}

#[derive(Clone, Debug, PartialEq)]
pub struct Walks {
    pub speed: f32,
}

impl Default for Walks {
    fn default() -> Self {
        Self { speed: 2.0 }
    }
}

impl Component for Walks {}

/// One line per named entity, e.g. "Turtle can swim and can walk".
pub fn abilities(registry: &Registry) -> Vec<String> {
    let Some(names) = registry.container::<Name>() else {
        return Vec::new();
    };
    names
        .iter()
        .map(|(entity, name)| describe(registry, entity, name))
        .collect()
}

fn describe(registry: &Registry, entity: Entity, name: &Name) -> String {
    let can = |yes: bool| if yes { "can" } else { "can't" };
    format!(
        "{} {} swim and {} walk",
        name.0,
        can(registry.has::<Swims>(entity)),
        can(registry.has::<Walks>(entity))
    )
}
