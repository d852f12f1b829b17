use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    config::Config,
    ecs::{Entity, Registry},
    zoo::{Name, Swims, Walks},
};

fn default_swim_speed() -> f32 {
    Swims::default().speed
}

fn default_walk_speed() -> f32 {
    Walks::default().speed
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub config: Config,
    pub animals: Vec<AnimalSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimalSpec {
    pub name: String,
    #[serde(default)]
    pub swims: Option<SwimSpec>,
    #[serde(default)]
    pub walks: Option<WalkSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwimSpec {
    #[serde(default = "default_swim_speed")]
    pub speed: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalkSpec {
    #[serde(default = "default_walk_speed")]
    pub speed: f32,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    /// The fish, the horse and the turtle.
    pub fn zoo() -> Self {
        let animal = |name: &str, swims: bool, walks: bool| AnimalSpec {
            name: name.to_string(),
            swims: swims.then(|| SwimSpec {
                speed: default_swim_speed(),
            }),
            walks: walks.then(|| WalkSpec {
                speed: default_walk_speed(),
            }),
        };
        Self {
            name: "zoo".to_string(),
            config: Config::default(),
            animals: vec![
                animal("Fish", true, false),
                animal("Horse", false, true),
                animal("Turtle", true, true),
            ],
        }
    }

    /// Spawn one entity per animal. Entities are returned in scenario order.
    pub fn build_registry(&self) -> (Registry, Vec<Entity>) {
        let mut registry = Registry::with_config(self.config.registry.clone());
        let entities = self
            .animals
            .iter()
            .map(|animal| {
                let entity = registry.spawn();
                registry.emplace::<Name, _>(entity, animal.name.as_str());
                if let Some(swims) = &animal.swims {
                    registry.insert(entity, Swims { speed: swims.speed });
                }
                if let Some(walks) = &animal.walks {
                    registry.insert(entity, Walks { speed: walks.speed });
                }
                entity
            })
            .collect();
        log::info!(
            "scenario '{}' populated {} entities",
            self.name,
            self.animals.len()
        );
        (registry, entities)
    }
}
