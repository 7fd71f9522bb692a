//! JSON scenario files: an actor, the conditions to start with, and the
//! surroundings.

use std::path::Path;

use malady_core::{Actor, BodyRegion, ConditionKind, InflictMode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::Simulation;
use crate::world::StaticWorld;

/// One condition a scenario starts with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioCondition {
    /// Condition key, e.g. `"bite"`.
    pub kind: String,
    /// Starting duration.
    pub duration: i32,
    /// Starting intensity.
    #[serde(default = "default_intensity")]
    pub intensity: i32,
    /// Body region key. Unknown keys mean the whole body.
    #[serde(default)]
    pub region: Option<String>,
}

fn default_intensity() -> i32 {
    1
}

fn default_seed() -> u64 {
    SimConfig::default().seed
}

/// A complete starting state.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// The actor, defaulting to a healthy adult.
    #[serde(default)]
    pub actor: Actor,
    /// Conditions added before the first tick.
    #[serde(default)]
    pub conditions: Vec<ScenarioCondition>,
    /// Surroundings.
    #[serde(default)]
    pub world: StaticWorld,
    /// RNG seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Absolute turn the clock starts at.
    #[serde(default)]
    pub start_turn: u64,
}

impl Scenario {
    /// Parse a scenario document.
    pub fn from_json(text: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a scenario file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading scenario");
        let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Simulation settings taken from the scenario.
    pub fn config(&self) -> SimConfig {
        SimConfig::default()
            .with_seed(self.seed)
            .with_start_turn(self.start_turn)
    }

    /// Build a simulation. The starting conditions are placed without any
    /// gain messages; unknown kinds are skipped.
    pub fn into_simulation(self) -> SimResult<Simulation> {
        let config = self.config();
        let mut actor = self.actor;
        actor.validate()?;
        for cond in &self.conditions {
            let kind = match ConditionKind::from_key(&cond.kind) {
                Ok(kind) => kind,
                Err(e) => {
                    warn!(kind = %cond.kind, "skipping scenario condition: {e}");
                    continue;
                }
            };
            let region = cond.region.as_deref().and_then(BodyRegion::parse_or_whole);
            actor
                .conditions
                .inflict(kind, cond.duration, cond.intensity, region, InflictMode::Merge);
        }
        Ok(Simulation::new(actor, self.world, config))
    }
}
