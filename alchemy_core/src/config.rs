//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which world a fresh engine starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedContent {
    /// Only fire, water, earth and air.
    #[default]
    Basics,
    /// The bundled starter world.
    Starter,
}

/// Configuration for scans, quizzes and seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Whether an element may be combined with itself.
    pub allow_self_pairs: bool,

    /// Number of answers offered per quiz question, the correct one included.
    pub quiz_choices: usize,

    /// How many candidates to try per decoy answer before giving up on it.
    pub decoy_attempts: usize,

    /// World used when starting fresh or when a save cannot be read.
    pub seed: SeedContent,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_self_pairs: false,
            quiz_choices: 4,
            decoy_attempts: 32,
            seed: SeedContent::Basics,
        }
    }
}

impl EngineConfig {
    /// Read a configuration from TOML. Missing keys fall back to the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
