use annocore::evaluation::{BandThresholds, StarThresholds};
use annocore::prelude::EvalConfig;
use annocore::scene::RoundScenario;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Evaluation thresholds for a run, loadable from YAML or built from CLI
/// arguments. Star and band cutoffs fall back to the product defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub sampling_step: f64,
    pub overlap_threshold: f64,
    #[serde(default)]
    pub stars: StarThresholds,
    #[serde(default)]
    pub bands: BandThresholds,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(sampling_step: f64, overlap_threshold: f64) -> Self {
        Self {
            sampling_step,
            overlap_threshold,
            stars: StarThresholds::default(),
            bands: BandThresholds::default(),
        }
    }

    pub fn to_eval_config(&self) -> EvalConfig {
        EvalConfig {
            sampling_step: self.sampling_step,
            overlap_threshold: self.overlap_threshold,
        }
    }
}

/// Loads a round scenario (ground truth + round kind) from YAML.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> anyhow::Result<RoundScenario> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading scenario {}", path_ref.display()))?;
    let scenario: RoundScenario = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
    Ok(scenario)
}
