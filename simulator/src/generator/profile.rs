use annocore::geometry::Rect;
use annocore::scene::{Candidate, RoundScenario};
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for the synthetic detector-output generator driving the
/// suppression demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Overlapping guesses produced per ground-truth object.
    pub candidates_per_object: usize,
    /// Max corner offset, in canvas units.
    pub position_jitter: f64,
    /// Max width/height offset, in canvas units.
    pub size_jitter: f64,
    /// Confidence drop per extra duplicate of the same object.
    pub confidence_decay: f64,
    pub seed: u64,
    pub description: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            candidates_per_object: 4,
            position_jitter: 8.0,
            size_jitter: 6.0,
            confidence_decay: 0.12,
            seed: 0,
            description: None,
        }
    }
}

/// Builds jittered candidate boxes around every ground-truth extent, with
/// confidence decaying per duplicate. The random source is injected so demo
/// runs are reproducible; see [`build_candidates_from_config`] for the
/// seeded convenience entry point.
pub fn build_candidates_with_rng<R: Rng>(
    scenario: &RoundScenario,
    config: &GeneratorConfig,
    rng: &mut R,
) -> anyhow::Result<Vec<Candidate>> {
    let per_object = config.candidates_per_object.max(1);
    let mut candidates = Vec::with_capacity(scenario.objects.len() * per_object);

    for object in &scenario.objects {
        let base = object
            .ground_truth
            .bounds()
            .with_context(|| format!("object {} has no ground-truth extent", object.id))?;

        for duplicate in 0..per_object {
            let dx = rng.gen_range(-config.position_jitter..=config.position_jitter);
            let dy = rng.gen_range(-config.position_jitter..=config.position_jitter);
            let dw = rng.gen_range(-config.size_jitter..=config.size_jitter);
            let dh = rng.gen_range(-config.size_jitter..=config.size_jitter);

            let rect = Rect::new(
                base.x + dx,
                base.y + dy,
                (base.w + dw).max(1.0),
                (base.h + dh).max(1.0),
            );
            let confidence = (0.95
                - duplicate as f64 * config.confidence_decay
                - rng.gen_range(0.0..0.05))
            .clamp(0.05, 1.0);

            candidates.push(Candidate::new(rect, confidence, object.id));
        }
    }

    Ok(candidates)
}

/// Seeded wrapper over [`build_candidates_with_rng`].
pub fn build_candidates_from_config(
    scenario: &RoundScenario,
    config: &GeneratorConfig,
) -> anyhow::Result<Vec<Candidate>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_candidates_with_rng(scenario, config, &mut rng)
}
