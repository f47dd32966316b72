use crate::evaluation::matcher::MatchResult;
use crate::evaluation::suppression::DEFAULT_OVERLAP_THRESHOLD;
use crate::geometry::DEFAULT_SAMPLE_STEP;
use crate::scene::{DetectionObject, UserAnnotation};
use serde::{Deserialize, Serialize};

/// Tunable knobs shared by the evaluation components. Both values trade
/// accuracy for compute cost and travel explicitly rather than being baked
/// in as literals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Grid step for sampled polygon IoU.
    pub sampling_step: f64,
    /// IoU above which a lower-confidence candidate is suppressed.
    pub overlap_threshold: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            sampling_step: DEFAULT_SAMPLE_STEP,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
        }
    }
}

/// Caller contract violations. Degenerate geometry never lands here; it
/// scores as IoU 0 instead.
#[derive(thiserror::Error, Debug)]
pub enum EvalError {
    #[error("empty round: {0}")]
    EmptyRound(String),
    #[error("no candidates: {0}")]
    NoCandidates(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Assignment strategy pairing user annotations with ground-truth objects.
///
/// The shipped implementation is greedy in object-declaration order; the
/// trait exists so a globally optimal matcher could be substituted without
/// touching callers. Swapping it changes scored outcomes.
pub trait AnnotationMatcher {
    fn match_annotations(
        &self,
        annotations: &[UserAnnotation],
        objects: &[DetectionObject],
    ) -> Vec<MatchResult>;
}
