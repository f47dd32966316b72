use annocore::evaluation::MatchResult;
use annocore::scene::Candidate;
use serde::{Deserialize, Serialize};

/// Latest evaluation state published to the browser UI: the scored round
/// plus the suppression demo, with the suppression order preserved so the
/// UI can replay it as an animation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EvaluationModel {
    pub round_name: String,
    pub matches: Vec<MatchResult>,
    pub mean_iou: f64,
    pub adjusted_iou: f64,
    pub stars: u8,
    pub band: String,
    pub candidates: Vec<Candidate>,
    pub suppression_order: Vec<usize>,
}
