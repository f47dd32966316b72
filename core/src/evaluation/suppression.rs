use crate::prelude::{EvalError, EvalResult};
use crate::scene::Candidate;
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// IoU above which a lower-confidence candidate is suppressed by a kept one.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.4;

/// Result of one suppression pass. `candidates` is a new list in descending
/// confidence order with `suppressed` flags set; the caller's input is never
/// touched. `suppression_order` holds indices into `candidates` in the order
/// suppressions occurred, which the UI replays as an animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuppressionOutcome {
    pub candidates: Vec<Candidate>,
    pub suppression_order: Vec<usize>,
}

impl SuppressionOutcome {
    pub fn kept(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(|c| !c.suppressed)
    }
}

/// Confidence-ordered overlap suppression.
///
/// Candidates are stably sorted by descending confidence (ties keep input
/// order). Each not-yet-suppressed candidate in turn becomes the kept
/// anchor and suppresses every later candidate whose IoU with it exceeds
/// `overlap_threshold`. A kept candidate is never suppressed by a lower- or
/// equal-confidence one, and re-running the pass over the kept set changes
/// nothing.
///
/// An empty input is a caller contract violation and fails loudly.
pub fn run_non_max_suppression(
    candidates: &[Candidate],
    overlap_threshold: f64,
) -> EvalResult<SuppressionOutcome> {
    if candidates.is_empty() {
        return Err(EvalError::NoCandidates(
            "suppression needs at least one candidate".into(),
        ));
    }

    let logger = LogManager::new("suppression");
    let mut ordered: Vec<Candidate> = candidates
        .iter()
        .cloned()
        .map(|mut candidate| {
            candidate.suppressed = false;
            candidate
        })
        .collect();
    ordered.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let mut suppression_order = Vec::new();
    for anchor in 0..ordered.len() {
        if ordered[anchor].suppressed {
            continue;
        }
        let anchor_rect = ordered[anchor].rect;
        for later in (anchor + 1)..ordered.len() {
            if ordered[later].suppressed {
                continue;
            }
            if anchor_rect.iou(&ordered[later].rect) > overlap_threshold {
                ordered[later].suppressed = true;
                suppression_order.push(later);
            }
        }
    }

    logger.record(&format!(
        "kept {} of {} candidates",
        ordered.len() - suppression_order.len(),
        ordered.len()
    ));
    Ok(SuppressionOutcome {
        candidates: ordered,
        suppression_order,
    })
}
