use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// One raw detector guess among many overlapping guesses for the same true
/// object. Inputs to the suppressor always carry `suppressed = false`; the
/// flag is only ever set on the suppressor's own output copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub rect: Rect,
    pub confidence: f64,
    pub source_object_id: u32,
    #[serde(default)]
    pub suppressed: bool,
}

impl Candidate {
    pub fn new(rect: Rect, confidence: f64, source_object_id: u32) -> Self {
        Self {
            rect,
            confidence,
            source_object_id,
            suppressed: false,
        }
    }
}
