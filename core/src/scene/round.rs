use crate::scene::object::{DetectionObject, UserAnnotation};
use serde::{Deserialize, Serialize};

/// Round variant defined by the level collaborator. Carried for the UI;
/// the evaluation path itself is selected by the shapes in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundKind {
    Rectangle,
    Polygon,
    FixLabel,
}

/// Ground truth and timing for one round, as defined by a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundScenario {
    pub name: String,
    pub kind: RoundKind,
    pub canvas_w: f64,
    pub canvas_h: f64,
    pub objects: Vec<DetectionObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<f64>,
}

/// Finalized user input handed over at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSubmission {
    pub annotations: Vec<UserAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<f64>,
}
