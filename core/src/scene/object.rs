use crate::geometry::Shape;
use serde::{Deserialize, Serialize};

/// One physically distinct entity in a scene, with its authoritative
/// geometry. Read-only for the lifetime of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionObject {
    pub id: u32,
    pub label: String,
    pub ground_truth: Shape,
}

impl DetectionObject {
    pub fn new(id: u32, label: impl Into<String>, ground_truth: Shape) -> Self {
        Self {
            id,
            label: label.into(),
            ground_truth,
        }
    }
}

/// A finalized user-drawn shape, with the order in which it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnnotation {
    pub shape: Shape,
    pub order: usize,
}

impl UserAnnotation {
    pub fn new(shape: Shape, order: usize) -> Self {
        Self { shape, order }
    }
}
