//! Annotation-evaluation core for the detection trainer mini-game.
//!
//! Pure, synchronous scoring of user-drawn shapes against ground truth:
//! rectangle and sampled polygon IoU, greedy annotation-to-object
//! assignment, non-maximum suppression for the detector demo, and the
//! star/band scoring policies. Everything here is a deterministic function
//! of its inputs; rendering, persistence, and round progression live with
//! the calling UI.

pub mod evaluation;
pub mod geometry;
pub mod prelude;
pub mod scene;
pub mod telemetry;

pub use prelude::{AnnotationMatcher, EvalConfig, EvalError, EvalResult};
