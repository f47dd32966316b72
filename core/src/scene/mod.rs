pub mod candidate;
pub mod object;
pub mod round;

pub use candidate::Candidate;
pub use object::{DetectionObject, UserAnnotation};
pub use round::{RoundKind, RoundScenario, RoundSubmission};
