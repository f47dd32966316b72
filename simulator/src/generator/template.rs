use annocore::geometry::{Rect, Shape};
use annocore::scene::{DetectionObject, RoundKind, RoundScenario, RoundSubmission, UserAnnotation};

/// Built-in two-object scene used by the offline demo round.
pub fn demo_scenario() -> RoundScenario {
    RoundScenario {
        name: "backyard-pets".into(),
        kind: RoundKind::Rectangle,
        canvas_w: 640.0,
        canvas_h: 480.0,
        objects: vec![
            DetectionObject::new(1, "Cat", Shape::Rect(Rect::new(120.0, 200.0, 160.0, 120.0))),
            DetectionObject::new(2, "Dog", Shape::Rect(Rect::new(380.0, 160.0, 180.0, 200.0))),
        ],
        time_limit: None,
    }
}

/// Perfectly traced annotations for a scenario, one per object in order.
pub fn demo_submission(scenario: &RoundScenario) -> RoundSubmission {
    RoundSubmission {
        annotations: scenario
            .objects
            .iter()
            .enumerate()
            .map(|(order, object)| UserAnnotation::new(object.ground_truth.clone(), order))
            .collect(),
        time_remaining: None,
    }
}
