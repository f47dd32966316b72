use crate::geometry::shape_iou;
use crate::prelude::{AnnotationMatcher, EvalConfig};
use crate::scene::{DetectionObject, UserAnnotation};
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};

/// Verdict for one ground-truth object: the best IoU achieved and which
/// annotation (by index into the submission) earned it. `None` means the
/// submission ran out of annotations before this object was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub object: DetectionObject,
    pub iou: f64,
    pub matched_annotation: Option<usize>,
}

/// Greedy one-to-one assignment in object-declaration order.
///
/// Each object takes the unconsumed annotation with the highest IoU, ties
/// going to the lowest annotation index. Earlier objects can steal a later
/// object's best annotation; the levels are balanced against exactly this
/// behavior, so it must not change.
pub struct GreedyMatcher {
    config: EvalConfig,
    logger: LogManager,
}

impl GreedyMatcher {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            logger: LogManager::new("matcher"),
        }
    }
}

impl AnnotationMatcher for GreedyMatcher {
    fn match_annotations(
        &self,
        annotations: &[UserAnnotation],
        objects: &[DetectionObject],
    ) -> Vec<MatchResult> {
        let mut consumed = vec![false; annotations.len()];
        let mut results = Vec::with_capacity(objects.len());

        for object in objects {
            let mut best: Option<(usize, f64)> = None;
            for (index, annotation) in annotations.iter().enumerate() {
                if consumed[index] {
                    continue;
                }
                let iou = shape_iou(
                    &annotation.shape,
                    &object.ground_truth,
                    self.config.sampling_step,
                );
                if best.map_or(true, |(_, best_iou)| iou > best_iou) {
                    best = Some((index, iou));
                }
            }

            match best {
                Some((index, iou)) => {
                    consumed[index] = true;
                    results.push(MatchResult {
                        object: object.clone(),
                        iou,
                        matched_annotation: Some(index),
                    });
                }
                None => results.push(MatchResult {
                    object: object.clone(),
                    iou: 0.0,
                    matched_annotation: None,
                }),
            }
        }

        let paired = results
            .iter()
            .filter(|r| r.matched_annotation.is_some())
            .count();
        self.logger
            .record(&format!("paired {} of {} objects", paired, objects.len()));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Shape};

    fn rect_object(id: u32, label: &str, x: f64, y: f64, w: f64, h: f64) -> DetectionObject {
        DetectionObject::new(id, label, Shape::Rect(Rect::new(x, y, w, h)))
    }

    fn rect_annotation(order: usize, x: f64, y: f64, w: f64, h: f64) -> UserAnnotation {
        UserAnnotation::new(Shape::Rect(Rect::new(x, y, w, h)), order)
    }

    #[test]
    fn two_objects_two_annotations_pair_without_sharing() {
        let objects = vec![
            rect_object(1, "Cat", 0.0, 0.0, 10.0, 10.0),
            rect_object(2, "Dog", 20.0, 20.0, 10.0, 10.0),
        ];
        let annotations = vec![
            rect_annotation(0, 0.0, 0.0, 10.0, 10.0),
            rect_annotation(1, 21.0, 21.0, 9.0, 9.0),
        ];

        let matcher = GreedyMatcher::new(EvalConfig::default());
        let results = matcher.match_annotations(&annotations, &objects);

        assert_eq!(results[0].matched_annotation, Some(0));
        assert!((results[0].iou - 1.0).abs() < 1e-12);
        assert_eq!(results[1].matched_annotation, Some(1));
        // Intersection 9x9 = 81, union 100 + 81 - 81 = 100.
        assert!((results[1].iou - 0.81).abs() < 1e-12);
    }

    #[test]
    fn assignment_is_injective_with_fewer_annotations_than_objects() {
        let objects = vec![
            rect_object(1, "A", 0.0, 0.0, 10.0, 10.0),
            rect_object(2, "B", 20.0, 0.0, 10.0, 10.0),
            rect_object(3, "C", 40.0, 0.0, 10.0, 10.0),
        ];
        let annotations = vec![
            rect_annotation(0, 1.0, 1.0, 10.0, 10.0),
            rect_annotation(1, 41.0, 1.0, 10.0, 10.0),
        ];

        let matcher = GreedyMatcher::new(EvalConfig::default());
        let results = matcher.match_annotations(&annotations, &objects);

        let assigned: Vec<usize> = results.iter().filter_map(|r| r.matched_annotation).collect();
        let mut deduped = assigned.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(assigned.len(), deduped.len());

        let unmatched = results.iter().find(|r| r.matched_annotation.is_none());
        let unmatched = unmatched.expect("one object must run out of annotations");
        assert_eq!(unmatched.iou, 0.0);
    }

    #[test]
    fn ties_go_to_the_lowest_annotation_index() {
        let objects = vec![rect_object(1, "A", 0.0, 0.0, 10.0, 10.0)];
        let annotations = vec![
            rect_annotation(0, 0.0, 0.0, 10.0, 10.0),
            rect_annotation(1, 0.0, 0.0, 10.0, 10.0),
        ];

        let matcher = GreedyMatcher::new(EvalConfig::default());
        let results = matcher.match_annotations(&annotations, &objects);
        assert_eq!(results[0].matched_annotation, Some(0));
    }

    #[test]
    fn earlier_object_consumes_its_best_even_when_zero() {
        // The first object sees no overlap but still consumes an
        // annotation, leaving nothing for the second.
        let objects = vec![
            rect_object(1, "A", 100.0, 100.0, 10.0, 10.0),
            rect_object(2, "B", 0.0, 0.0, 10.0, 10.0),
        ];
        let annotations = vec![rect_annotation(0, 0.0, 0.0, 10.0, 10.0)];

        let matcher = GreedyMatcher::new(EvalConfig::default());
        let results = matcher.match_annotations(&annotations, &objects);
        assert_eq!(results[0].matched_annotation, Some(0));
        assert_eq!(results[0].iou, 0.0);
        assert_eq!(results[1].matched_annotation, None);
    }

    #[test]
    fn polygon_round_scores_through_the_sampled_path() {
        let square = Shape::Rect(Rect::new(0.0, 0.0, 20.0, 20.0)).to_polygon();
        let objects = vec![DetectionObject::new(1, "Pond", Shape::Polygon(square.clone()))];
        let annotations = vec![UserAnnotation::new(Shape::Polygon(square), 0)];

        let matcher = GreedyMatcher::new(EvalConfig::default());
        let results = matcher.match_annotations(&annotations, &objects);
        assert_eq!(results[0].matched_annotation, Some(0));
        assert!((results[0].iou - 1.0).abs() < 1e-12);
    }
}
