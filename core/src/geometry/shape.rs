use crate::geometry::polygon::{polygon_iou, Point, Polygon};
use crate::geometry::rect::Rect;
use serde::{Deserialize, Serialize};

/// Ground-truth or user-drawn geometry: a rectangle or a polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Rect),
    Polygon(Polygon),
}

impl Shape {
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Shape::Rect(rect) => {
                if rect.is_degenerate() {
                    None
                } else {
                    Some(*rect)
                }
            }
            Shape::Polygon(polygon) => polygon.bounds(),
        }
    }

    /// Polygon form of the shape. A degenerate rectangle becomes an empty
    /// region so the sampled path scores it as IoU 0.
    pub fn to_polygon(&self) -> Polygon {
        match self {
            Shape::Rect(rect) => {
                if rect.is_degenerate() {
                    return Polygon::new(Vec::new());
                }
                Polygon::new(vec![
                    Point::new(rect.x, rect.y),
                    Point::new(rect.right(), rect.y),
                    Point::new(rect.right(), rect.bottom()),
                    Point::new(rect.x, rect.bottom()),
                ])
            }
            Shape::Polygon(polygon) => polygon.clone(),
        }
    }
}

/// IoU between two shapes. Rectangle pairs use the exact formula; any pair
/// involving a polygon goes through grid sampling, with rectangles promoted
/// to their four-corner polygon form.
pub fn shape_iou(a: &Shape, b: &Shape, step: f64) -> f64 {
    match (a, b) {
        (Shape::Rect(ra), Shape::Rect(rb)) => ra.iou(rb),
        _ => polygon_iou(&a.to_polygon(), &b.to_polygon(), step),
    }
}
