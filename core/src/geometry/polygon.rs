use crate::geometry::rect::Rect;
use serde::{Deserialize, Serialize};

/// Grid step, in canvas units, used by [`polygon_iou`] when the caller
/// passes a non-positive step. Finer steps trade compute for accuracy.
pub const DEFAULT_SAMPLE_STEP: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Implicitly closed polygon. Fewer than three vertices describe an empty
/// region: zero area, contains nothing, IoU 0 with everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn is_empty_region(&self) -> bool {
        self.points.len() < 3
    }

    /// Even-odd crossing-number membership test. Winding-order agnostic.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty_region() {
            return false;
        }

        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let pi = self.points[i];
            let pj = self.points[j];
            if ((pi.y > p.y) != (pj.y > p.y))
                && (p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Shoelace area.
    pub fn area(&self) -> f64 {
        if self.is_empty_region() {
            return 0.0;
        }

        let mut sum = 0.0;
        for i in 0..self.points.len() {
            let j = (i + 1) % self.points.len();
            sum += self.points[i].x * self.points[j].y - self.points[j].x * self.points[i].y;
        }
        (sum / 2.0).abs()
    }

    /// Axis-aligned bounding box, `None` for an empty region.
    pub fn bounds(&self) -> Option<Rect> {
        if self.is_empty_region() {
            return None;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}

/// Approximate IoU of two polygons by sampling the union bounding box on a
/// fixed grid and classifying each sample with the even-odd test.
///
/// The approximation error is bounded by the step relative to the polygons'
/// perimeter-to-area ratio and shrinks as the step decreases. Exact polygon
/// clipping is deliberately avoided; a teaching tool scoring a few dozen
/// shapes does not need it.
pub fn polygon_iou(a: &Polygon, b: &Polygon, step: f64) -> f64 {
    if a.is_empty_region() || b.is_empty_region() {
        return 0.0;
    }
    let step = if step.is_finite() && step > 0.0 {
        step
    } else {
        DEFAULT_SAMPLE_STEP
    };

    let (Some(bounds_a), Some(bounds_b)) = (a.bounds(), b.bounds()) else {
        return 0.0;
    };
    let min_x = bounds_a.x.min(bounds_b.x);
    let min_y = bounds_a.y.min(bounds_b.y);
    let max_x = bounds_a.right().max(bounds_b.right());
    let max_y = bounds_a.bottom().max(bounds_b.bottom());

    let mut intersection = 0u64;
    let mut union = 0u64;
    let mut y = min_y;
    while y <= max_y {
        let mut x = min_x;
        while x <= max_x {
            let sample = Point::new(x, y);
            let in_a = a.contains(sample);
            let in_b = b.contains(sample);
            if in_a && in_b {
                intersection += 1;
            }
            if in_a || in_b {
                union += 1;
            }
            x += step;
        }
        y += step;
    }

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
