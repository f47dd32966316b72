use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas coordinates, top-left origin.
///
/// A rectangle with zero or negative extent is degenerate: it has zero
/// area and an IoU of 0 against every other rectangle. A click with no
/// drag produces one, so this is an expected input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            self.w * self.h
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Intersection over union with another rectangle.
    ///
    /// Symmetric, always in `[0, 1]`, exactly `1.0` for coordinate-identical
    /// non-degenerate rectangles, and `0.0` whenever the union area is zero.
    pub fn iou(&self, other: &Rect) -> f64 {
        if self.is_degenerate() || other.is_degenerate() {
            return 0.0;
        }

        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        let intersection = if x2 <= x1 || y2 <= y1 {
            0.0
        } else {
            (x2 - x1) * (y2 - y1)
        };

        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            0.0
        } else {
            intersection / union
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iou_of_identical_rect_is_one() {
        let a = Rect::new(3.0, 7.0, 20.0, 12.0);
        assert!((a.iou(&a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn iou_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.iou(&b), b.iou(&a));
    }

    #[test]
    fn disjoint_rects_have_zero_iou() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn quarter_overlap_matches_hand_computation() {
        // Intersection 5x5 = 25, union 100 + 100 - 25 = 175.
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!((a.iou(&b) - 25.0 / 175.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_rects_yield_zero() {
        let flat = Rect::new(5.0, 5.0, 0.0, 10.0);
        let negative = Rect::new(5.0, 5.0, -3.0, 4.0);
        let solid = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(flat.iou(&solid), 0.0);
        assert_eq!(negative.iou(&solid), 0.0);
        assert_eq!(flat.iou(&negative), 0.0);
        assert_eq!(flat.area(), 0.0);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.iou(&b), 0.0);
    }
}
