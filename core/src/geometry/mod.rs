pub mod polygon;
pub mod rect;
pub mod shape;

pub use polygon::{polygon_iou, Point, Polygon, DEFAULT_SAMPLE_STEP};
pub use rect::Rect;
pub use shape::{shape_iou, Shape};
