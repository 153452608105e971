//! Geometry of the Fibonacci spiral: the sequence itself, the golden spiral
//! curve, the classic square tiling with its quarter arcs and the view
//! bounds used to frame them.
//!
//! Nothing in here knows how the result is drawn.

pub mod bounds;
pub mod sequence;
pub mod spiral;
pub mod tiling;

pub use bounds::Bounds;
pub use sequence::{fib_sequence, tiling_sizes};
pub use spiral::{golden_spiral_points, GOLDEN_RATIO};
pub use tiling::{place_squares, quarter_arc, tiling_arcs, Direction, QuarterArc, Square};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
