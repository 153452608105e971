//! The classic Fibonacci tiling: squares laid around a growing rectangle,
//! each holding a quarter circle so that the arcs chain into a spiral.

use strum::{Display, EnumString};

use crate::Point;

/// A square given by its lower-left corner and side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub size: u64,
}

impl Square {
    pub fn new(x: f64, y: f64, size: u64) -> Self {
        Square { x, y, size }
    }

    pub fn side(&self) -> f64 {
        self.size as f64
    }

    pub fn lower_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn upper_right(&self) -> Point {
        Point::new(self.x + self.side(), self.y + self.side())
    }
}

/// Side of the growing rectangle a square is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Above,
    Left,
    Below,
    Right,
}

impl Direction {
    /// The order in which squares are attached.
    pub const CYCLE: [Direction; 4] = [
        Direction::Above,
        Direction::Left,
        Direction::Below,
        Direction::Right,
    ];

    /// Placement direction of the square at `index` in the tiling. The first
    /// two squares sit side by side and have no direction.
    pub fn of_square(index: usize) -> Option<Direction> {
        index.checked_sub(2).map(|i| Direction::CYCLE[i % 4])
    }
}

/// Lays out squares of the given sizes in the Fibonacci tiling.
///
/// The first square sits at the origin and the second immediately to its
/// right. Every further square is attached flush to the bounding rectangle of
/// all previous squares, cycling above, left, below, right.
pub fn place_squares(sizes: &[u64]) -> Vec<Square> {
    let (first, second) = match sizes {
        [] => return vec![],
        [only] => return vec![Square::new(0.0, 0.0, *only)],
        [first, second, ..] => (*first, *second),
    };

    let mut squares = Vec::with_capacity(sizes.len());
    squares.push(Square::new(0.0, 0.0, first));
    squares.push(Square::new(first as f64, 0.0, second));

    let (mut x_min, mut y_min) = (0.0, 0.0);
    let mut width = (first + second) as f64;
    let mut height = first.max(second) as f64;

    for (&size, direction) in sizes[2..].iter().zip(Direction::CYCLE.iter().cycle()) {
        let s = size as f64;
        let square = match *direction {
            Direction::Above => {
                let square = Square::new(x_min, y_min + height, size);
                height += s;
                square
            }
            Direction::Left => {
                x_min -= s;
                width += s;
                Square::new(x_min, y_min, size)
            }
            Direction::Below => {
                y_min -= s;
                height += s;
                Square::new(x_min, y_min, size)
            }
            Direction::Right => {
                let square = Square::new(x_min + width, y_min, size);
                width += s;
                square
            }
        };
        squares.push(square);
    }

    log::trace!("Placed {} squares, bounding box {width}x{height}", squares.len());
    squares
}

/// A quarter circle, angles in degrees measured counter-clockwise from the
/// positive x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterArc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl QuarterArc {
    pub fn point_at(&self, deg: f64) -> Point {
        let rad = deg.to_radians();
        Point::new(
            self.center.x + self.radius * rad.cos(),
            self.center.y + self.radius * rad.sin(),
        )
    }

    pub fn start(&self) -> Point {
        self.point_at(self.start_deg)
    }

    pub fn end(&self) -> Point {
        self.point_at(self.end_deg)
    }

    /// Polyline approximation of the arc with `segments` segments.
    pub fn points(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let sweep = self.end_deg - self.start_deg;
        (0..=segments)
            .map(|i| self.point_at(self.start_deg + sweep * i as f64 / segments as f64))
            .collect()
    }
}

/// The quarter arc inscribed in `square`, oriented so that it joins the arcs
/// of its neighbours in the tiling.
pub fn quarter_arc(square: &Square, direction: Direction) -> QuarterArc {
    let Square { x, y, .. } = *square;
    let s = square.side();
    let (center, start_deg, end_deg) = match direction {
        Direction::Above => (Point::new(x + s, y + s), 180.0, 270.0),
        Direction::Left => (Point::new(x, y + s), 270.0, 360.0),
        Direction::Below => (Point::new(x, y), 0.0, 90.0),
        Direction::Right => (Point::new(x + s, y), 90.0, 180.0),
    };
    QuarterArc {
        center,
        radius: s,
        start_deg,
        end_deg,
    }
}

/// Arcs for every square from the third onwards.
pub fn tiling_arcs(squares: &[Square]) -> Vec<QuarterArc> {
    squares
        .iter()
        .enumerate()
        .filter_map(|(i, square)| Direction::of_square(i).map(|d| quarter_arc(square, d)))
        .collect()
}
