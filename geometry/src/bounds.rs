use std::fmt;

use crate::{Point, Square};

/// An axis-aligned view rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Smallest bounds containing all `points`, or `None` if there are none.
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds::new(p.x, p.x, p.y, p.y),
                Some(b) => Bounds::new(
                    b.x_min.min(p.x),
                    b.x_max.max(p.x),
                    b.y_min.min(p.y),
                    b.y_max.max(p.y),
                ),
            })
        })
    }

    /// Smallest bounds containing all `squares`.
    pub fn of_squares(squares: &[Square]) -> Option<Self> {
        let corners: Vec<Point> = squares
            .iter()
            .flat_map(|s| [s.lower_left(), s.upper_right()])
            .collect();
        Bounds::of_points(&corners)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether all four edges are finite numbers.
    pub fn is_finite(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Grows every side by the absolute amount `pad`.
    pub fn padded(&self, pad: f64) -> Self {
        Bounds::new(
            self.x_min - pad,
            self.x_max + pad,
            self.y_min - pad,
            self.y_max + pad,
        )
    }

    /// Grows every side by `fraction` of the extent along its axis.
    pub fn with_margins(&self, fraction: f64) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Bounds::new(
            self.x_min - dx,
            self.x_max + dx,
            self.y_min - dy,
            self.y_max + dy,
        )
    }

    /// Widens the shorter axis around its center so both axes span the same
    /// range.
    pub fn equal_aspect(&self) -> Self {
        let span = self.width().max(self.height());
        let cx = (self.x_min + self.x_max) / 2.0;
        let cy = (self.y_min + self.y_max) / 2.0;
        Bounds::new(
            cx - span / 2.0,
            cx + span / 2.0,
            cy - span / 2.0,
            cy + span / 2.0,
        )
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}] x [{:.3}, {:.3}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::place_squares;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn empty() {
        assert_eq!(Bounds::of_points(&[] as &[Point]), None);
        assert_eq!(Bounds::of_squares(&[]), None);
    }

    #[test]
    fn squares_padded() {
        let squares = place_squares(&[1, 1, 2, 3, 5]);
        let bounds = Bounds::of_squares(&squares).unwrap().padded(0.5);
        assert_eq!(bounds, Bounds::new(-3.5, 2.5, -5.5, 3.5));
    }

    #[test]
    fn margins_and_aspect() {
        let b = Bounds::new(0.0, 10.0, 0.0, 4.0).with_margins(0.1);
        let expected = [-1.0, 11.0, -0.4, 4.4];
        for (actual, expected) in [b.x_min, b.x_max, b.y_min, b.y_max].iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-12);
        }

        let square = Bounds::new(0.0, 10.0, 0.0, 4.0).equal_aspect();
        assert_eq!(square, Bounds::new(0.0, 10.0, -3.0, 7.0));
        assert_eq!(square.width(), square.height());
    }

    #[test]
    fn finiteness() {
        assert!(Bounds::new(-1.0, 1.0, -2.0, 2.0).is_finite());
        assert!(!Bounds::new(f64::NAN, 1.0, -2.0, 2.0).is_finite());
        assert!(!Bounds::new(-1.0, 1.0, -2.0, f64::INFINITY).is_finite());

        // A spiral whose radius overflows cannot be framed.
        let points = crate::golden_spiral_points(0.2, 1500, 4);
        let bounds = Bounds::of_points(&points).unwrap().with_margins(0.1);
        assert!(!bounds.is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(
            Bounds::new(-1.0, 1.0, 0.0, 2.5).to_string(),
            "[-1.000, 1.000] x [0.000, 2.500]"
        );
    }
}
