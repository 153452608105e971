//! Rendering of the golden spiral and the Fibonacci tiling.
//!
//! Drawing goes through the [`Canvas`] trait so that the plotting logic in
//! [`plot_spiral`] can be exercised without an image backend. [`Figure`] is
//! the canvas that ends up as a PNG file or in an image viewer.

mod fonts;
pub mod figure;
pub mod plot;
mod viewer;

use std::path::{Path, PathBuf};

use fibspiral_geometry::{Bounds, Point, QuarterArc, Square};

pub use figure::{Figure, Shape};
pub use plot::{plot_spiral, PlotOptions};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("nothing to draw")]
    Empty,
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not open {} in a viewer: {reason}", path.display())]
    Viewer { path: PathBuf, reason: String },
}

/// The drawing operations the plot needs.
pub trait Canvas {
    /// Restricts the visible area to `bounds`.
    fn set_bounds(&mut self, bounds: Bounds);

    fn set_title(&mut self, title: &str);

    fn set_axis_labels(&mut self, x: &str, y: &str);

    /// Draws an open polyline through `points`.
    fn draw_line(&mut self, points: &[Point], width: u32);

    /// Draws the outline of `square`.
    fn draw_rectangle(&mut self, square: &Square, width: u32);

    fn draw_arc(&mut self, arc: &QuarterArc, width: u32);

    /// Writes the drawing to an image file at `path`.
    fn save(&self, path: &Path) -> Result<(), RenderError>;

    /// Displays the drawing to the user.
    fn show(&self) -> Result<(), RenderError>;
}
