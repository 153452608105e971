use fibspiral_geometry::{
    golden_spiral_points, place_squares, spiral::DEFAULT_POINTS_PER_QUARTER, tiling_arcs,
    tiling_sizes, Bounds,
};

use crate::Canvas;

const SPIRAL_WIDTH: u32 = 2;
const SQUARE_WIDTH: u32 = 1;
const ARC_WIDTH: u32 = 2;

/// What to plot and how to frame it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Number of Fibonacci terms the plot accompanies. Decides how many
    /// squares the tiling overlay gets.
    pub n_numbers: usize,
    pub quarter_turns: u32,
    /// Overlay the Fibonacci tiling and its quarter arcs.
    pub show_squares: bool,
    pub start_radius: f64,
    pub points_per_quarter: u32,
    /// Absolute padding around the tiling.
    pub square_padding: f64,
    /// Relative margin around the bare spiral.
    pub spiral_margin: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            n_numbers: 20,
            quarter_turns: 12,
            show_squares: false,
            start_radius: 0.2,
            points_per_quarter: DEFAULT_POINTS_PER_QUARTER,
            square_padding: 0.5,
            spiral_margin: 0.1,
            title: "Fibonacci / Golden Spiral".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
        }
    }
}

/// Draws the golden spiral onto `canvas`, optionally with the Fibonacci
/// tiling, and frames the view around it.
pub fn plot_spiral<C: Canvas + ?Sized>(canvas: &mut C, options: &PlotOptions) {
    let points = golden_spiral_points(
        options.start_radius,
        options.quarter_turns,
        options.points_per_quarter,
    );
    log::debug!(
        "Sampled {} spiral points over {} quarter turns",
        points.len(),
        options.quarter_turns
    );
    canvas.draw_line(&points, SPIRAL_WIDTH);

    let bounds = if options.show_squares {
        let squares = place_squares(&tiling_sizes(options.n_numbers));
        log::debug!("Overlaying {} squares", squares.len());
        for square in &squares {
            canvas.draw_rectangle(square, SQUARE_WIDTH);
        }
        for arc in tiling_arcs(&squares) {
            canvas.draw_arc(&arc, ARC_WIDTH);
        }
        Bounds::of_squares(&squares).map(|b| b.padded(options.square_padding))
    } else {
        Bounds::of_points(&points).map(|b| b.with_margins(options.spiral_margin).equal_aspect())
    };

    if let Some(bounds) = bounds {
        log::debug!("View bounds {bounds}");
        canvas.set_bounds(bounds);
    }
    canvas.set_title(&options.title);
    canvas.set_axis_labels(&options.x_label, &options.y_label);
}
