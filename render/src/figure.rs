use std::{
    env, fs,
    path::{Path, PathBuf},
};

use fibspiral_geometry::{Bounds, Point, QuarterArc, Square};
use plotters::prelude::*;

use crate::{fonts, viewer, Canvas, RenderError};

/// Image size in pixels: 8 inches at 160 dpi.
pub const DEFAULT_SIZE: (u32, u32) = (1280, 1280);

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const OUTLINE_COLOR: RGBColor = BLACK;
const ARC_SEGMENTS: usize = 64;
const TITLE_FONT_SIZE: f64 = 32.0;

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { points: Vec<Point>, width: u32 },
    Rectangle { square: Square, width: u32 },
    Arc { arc: QuarterArc, width: u32 },
}

impl Shape {
    /// Points that must be visible for the shape to be fully in view.
    fn extent(&self) -> Vec<Point> {
        match self {
            Shape::Line { points, .. } => points.clone(),
            Shape::Rectangle { square, .. } => vec![square.lower_left(), square.upper_right()],
            Shape::Arc { arc, .. } => arc.points(ARC_SEGMENTS),
        }
    }
}

/// A canvas that records what is drawn on it and renders to a PNG on
/// [`Canvas::save`] or [`Canvas::show`].
#[derive(Debug, Clone)]
pub struct Figure {
    size: (u32, u32),
    bounds: Option<Bounds>,
    title: String,
    x_label: String,
    y_label: String,
    shapes: Vec<Shape>,
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new(DEFAULT_SIZE)
    }
}

impl Figure {
    pub fn new(size: (u32, u32)) -> Self {
        Figure {
            size,
            bounds: None,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            shapes: vec![],
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The explicitly set bounds, or the extent of all shapes with a small
    /// margin.
    fn view_bounds(&self) -> Option<Bounds> {
        let bounds = match self.bounds {
            Some(bounds) => bounds,
            None => {
                let points: Vec<Point> = self.shapes.iter().flat_map(Shape::extent).collect();
                Bounds::of_points(&points)?.with_margins(0.05)
            }
        };
        // plotters cannot map an empty range.
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            Some(bounds.padded(1.0))
        } else {
            Some(bounds)
        }
    }

    fn render(&self, path: &Path) -> Result<(), RenderError> {
        self.render_with_text(path, fonts::text_available())
    }

    /// Renders to `path`, drawing title and axis labels only if `text` is set.
    fn render_with_text(&self, path: &Path, mut text: bool) -> Result<(), RenderError> {
        let bounds = self.view_bounds().ok_or(RenderError::Empty)?;
        if !bounds.is_finite() {
            return Err(RenderError::Drawing(
                "spiral exceeds floating point range".to_string(),
            ));
        }
        log::debug!("Rendering {} shapes in {bounds}", self.shapes.len());

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let plot_area = if text {
            match root.titled(&self.title, (fonts::FAMILY, TITLE_FONT_SIZE)) {
                Ok(area) => area,
                Err(e) => {
                    log::warn!("Could not draw the title, omitting text: {e}");
                    text = false;
                    root.clone()
                }
            }
        } else {
            root.clone()
        };

        {
            let mut builder = ChartBuilder::on(&plot_area);
            builder.margin(20);
            if text {
                builder.x_label_area_size(50).y_label_area_size(60);
            }
            let mut chart = builder
                .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
                .map_err(drawing_error)?;

            let mut mesh = chart.configure_mesh();
            mesh.bold_line_style(BLACK.mix(0.2).stroke_width(1))
                .light_line_style(BLACK.mix(0.05).stroke_width(1));
            if text {
                mesh.x_desc(&self.x_label).y_desc(&self.y_label);
            } else {
                mesh.x_labels(0).y_labels(0);
            }
            mesh.draw().map_err(drawing_error)?;

            for shape in &self.shapes {
                let drawn = match shape {
                    Shape::Line { points, width } => chart.draw_series(LineSeries::new(
                        points.iter().copied().map(<(f64, f64)>::from),
                        LINE_COLOR.stroke_width(*width),
                    )),
                    Shape::Rectangle { square, width } => {
                        let corners: [(f64, f64); 2] =
                            [square.lower_left().into(), square.upper_right().into()];
                        chart.draw_series(std::iter::once(Rectangle::new(
                            corners,
                            OUTLINE_COLOR.stroke_width(*width),
                        )))
                    }
                    Shape::Arc { arc, width } => chart.draw_series(LineSeries::new(
                        arc.points(ARC_SEGMENTS)
                            .into_iter()
                            .map(<(f64, f64)>::from),
                        OUTLINE_COLOR.stroke_width(*width),
                    )),
                };
                drawn.map_err(drawing_error)?;
            }
        }

        root.present().map_err(drawing_error)?;
        Ok(())
    }
}

fn drawing_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Drawing(e.to_string())
}

impl Canvas for Figure {
    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_axis_labels(&mut self, x: &str, y: &str) {
        self.x_label = x.to_string();
        self.y_label = y.to_string();
    }

    fn draw_line(&mut self, points: &[Point], width: u32) {
        self.shapes.push(Shape::Line {
            points: points.to_vec(),
            width,
        });
    }

    fn draw_rectangle(&mut self, square: &Square, width: u32) {
        self.shapes.push(Shape::Rectangle {
            square: *square,
            width,
        });
    }

    fn draw_arc(&mut self, arc: &QuarterArc, width: u32) {
        self.shapes.push(Shape::Arc { arc: *arc, width });
    }

    fn save(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.render(path)?;
        log::info!("Wrote {}.", path.display());
        Ok(())
    }

    fn show(&self) -> Result<(), RenderError> {
        let path: PathBuf = env::temp_dir().join(format!("fibspiral-{}.png", std::process::id()));
        self.render(&path)?;
        log::info!("Opening {} in the image viewer.", path.display());
        viewer::open(&path)
    }
}
