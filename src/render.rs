//! Figure rasterization with `plotters`
//!
//! Each [Axes] gets the drawing area of its [Span](crate::Span) and a cartesian chart on its view
//! limits. The chart mesh draws the ticks, tick labels and grid, and the recorded artists are
//! drawn in data coordinates on the chart plotting area.

use crate::{
    backend::Backend,
    canvas::{Anchor, Artist, Coordinates, Text},
    figure::{Axes, Figure, Grid},
    style::{AxisSide, FillStyle, LineStyle, Rgb, Spine},
    Error, Result,
};
use plotters::{
    coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift},
    element::Text as Label,
    prelude::*,
    style::{
        text_anchor::{HPos, Pos, VPos},
        FontTransform,
    },
};
use std::path::Path;
use strum::IntoEnumIterator;

/// Number of points along the outline of an ellipse
const ELLIPSE_STEPS: usize = 64;
/// Tick label font size in points
const TICK_FONTSIZE: f64 = 10.;
/// Spine and tick width in points
const SPINE_WIDTH: f64 = 0.8;
/// Number of tick labels along an axis
const TICK_LABELS: usize = 6;

type Plot<DB> = DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn render_error(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}

fn rgb(color: &Rgb) -> RGBColor {
    let (r, g, b) = color.as_u8();
    RGBColor(r, g, b)
}

impl Figure {
    /// Renders the figure into `path` with the figure backend
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let size = self.pixels();
        log::info!("saving {:?} ({}x{}) with the {} backend", path, size.0, size.1, self.backend());
        match self.backend() {
            Backend::Bitmap => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                self.draw_on(&root)?;
                root.present().map_err(render_error)
            }
            Backend::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                self.draw_on(&root)?;
                root.present().map_err(render_error)
            }
        }
    }
    fn draw_on<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(render_error)?;
        let scale = self.dpi() / 72.;
        for axes in self.axes() {
            Layout::new(axes, self.pixels(), scale).draw(axes, root)?;
        }
        Ok(())
    }
}

/// What is drawn around the data of an axes
#[derive(Debug, Clone, PartialEq)]
struct Decorations {
    spines: Vec<Spine>,
    x_axis: bool,
    y_axis: bool,
    grid: Option<Grid>,
}
impl Decorations {
    fn new(axes: &Axes) -> Self {
        let style = axes.style();
        Self {
            spines: Spine::iter().filter(|s| style.has_spine(*s)).collect(),
            x_axis: style.has_axis(AxisSide::X),
            y_axis: style.has_axis(AxisSide::Y),
            grid: axes.grid().copied(),
        }
    }
    /// True if the chart mesh has anything to draw
    fn has_mesh(&self) -> bool {
        self.x_axis || self.y_axis || self.grid.is_some()
    }
}

/// Data coordinates of a spine
fn spine_segment(spine: Spine, (x0, x1): (f64, f64), (y0, y1): (f64, f64)) -> [(f64, f64); 2] {
    match spine {
        Spine::Left => [(x0, y0), (x0, y1)],
        Spine::Bottom => [(x0, y0), (x1, y0)],
        Spine::Right => [(x1, y0), (x1, y1)],
        Spine::Top => [(x0, y1), (x1, y1)],
    }
}

/// Pixel placement and view limits of an axes
#[derive(Debug, Clone, PartialEq)]
struct Layout {
    decorations: Decorations,
    origin: (u32, u32),
    size: (u32, u32),
    /// height of the x tick labels and width of the y tick labels
    label_areas: (u32, u32),
    xlim: (f64, f64),
    ylim: (f64, f64),
    /// pixels per point
    scale: f64,
}
impl Layout {
    fn new(axes: &Axes, (width, height): (u32, u32), scale: f64) -> Self {
        let decorations = Decorations::new(axes);
        let span = axes.span();
        let (w, h) = (width as f64, height as f64);
        let px = |v: f64| v.max(0.).round() as u32;
        let origin = (px(span.left * w), px((1. - span.bottom - span.height) * h));
        let size = (px(span.width * w), px(span.height * h));
        let font = TICK_FONTSIZE * scale;
        let label_areas = (
            if decorations.x_axis { px(2. * font) } else { 0 },
            if decorations.y_axis { px(3.5 * font) } else { 0 },
        );
        let (mut xlim, mut ylim) = axes.limits();
        if axes.is_aspect_equal() {
            let pw = size.0.saturating_sub(label_areas.1).max(1) as f64;
            let ph = size.1.saturating_sub(label_areas.0).max(1) as f64;
            let s = (pw / (xlim.1 - xlim.0)).min(ph / (ylim.1 - ylim.0));
            let expand = |(lo, hi): (f64, f64), pixels: f64| {
                let (center, half) = (0.5 * (lo + hi), 0.5 * pixels / s);
                (center - half, center + half)
            };
            xlim = expand(xlim, pw);
            ylim = expand(ylim, ph);
        }
        Self {
            decorations,
            origin,
            size,
            label_areas,
            xlim,
            ylim,
            scale,
        }
    }
    fn width(&self, points: f64) -> u32 {
        ((points * self.scale).round() as u32).max(1)
    }
    fn line_style(&self, style: &LineStyle) -> ShapeStyle {
        rgb(&style.color)
            .mix(style.alpha)
            .stroke_width(self.width(style.linewidth))
    }
    fn draw<DB: DrawingBackend>(&self, axes: &Axes, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let area = root.clone().shrink(self.origin, self.size);
        let ((x0, x1), (y0, y1)) = (self.xlim, self.ylim);
        let mut chart = ChartBuilder::on(&area)
            .set_label_area_size(LabelAreaPosition::Bottom, self.label_areas.0)
            .set_label_area_size(LabelAreaPosition::Left, self.label_areas.1)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(render_error)?;
        let spine_style = BLACK.stroke_width(self.width(SPINE_WIDTH));
        if self.decorations.has_mesh() {
            let mut mesh = chart.configure_mesh();
            mesh.x_labels(TICK_LABELS)
                .y_labels(TICK_LABELS)
                .label_style(("sans-serif", TICK_FONTSIZE * self.scale).into_font())
                .axis_style(spine_style);
            if !self.decorations.x_axis {
                mesh.disable_x_axis();
            }
            if !self.decorations.y_axis {
                mesh.disable_y_axis();
            }
            match &self.decorations.grid {
                Some(grid) => {
                    let major = self.line_style(&grid.style);
                    let minor = if grid.minor {
                        major
                    } else {
                        WHITE.mix(0.).stroke_width(1)
                    };
                    mesh.bold_line_style(major).light_line_style(minor);
                }
                None => {
                    mesh.disable_mesh();
                }
            }
            mesh.draw().map_err(render_error)?;
        }
        let plot = chart.plotting_area();
        for artist in axes.artists() {
            self.artist(artist, plot)?;
        }
        for spine in &self.decorations.spines {
            let segment = spine_segment(*spine, self.xlim, self.ylim).to_vec();
            plot.draw(&PathElement::new(segment, spine_style))
                .map_err(render_error)?;
        }
        Ok(())
    }
    fn artist<DB: DrawingBackend>(&self, artist: &Artist, plot: &Plot<DB>) -> Result<()> {
        match artist {
            Artist::Line { points, style } => plot
                .draw(&PathElement::new(finite(points), self.line_style(style)))
                .map_err(render_error),
            Artist::Polygon { points, style } => self.polygon(points, style, plot),
            Artist::Ellipse { ellipse, style } => {
                self.polygon(&ellipse.outline(ELLIPSE_STEPS), style, plot)
            }
            Artist::Text(text) => self.text(text, plot),
            Artist::HLine { y, style } => plot
                .draw(&PathElement::new(
                    vec![(self.xlim.0, *y), (self.xlim.1, *y)],
                    self.line_style(style),
                ))
                .map_err(render_error),
            Artist::VLine { x, style } => plot
                .draw(&PathElement::new(
                    vec![(*x, self.ylim.0), (*x, self.ylim.1)],
                    self.line_style(style),
                ))
                .map_err(render_error),
        }
    }
    fn polygon<DB: DrawingBackend>(
        &self,
        points: &[[f64; 2]],
        style: &FillStyle,
        plot: &Plot<DB>,
    ) -> Result<()> {
        let vertices = finite(points);
        plot.draw(&Polygon::new(
            vertices.clone(),
            rgb(&style.facecolor).mix(style.alpha).filled(),
        ))
        .map_err(render_error)?;
        if let (Some(edgecolor), true) = (style.edgecolor, style.linewidth > 0.) {
            let mut outline = vertices;
            if let Some(&first) = outline.first() {
                outline.push(first);
            }
            plot.draw(&PathElement::new(
                outline,
                rgb(&edgecolor)
                    .mix(style.alpha)
                    .stroke_width(self.width(style.linewidth)),
            ))
            .map_err(render_error)?;
        }
        Ok(())
    }
    fn text<DB: DrawingBackend>(&self, text: &Text, plot: &Plot<DB>) -> Result<()> {
        let [x, y] = text.position;
        let position = match text.coordinates {
            Coordinates::Data => (x, y),
            Coordinates::Axes => (
                self.xlim.0 + x * (self.xlim.1 - self.xlim.0),
                self.ylim.0 + y * (self.ylim.1 - self.ylim.0),
            ),
        };
        // counter-clockwise rotations, snapped to quarter turns
        let transform = match ((text.rotation / 90.).round() as i64).rem_euclid(4) {
            1 => FontTransform::Rotate270,
            2 => FontTransform::Rotate180,
            3 => FontTransform::Rotate90,
            _ => FontTransform::None,
        };
        let pos = match text.anchor {
            Anchor::BottomLeft => Pos::new(HPos::Left, VPos::Bottom),
            Anchor::Center => Pos::new(HPos::Center, VPos::Center),
        };
        let style = TextStyle::from(("sans-serif", text.fontsize * self.scale).into_font())
            .transform(transform)
            .pos(pos);
        plot.draw(&Label::new(text.content.clone(), position, style))
            .map_err(render_error)
    }
}

fn finite(points: &[[f64; 2]]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|p| p[0].is_finite() && p[1].is_finite())
        .map(|p| (p[0], p[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        canvas::Canvas,
        figure::{figure, Span},
        style::*,
    };

    #[test]
    fn span_placement() {
        let mut ax = Axes::new(Span::new(0.1, 0.2, 0.5, 0.5), AXES_BLANK);
        ax.set_xlim(0., 10.).set_ylim(-1., 1.);
        let layout = Layout::new(&ax, (1000, 800), 1.);
        assert_eq!(layout.origin, (100, 240));
        assert_eq!(layout.size, (500, 400));
        assert_eq!(layout.label_areas, (0, 0));
        assert_eq!((layout.xlim, layout.ylim), ((0., 10.), (-1., 1.)));
    }

    #[test]
    fn aspect_equal_expands_limits() {
        let mut ax = Axes::new(Span::new(0., 0., 1., 1.), AXES_BLANK);
        ax.set_xlim(-1., 1.).set_ylim(-1., 1.).set_aspect_equal();
        let layout = Layout::new(&ax, (1600, 800), 1.);
        assert_eq!(layout.ylim, (-1., 1.));
        assert!((layout.xlim.0 + 2.).abs() < 1e-12 && (layout.xlim.1 - 2.).abs() < 1e-12);
    }

    #[test]
    fn line_widths_in_points() {
        let ax = Axes::new(Span::new(0., 0., 1., 1.), AXES_BLANK);
        let layout = Layout::new(&ax, (100, 100), 240. / 72.);
        assert_eq!(layout.width(0.1), 1);
        assert_eq!(layout.width(3.), 10);
    }

    #[test]
    fn axes_styles_decorations() {
        let span = Span::new(0., 0., 1., 1.);
        let blank = Decorations::new(&Axes::new(span, AXES_BLANK));
        assert!(blank.spines.is_empty());
        assert!(!blank.has_mesh());

        let mut minimal = Axes::new(span, AXES_MINIMAL);
        minimal.add_grid(false);
        let minimal = Decorations::new(&minimal);
        assert_eq!(minimal.spines, vec![Spine::Left, Spine::Bottom]);
        assert!(minimal.x_axis && minimal.y_axis);
        assert_eq!(minimal.grid, Some(Grid::default()));

        let matplotlib = Decorations::new(&Axes::new(span, AXES_MATPLOTLIB));
        assert_eq!(matplotlib.spines.len(), 4);
        assert!(matplotlib.grid.is_none() && matplotlib.has_mesh());

        let layout = Layout::new(&Axes::new(span, AXES_MINIMAL), (100, 100), 1.);
        assert_eq!(layout.label_areas, (20, 35));
    }

    #[test]
    fn spines_follow_the_limits() {
        let (xlim, ylim) = ((0., 2.), (-1., 1.));
        assert_eq!(spine_segment(Spine::Left, xlim, ylim), [(0., -1.), (0., 1.)]);
        assert_eq!(spine_segment(Spine::Bottom, xlim, ylim), [(0., -1.), (2., -1.)]);
        assert_eq!(spine_segment(Spine::Right, xlim, ylim), [(2., -1.), (2., 1.)]);
        assert_eq!(spine_segment(Spine::Top, xlim, ylim), [(0., 1.), (2., 1.)]);
    }

    fn small_figure() -> Result<Figure> {
        figure(
            FigureStyle {
                rows: 240,
                cols: 320,
                fontsize: 1.,
            },
            100.,
        )
    }

    #[test]
    fn save_bitmap() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut fig = small_figure()?;
        let boxed = AxesStyle {
            axes: &[],
            grid: true,
            ..AXES_MATPLOTLIB
        };
        let ax = fig.add_axes([0.1, 0.1, 0.8, 0.8], boxed);
        ax.plot(vec![[0., 0.], [1., 1.]], &LineStyle::new(Rgb::RED));
        ax.fill(vec![[0., 0.], [1., 0.], [1., 1.]], &FillStyle::new(Rgb::BLUE).alpha(0.3));
        if fig.backend() == Backend::Bitmap {
            let path = std::env::temp_dir().join("plot-addons-render-test.png");
            fig.save(&path)?;
            assert!(path.exists());
        }
        Ok(())
    }

    #[test]
    fn save_with_ticks_and_labels() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut fig = small_figure()?;
        let ax = fig.add_axes([0.1, 0.1, 0.85, 0.85], AXES_MINIMAL);
        ax.add_grid(true);
        ax.plot(vec![[-3., 0.], [5., 12.]], &LineStyle::default());
        ax.axhline(6., &LineStyle::new(Rgb::GREY));
        ax.text(Text::new("label", [0.5, 0.5]).in_axes_coordinates().rotation(90.));
        let ax = fig.add_axes([0.6, 0.6, 0.3, 0.3], AXES_BLANK);
        ax.set_aspect_equal();
        ax.ellipse(
            crate::canvas::Ellipse {
                center: [0., 0.],
                width: 1.,
                height: 2.,
                angle: 0.5,
            },
            &FillStyle::new(Rgb::RED).edge(Rgb::BLACK, 1.),
        );
        let path = std::env::temp_dir().join(match fig.backend() {
            Backend::Bitmap => "plot-addons-render-ticks.png",
            Backend::Svg => "plot-addons-render-ticks.svg",
        });
        fig.save(&path)?;
        assert!(path.exists());
        Ok(())
    }
}
