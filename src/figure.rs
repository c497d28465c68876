//! Figures and axes
//!
//! A [Figure] is sized from a [FigureStyle] preset and a dpi, such that the rendered image is
//! always `cols x rows` pixels whatever the font scale.
//! [Axes] are sub-regions of the figure that record what is drawn on them.

use crate::{
    backend::{self, Backend},
    canvas::{Artist, Canvas, Ellipse, Text},
    style::{AxesStyle, FigureStyle, FillStyle, LineStyle, Rgb},
    Error, Result,
};

/// Creates a figure
///
/// The figure is `(cols/dpi/scale, rows/dpi/scale)` inches large at `dpi*scale` dots per inch,
/// with `scale` the style font scale.
pub fn figure(style: FigureStyle, dpi: f64) -> Result<Figure> {
    if dpi == 0. {
        return Err(Error::ZeroDpi);
    }
    if style.fontsize == 0. {
        return Err(Error::ZeroFontScale);
    }
    let backend = backend::current();
    Ok(Figure {
        style,
        dpi,
        backend,
        axes: Vec::new(),
    })
}

/// Normalized axes placement in the figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}
impl Span {
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }
}
impl From<[f64; 4]> for Span {
    fn from(v: [f64; 4]) -> Self {
        Span::new(v[0], v[1], v[2], v[3])
    }
}

/// A figure made of axes
#[derive(Debug)]
pub struct Figure {
    style: FigureStyle,
    dpi: f64,
    backend: Backend,
    axes: Vec<Axes>,
}
impl Figure {
    pub fn style(&self) -> &FigureStyle {
        &self.style
    }
    /// Returns the figure size in inches
    pub fn size_inches(&self) -> (f64, f64) {
        let scale = self.style.fontsize;
        (
            self.style.cols as f64 / self.dpi / scale,
            self.style.rows as f64 / self.dpi / scale,
        )
    }
    /// Dots per inch the figure is rendered with
    pub fn dpi(&self) -> f64 {
        self.dpi * self.style.fontsize
    }
    /// Returns the rendered image size in pixels as (width, height)
    pub fn pixels(&self) -> (u32, u32) {
        let (w, h) = self.size_inches();
        let dpi = self.dpi();
        ((w * dpi).round() as u32, (h * dpi).round() as u32)
    }
    pub fn backend(&self) -> Backend {
        self.backend
    }
    /// Adds axes at `span`, decorated according to `style`
    pub fn add_axes(&mut self, span: impl Into<Span>, style: AxesStyle) -> &mut Axes {
        let mut axes = Axes::new(span.into(), style);
        if style.grid {
            axes.add_grid(false);
        }
        self.axes.push(axes);
        let n = self.axes.len();
        &mut self.axes[n - 1]
    }
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }
    pub fn axes_mut(&mut self) -> &mut [Axes] {
        &mut self.axes
    }
    /// Releases the figure
    pub fn close(self) {}
}

/// Light background grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub style: LineStyle,
    pub minor: bool,
}
impl Default for Grid {
    fn default() -> Self {
        Self {
            style: LineStyle::new(Rgb::GREY).linewidth(0.33),
            minor: false,
        }
    }
}

/// Axes within a figure
#[derive(Debug, Clone)]
pub struct Axes {
    span: Span,
    style: AxesStyle,
    grid: Option<Grid>,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
    aspect_equal: bool,
    artists: Vec<Artist>,
}
impl Axes {
    /// Standalone axes, mostly useful to collect artists outside of a figure
    pub fn new(span: Span, style: AxesStyle) -> Self {
        Self {
            span,
            style,
            grid: None,
            xlim: None,
            ylim: None,
            aspect_equal: false,
            artists: Vec::new(),
        }
    }
    pub fn span(&self) -> &Span {
        &self.span
    }
    pub fn style(&self) -> &AxesStyle {
        &self.style
    }
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
    /// Adds a light grey grid on the major ticks, and on the minor ticks if `add_minor`
    pub fn add_grid(&mut self, add_minor: bool) -> &mut Self {
        self.grid = Some(Grid {
            minor: add_minor,
            ..Default::default()
        });
        self
    }
    pub fn set_xlim(&mut self, xmin: f64, xmax: f64) -> &mut Self {
        self.xlim = Some((xmin, xmax));
        self
    }
    pub fn set_ylim(&mut self, ymin: f64, ymax: f64) -> &mut Self {
        self.ylim = Some((ymin, ymax));
        self
    }
    /// Forces the same scale along x and y
    pub fn set_aspect_equal(&mut self) -> &mut Self {
        self.aspect_equal = true;
        self
    }
    pub fn is_aspect_equal(&self) -> bool {
        self.aspect_equal
    }
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }
    /// Returns the (x,y) view limits
    ///
    /// Limits that were not set are derived from the data with a 5% margin.
    /// Horizontal and vertical lines only extend the y and x limits, respectively.
    pub fn limits(&self) -> ((f64, f64), (f64, f64)) {
        let (mut xb, mut yb) = ((f64::INFINITY, f64::NEG_INFINITY), (f64::INFINITY, f64::NEG_INFINITY));
        let extend = |(lo, hi): (f64, f64), v: f64| (lo.min(v), hi.max(v));
        for artist in &self.artists {
            match artist {
                Artist::HLine { y, .. } if y.is_finite() => yb = extend(yb, *y),
                Artist::VLine { x, .. } if x.is_finite() => xb = extend(xb, *x),
                _ => artist
                    .data_points()
                    .into_iter()
                    .filter(|p| p[0].is_finite() && p[1].is_finite())
                    .for_each(|[x, y]| {
                        xb = extend(xb, x);
                        yb = extend(yb, y);
                    }),
            }
        }
        let margin = |(lo, hi): (f64, f64)| {
            if lo > hi {
                (0., 1.)
            } else if hi - lo <= f64::EPSILON {
                (lo - 0.5, hi + 0.5)
            } else {
                let m = 0.05 * (hi - lo);
                (lo - m, hi + m)
            }
        };
        (
            self.xlim.unwrap_or_else(|| margin(xb)),
            self.ylim.unwrap_or_else(|| margin(yb)),
        )
    }
    fn push(&mut self, artist: Artist) {
        self.artists.push(artist);
    }
}
impl Canvas for Axes {
    fn plot(&mut self, points: Vec<[f64; 2]>, style: &LineStyle) {
        self.push(Artist::Line {
            points,
            style: *style,
        });
    }
    fn fill(&mut self, points: Vec<[f64; 2]>, style: &FillStyle) {
        self.push(Artist::Polygon {
            points,
            style: *style,
        });
    }
    fn ellipse(&mut self, ellipse: Ellipse, style: &FillStyle) {
        self.push(Artist::Ellipse {
            ellipse,
            style: *style,
        });
    }
    fn text(&mut self, text: Text) {
        self.push(Artist::Text(text));
    }
    fn axhline(&mut self, y: f64, style: &LineStyle) {
        self.push(Artist::HLine { y, style: *style });
    }
    fn axvline(&mut self, x: f64, style: &LineStyle) {
        self.push(Artist::VLine { x, style: *style });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::*;

    #[test]
    fn figure_pixels_ignore_font_scale() -> std::result::Result<(), Box<dyn std::error::Error>> {
        for fontsize in [0.5, 1., 2.] {
            let fig = figure(
                FigureStyle {
                    fontsize,
                    ..FIGURE_16_9
                },
                240.,
            )?;
            assert_eq!(fig.pixels(), (1920, 1080));
            assert!((fig.dpi() - 240. * fontsize).abs() < 1e-12);
        }
        let fig = figure(FIGURE_1_1, 120.)?;
        assert_eq!(fig.size_inches(), (9., 9.));
        Ok(())
    }

    #[test]
    fn zero_dpi_or_scale() {
        assert!(matches!(figure(FIGURE_4_3, 0.), Err(Error::ZeroDpi)));
        let style = FigureStyle {
            fontsize: 0.,
            ..FIGURE_4_3
        };
        assert!(matches!(figure(style, 240.), Err(Error::ZeroFontScale)));
    }

    #[test]
    fn add_axes_applies_grid() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut fig = figure(FIGURE_16_9, 240.)?;
        let ax = fig.add_axes([0.1, 0.1, 0.8, 0.8], AXES_MINIMAL);
        assert_eq!(ax.grid(), Some(&Grid::default()));
        let ax = fig.add_axes([0.5, 0.5, 1.5, 0.2], AXES_BLANK);
        assert!(ax.grid().is_none());
        assert_eq!(ax.span().width, 1.5);
        assert_eq!(fig.axes().len(), 2);
        Ok(())
    }

    #[test]
    fn autoscale() {
        let mut ax = Axes::new(Span::new(0., 0., 1., 1.), AXES_BLANK);
        assert_eq!(ax.limits(), ((0., 1.), (0., 1.)));
        ax.plot(vec![[0., 0.], [10., 2.]], &LineStyle::default());
        let ((x0, x1), (y0, y1)) = ax.limits();
        assert!((x0 + 0.5).abs() < 1e-12 && (x1 - 10.5).abs() < 1e-12);
        assert!((y0 + 0.1).abs() < 1e-12 && (y1 - 2.1).abs() < 1e-12);
        ax.set_xlim(-1., 1.);
        assert_eq!(ax.limits().0, (-1., 1.));
    }

    #[test]
    fn autoscale_with_axis_lines() {
        let mut ax = Axes::new(Span::new(0., 0., 1., 1.), AXES_BLANK);
        ax.axhline(5., &LineStyle::default());
        let ((x0, x1), (y0, y1)) = ax.limits();
        assert_eq!((x0, x1), (0., 1.));
        assert_eq!((y0, y1), (4.5, 5.5));
        ax.plot(vec![[0., 0.], [10., 1.]], &LineStyle::default());
        ax.axvline(-10., &LineStyle::default());
        let ((x0, x1), (y0, y1)) = ax.limits();
        assert!((x0 + 11.).abs() < 1e-12 && (x1 - 11.).abs() < 1e-12);
        assert!((y0 + 0.25).abs() < 1e-12 && (y1 - 5.25).abs() < 1e-12);
    }
}
