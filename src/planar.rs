//! Planar drawing primitives

use crate::{
    canvas::{Canvas, Text},
    figure::{Axes, Figure, Span},
    linspace,
    style::{AxesStyle, FillStyle, LineStyle, Rgb, Spine},
    Error, Result,
};
use std::f64::consts::{FRAC_PI_2, PI};

/// Draws a circle sampled at `steps` angles over [0,2π]
///
/// The first and the last points are the same so the polyline is closed.
pub fn circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: [f64; 2],
    radius: f64,
    steps: usize,
    style: &LineStyle,
) {
    let [x, y] = center;
    let points = linspace(0., 2. * PI, steps)
        .map(|phi| [x + radius * phi.cos(), y + radius * phi.sin()])
        .collect();
    canvas.plot(points, style);
}

/// Fills the pie slice between the angles `angle_start` and `angle_stop` [rad]
///
/// The arc runs from `angle_start` to `angle_stop`, either way around.
pub fn pie_slice<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: [f64; 2],
    angle_start: f64,
    angle_stop: f64,
    radius: f64,
    steps: usize,
    style: &FillStyle,
) {
    let [x, y] = center;
    let points = std::iter::once(center)
        .chain(
            linspace(angle_start, angle_stop, steps)
                .map(|phi| [x + radius * phi.cos(), y + radius * phi.sin()]),
        )
        .collect();
    canvas.fill(points, style);
}

/// Draws the outline of a hexagon with outer radius `radius`
///
/// The first vertex sits at `orientation_deg` from the x axis.
pub fn hexagon<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: [f64; 2],
    radius: f64,
    orientation_deg: f64,
    style: &LineStyle,
) {
    let [x, y] = center;
    let ori = orientation_deg.to_radians();
    let points = linspace(0., 2. * PI, 7)
        .map(|phi| [x + (phi + ori).cos() * radius, y + (phi + ori).sin() * radius])
        .collect();
    canvas.plot(points, style);
}

/// Hatches the cell `(ix,iy)` of a 2D histogram with its diagonal
///
/// The cell must lie within the bin edges, otherwise [Error::Length] reports the number of edges
/// the cell needs.
pub fn hatch<C: Canvas + ?Sized>(
    canvas: &mut C,
    ix: usize,
    iy: usize,
    x_bin_edges: &[f64],
    y_bin_edges: &[f64],
    style: &LineStyle,
) -> Result<()> {
    for (i, edges) in [(ix, x_bin_edges), (iy, y_bin_edges)] {
        if i + 1 >= edges.len() {
            return Err(Error::Length {
                expected: i + 2,
                found: edges.len(),
            });
        }
    }
    canvas.plot(
        vec![
            [x_bin_edges[ix], y_bin_edges[iy]],
            [x_bin_edges[ix + 1], y_bin_edges[iy + 1]],
        ],
        style,
    );
    Ok(())
}

/// Uncertainty band of a [Histogram]
#[derive(Debug, Clone, PartialEq)]
pub struct Band<'a> {
    pub lower: &'a [f64],
    pub upper: &'a [f64],
    pub style: FillStyle,
}

/// Histogram outline options
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<'a> {
    pub line: LineStyle,
    /// connects consecutive bins with vertical segments
    pub draw_bin_walls: bool,
    /// shaded band, a bin is left blank where both bounds are NaN
    pub band: Option<Band<'a>>,
}
impl<'a> Default for Histogram<'a> {
    fn default() -> Self {
        Self {
            line: LineStyle::default(),
            draw_bin_walls: false,
            band: None,
        }
    }
}
impl<'a> Histogram<'a> {
    pub fn walls(self) -> Self {
        Self {
            draw_bin_walls: true,
            ..self
        }
    }
    pub fn band(self, lower: &'a [f64], upper: &'a [f64], style: FillStyle) -> Self {
        Self {
            band: Some(Band {
                lower,
                upper,
                style,
            }),
            ..self
        }
    }
}

/// Draws the outline of a histogram
///
/// There must be one more bin edge than bin counts.
pub fn histogram<C: Canvas + ?Sized>(
    canvas: &mut C,
    bin_edges: &[f64],
    bin_counts: &[f64],
    options: &Histogram,
) -> Result<()> {
    if bin_edges.len() != bin_counts.len() + 1 {
        return Err(Error::BinEdges {
            edges: bin_edges.len(),
            counts: bin_counts.len(),
        });
    }
    if let Some(band) = &options.band {
        for bounds in [band.lower, band.upper] {
            if bounds.len() != bin_counts.len() {
                return Err(Error::Length {
                    expected: bin_counts.len(),
                    found: bounds.len(),
                });
            }
        }
    }
    for (i, &count) in bin_counts.iter().enumerate() {
        let (x0, x1) = (bin_edges[i], bin_edges[i + 1]);
        canvas.plot(vec![[x0, count], [x1, count]], &options.line);
        if options.draw_bin_walls {
            if let Some(&next) = bin_counts.get(i + 1) {
                canvas.plot(vec![[x1, count], [x1, next]], &options.line);
            }
        }
        if let Some(band) = &options.band {
            let (lower, upper) = (band.lower[i], band.upper[i]);
            if !(lower.is_nan() && upper.is_nan()) {
                canvas.fill(
                    vec![[x0, lower], [x1, lower], [x1, upper], [x0, upper]],
                    &band.style,
                );
            }
        }
    }
    Ok(())
}

/// Draws the box `x_range` x `y_range` as four segments: bottom, right, top and left
pub fn rectangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    x_range: [f64; 2],
    y_range: [f64; 2],
    style: &LineStyle,
) {
    let [x0, x1] = x_range;
    let [y0, y1] = y_range;
    canvas.plot(vec![[x0, y0], [x1, y0]], style);
    canvas.plot(vec![[x1, y0], [x1, y1]], style);
    canvas.plot(vec![[x0, y1], [x1, y1]], style);
    canvas.plot(vec![[x0, y0], [x0, y1]], style);
}

/// Draws full span lines at the given ticks
pub fn grid_lines<C: Canvas + ?Sized>(
    canvas: &mut C,
    x_ticks: &[f64],
    y_ticks: &[f64],
    style: &LineStyle,
) {
    y_ticks.iter().for_each(|&y| canvas.axhline(y, style));
    x_ticks.iter().for_each(|&x| canvas.axvline(x, style));
}

/// Formats the angle interval `[start,stop)` [rad] in degrees
pub fn angle_range_label(start: f64, stop: f64) -> String {
    format!("[{:.1}°, {:.1}°)", start.to_degrees(), stop.to_degrees())
}

/// Default placement of the [zenith_range_indicator]
pub const ZENITH_INDICATOR_SPAN: Span = Span::new(0.9, 0.84, 0.09, 0.16);

/// Adds a small quarter disk highlighting the zenith bin `zenith_bin`
///
/// Each zenith bin is a pie slice measured from the vertical, the selected one is darker.
pub fn zenith_range_indicator<'a>(
    fig: &'a mut Figure,
    zenith_bin_edges: &[f64],
    zenith_bin: usize,
    span: Span,
    fontsize: f64,
) -> &'a mut Axes {
    let ax = fig.add_axes(
        span,
        AxesStyle {
            spines: &[Spine::Left, Spine::Bottom],
            axes: &[],
            grid: true,
        },
    );
    let eps = 1e-2;
    ax.set_aspect_equal()
        .set_xlim(-eps, 1. + eps)
        .set_ylim(-eps, 1. + eps);
    circle(
        ax,
        [0., 0.],
        1.,
        1000,
        &LineStyle::new(Rgb::BLACK).alpha(0.2).linewidth(0.5),
    );
    for (bin, edges) in zenith_bin_edges.windows(2).enumerate() {
        pie_slice(
            ax,
            [0., 0.],
            FRAC_PI_2 - edges[0],
            FRAC_PI_2 - edges[1],
            1.,
            100,
            &FillStyle::new(Rgb::BLACK).alpha(if bin == zenith_bin { 0.5 } else { 0.2 }),
        );
    }
    if let (Some(&start), Some(&stop)) = (
        zenith_bin_edges.get(zenith_bin),
        zenith_bin_edges.get(zenith_bin + 1),
    ) {
        ax.text(
            Text::new(angle_range_label(start, stop), [0., -0.2])
                .fontsize(fontsize)
                .in_axes_coordinates(),
        );
    }
    ax
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{canvas::Artist, figure, style::*};

    fn axes() -> Axes {
        Axes::new(Span::new(0., 0., 1., 1.), AXES_BLANK)
    }
    fn lines(ax: &Axes) -> Vec<Vec<[f64; 2]>> {
        ax.artists()
            .iter()
            .filter_map(|a| match a {
                Artist::Line { points, .. } => Some(points.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn closed_circle() {
        for steps in [2, 3, 17, 1000] {
            let mut ax = axes();
            circle(&mut ax, [1., -2.], 0.5, steps, &LineStyle::default());
            let points = &lines(&ax)[0];
            assert_eq!(points.len(), steps);
            let (first, last) = (points[0], points[steps - 1]);
            assert!((first[0] - last[0]).abs() < 1e-12 && (first[1] - last[1]).abs() < 1e-12);
        }
    }

    #[test]
    fn pie_slice_starts_at_center() {
        let mut ax = axes();
        pie_slice(&mut ax, [2., 3.], FRAC_PI_2, 0., 1., 10, &FillStyle::default());
        match &ax.artists()[0] {
            Artist::Polygon { points, .. } => {
                assert_eq!(points.len(), 11);
                assert_eq!(points[0], [2., 3.]);
                assert!((points[1][0] - 2.).abs() < 1e-12 && (points[1][1] - 4.).abs() < 1e-12);
                assert!((points[10][0] - 3.).abs() < 1e-12 && (points[10][1] - 3.).abs() < 1e-12);
            }
            other => panic!("expected a polygon, found {other:?}"),
        }
    }

    #[test]
    fn hexagon_is_closed() {
        let mut ax = axes();
        hexagon(&mut ax, [0., 0.], 2., 30., &LineStyle::default());
        let points = &lines(&ax)[0];
        assert_eq!(points.len(), 7);
        let (s, c) = 30f64.to_radians().sin_cos();
        assert!((points[0][0] - 2. * c).abs() < 1e-12 && (points[0][1] - 2. * s).abs() < 1e-12);
        assert!((points[6][0] - points[0][0]).abs() < 1e-12);
        assert!((points[6][1] - points[0][1]).abs() < 1e-12);
    }

    #[test]
    fn hatch_diagonal() -> Result<()> {
        let mut ax = axes();
        hatch(&mut ax, 1, 0, &[0., 3., 6.], &[0., 1.], &LineStyle::default())?;
        assert_eq!(lines(&ax), vec![vec![[3., 0.], [6., 1.]]]);
        Ok(())
    }

    #[test]
    fn hatch_outside_the_bins() {
        let mut ax = axes();
        let style = LineStyle::default();
        assert!(matches!(
            hatch(&mut ax, 2, 0, &[0., 1., 2.], &[0., 1.], &style),
            Err(Error::Length {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            hatch(&mut ax, 0, 1, &[0., 1., 2.], &[0., 1.], &style),
            Err(Error::Length {
                expected: 3,
                found: 2
            })
        ));
        assert!(hatch(&mut ax, 0, 0, &[], &[], &style).is_err());
        assert!(ax.artists().is_empty());
    }

    #[test]
    fn histogram_heights() -> Result<()> {
        let mut ax = axes();
        histogram(&mut ax, &[0., 1., 2., 3.], &[5., 3., 8.], &Histogram::default())?;
        let heights: Vec<_> = lines(&ax).iter().map(|p| (p[0][1], p[1][1])).collect();
        assert_eq!(heights, vec![(5., 5.), (3., 3.), (8., 8.)]);
        Ok(())
    }

    #[test]
    fn histogram_edges_mismatch() {
        let mut ax = axes();
        let result = histogram(&mut ax, &[0., 1., 2.], &[5., 3., 8.], &Histogram::default());
        assert!(matches!(result, Err(Error::BinEdges { edges: 3, counts: 3 })));
        assert!(ax.artists().is_empty());
    }

    #[test]
    fn histogram_walls_and_band() -> Result<()> {
        let mut ax = axes();
        let lower = [4., f64::NAN, 7.];
        let upper = [6., f64::NAN, f64::NAN];
        let options = Histogram::default()
            .walls()
            .band(&lower, &upper, FillStyle::new(Rgb::BLUE).alpha(0.3));
        histogram(&mut ax, &[0., 1., 2., 3.], &[5., 3., 8.], &options)?;
        let walls: Vec<_> = lines(&ax)
            .into_iter()
            .filter(|p| p[0][0] == p[1][0])
            .collect();
        assert_eq!(walls, vec![vec![[1., 5.], [1., 3.]], vec![[2., 3.], [2., 8.]]]);
        let bands = ax
            .artists()
            .iter()
            .filter(|a| matches!(a, Artist::Polygon { .. }))
            .count();
        assert_eq!(bands, 2);
        Ok(())
    }

    #[test]
    fn box_segments_order() {
        let mut ax = axes();
        rectangle(&mut ax, [0., 2.], [1., 3.], &LineStyle::default());
        assert_eq!(
            lines(&ax),
            vec![
                vec![[0., 1.], [2., 1.]],
                vec![[2., 1.], [2., 3.]],
                vec![[0., 3.], [2., 3.]],
                vec![[0., 1.], [0., 3.]],
            ]
        );
    }

    #[test]
    fn explicit_grid_lines() {
        let mut ax = axes();
        grid_lines(&mut ax, &[0., 1.], &[0.5], &LineStyle::default());
        let kinds: Vec<_> = ax
            .artists()
            .iter()
            .map(|a| match a {
                Artist::HLine { y, .. } => ('h', *y),
                Artist::VLine { x, .. } => ('v', *x),
                _ => ('?', f64::NAN),
            })
            .collect();
        assert_eq!(kinds, vec![('h', 0.5), ('v', 0.), ('v', 1.)]);
    }

    #[test]
    fn zenith_indicator() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut fig = figure::figure(FIGURE_16_9, 240.)?;
        let edges: Vec<f64> = [0f64, 20., 40., 60.].iter().map(|z| z.to_radians()).collect();
        let ax = zenith_range_indicator(&mut fig, &edges, 1, ZENITH_INDICATOR_SPAN, 5.);
        assert!(ax.is_aspect_equal());
        let alphas: Vec<_> = ax
            .artists()
            .iter()
            .filter_map(|a| match a {
                Artist::Polygon { style, .. } => Some(style.alpha),
                _ => None,
            })
            .collect();
        assert_eq!(alphas, vec![0.2, 0.5, 0.2]);
        assert!(ax
            .artists()
            .iter()
            .any(|a| matches!(a, Artist::Text(t) if t.content == "[20.0°, 40.0°)")));
        Ok(())
    }
}
