//! Fisheye view of the observer's hemisphere
//!
//! A direction is given by its azimuth, counter-clockwise from the x axis, and its zenith angle,
//! measured from straight up; both in radians.
//! The [Fisheye] projection maps the zenith to the disk center and the horizon to the unit circle:
//! ```text
//! r = sin(zenith)
//! x = cos(azimuth) r
//! y = sin(azimuth) r
//! ```
//! Markers are foreshortened by `cos(zenith)` along the radial direction, mimicking the
//! perspective compression near the horizon.

use crate::{
    canvas::{Anchor, Canvas, Ellipse, Text},
    planar,
    style::{FillStyle, LineStyle, Rgb, Rgba},
    Error, Result,
};
use itertools::Itertools;
use std::f64::consts::{FRAC_PI_4, PI};

/// Number of samples along the rings of the grid
const RING_STEPS: usize = 1001;

/// Mapping of a direction of the hemisphere to the plane
pub trait DiskProjection {
    /// Returns the (x,y) coordinates of the direction (azimuth,zenith)
    fn project(&self, azimuth: f64, zenith: f64) -> [f64; 2];
    /// Distance to the disk center of the directions at `zenith`
    fn radius(&self, zenith: f64) -> f64;
    /// Shrinking factor of a marker along the radial direction
    fn foreshortening(&self, zenith: f64) -> f64 {
        zenith.cos()
    }
}

/// Equal-angle fisheye projection
#[derive(Debug, Default, Clone, Copy)]
pub struct Fisheye;
impl DiskProjection for Fisheye {
    fn project(&self, azimuth: f64, zenith: f64) -> [f64; 2] {
        let r = self.radius(zenith);
        [azimuth.cos() * r, azimuth.sin() * r]
    }
    fn radius(&self, zenith: f64) -> f64 {
        zenith.sin()
    }
}

/// Projects (azimuth,zenith) with the [Fisheye] projection
pub fn project(azimuth: f64, zenith: f64) -> [f64; 2] {
    Fisheye.project(azimuth, zenith)
}

fn check_lengths(azimuths: &[f64], zeniths: &[f64]) -> Result<()> {
    if azimuths.len() != zeniths.len() {
        return Err(Error::Length {
            expected: azimuths.len(),
            found: zeniths.len(),
        });
    }
    Ok(())
}

/// Colors of [points]
///
/// Either both `color` and `alpha` are given and shared by all the points,
/// or `rgbas` gives one color per point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointColors<'a> {
    pub color: Option<Rgb>,
    pub alpha: Option<f64>,
    pub rgbas: Option<&'a [Rgba]>,
}
impl<'a> PointColors<'a> {
    pub fn shared(color: Rgb, alpha: f64) -> Self {
        Self {
            color: Some(color),
            alpha: Some(alpha),
            rgbas: None,
        }
    }
    pub fn per_point(rgbas: &'a [Rgba]) -> Self {
        Self {
            rgbas: Some(rgbas),
            ..Default::default()
        }
    }
    /// Returns the colors of `n` points
    pub fn resolve(&self, n: usize) -> Result<Vec<Rgba>> {
        match (self.rgbas, self.color, self.alpha) {
            (Some(rgbas), ..) if rgbas.len() == n => Ok(rgbas.to_vec()),
            (Some(rgbas), ..) => Err(Error::Length {
                expected: n,
                found: rgbas.len(),
            }),
            (None, Some(color), Some(alpha)) => Ok(vec![color.alpha(alpha); n]),
            _ => Err(Error::MissingColor),
        }
    }
}

/// Draws one foreshortened disk of diameter `point_diameter` per direction
pub fn points<C: Canvas + ?Sized, P: DiskProjection>(
    canvas: &mut C,
    projection: &P,
    azimuths: &[f64],
    zeniths: &[f64],
    point_diameter: f64,
    colors: &PointColors,
) -> Result<()> {
    check_lengths(azimuths, zeniths)?;
    let rgbas = colors.resolve(zeniths.len())?;
    for ((&azimuth, &zenith), rgba) in azimuths.iter().zip(zeniths).zip(rgbas) {
        canvas.ellipse(
            Ellipse {
                center: projection.project(azimuth, zenith),
                width: point_diameter * projection.foreshortening(zenith),
                height: point_diameter,
                angle: azimuth,
            },
            &FillStyle::new(rgba.rgb()).alpha(rgba.alpha()),
        );
    }
    Ok(())
}

/// Direction of a magnetic flux marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxDirection {
    /// ring with a dot in its center
    Inwards,
    /// ring with a cross
    Outwards,
}

/// Rendering of a [projected_circle]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    Disk(FillStyle),
    Ring(LineStyle),
    Flux {
        direction: FluxDirection,
        style: LineStyle,
    },
}

/// Relative size of the dot of an inwards flux marker
const FLUX_DOT: f64 = 0.25;

/// Draws the cap of angular radius `half_angle` around the direction (azimuth,zenith)
pub fn projected_circle<C: Canvas + ?Sized, P: DiskProjection>(
    canvas: &mut C,
    projection: &P,
    azimuth: f64,
    zenith: f64,
    half_angle: f64,
    marker: &Marker,
) {
    let diameter = 2. * half_angle.sin();
    let ellipse = Ellipse {
        center: projection.project(azimuth, zenith),
        width: diameter * projection.foreshortening(zenith),
        height: diameter,
        angle: azimuth,
    };
    match marker {
        Marker::Disk(style) => canvas.ellipse(ellipse, style),
        Marker::Ring(style) => canvas.plot(ellipse.outline(RING_STEPS), style),
        Marker::Flux { direction, style } => {
            canvas.plot(ellipse.outline(RING_STEPS), style);
            match direction {
                FluxDirection::Inwards => canvas.ellipse(
                    ellipse.scaled(FLUX_DOT),
                    &FillStyle::new(style.color).alpha(style.alpha),
                ),
                FluxDirection::Outwards => {
                    for phi in [FRAC_PI_4, 3. * FRAC_PI_4] {
                        canvas.plot(vec![ellipse.point(phi), ellipse.point(phi + PI)], style);
                    }
                }
            }
        }
    }
}

/// Options of the hemisphere [grid]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereGrid {
    pub style: LineStyle,
    /// no ring is drawn below this zenith angle
    pub zenith_min: Option<f64>,
    /// zenith angle of the horizon decoration
    pub horizon: Option<f64>,
}
impl Default for HemisphereGrid {
    fn default() -> Self {
        Self {
            style: LineStyle::new(Rgb::BLACK).linewidth(0.5),
            zenith_min: None,
            horizon: None,
        }
    }
}

/// Draws the rings of constant zenith and the spokes of constant azimuth
///
/// Line widths shrink by the foreshortening of their zenith angle.
/// Zeniths are expected in increasing order.
pub fn grid<C: Canvas + ?Sized, P: DiskProjection>(
    canvas: &mut C,
    projection: &P,
    azimuths: &[f64],
    zeniths: &[f64],
    options: &HemisphereGrid,
) {
    let style = &options.style;
    let zenith_min = options.zenith_min.unwrap_or(f64::NEG_INFINITY);
    let rings: Vec<f64> = zeniths.iter().map(|z| z.max(zenith_min)).dedup().collect();
    for &zenith in &rings {
        planar::circle(
            canvas,
            [0., 0.],
            projection.radius(zenith),
            RING_STEPS,
            &style.linewidth(style.linewidth * projection.foreshortening(zenith)),
        );
    }
    for &azimuth in azimuths {
        for (&start, &stop) in rings.iter().tuple_windows() {
            // width taken at the clipped inner end of the spoke, not at the unclipped zenith
            canvas.plot(
                vec![
                    projection.project(azimuth, start),
                    projection.project(azimuth, stop),
                ],
                &style.linewidth(style.linewidth * projection.foreshortening(start)),
            );
        }
    }
    if let Some(horizon) = options.horizon {
        let r = projection.radius(horizon);
        canvas.plot(vec![[-2. / 3. * r, -r], [0., -r]], style);
        planar::circle(canvas, [0., 0.], r, RING_STEPS, style);
    }
}

/// Draws the edges of the triangular `faces` with vertices at (azimuths,zeniths)
///
/// Edges shared by several faces are drawn once per face.
pub fn mesh<C: Canvas + ?Sized, P: DiskProjection>(
    canvas: &mut C,
    projection: &P,
    azimuths: &[f64],
    zeniths: &[f64],
    faces: &[[usize; 3]],
    style: &LineStyle,
) -> Result<()> {
    check_lengths(azimuths, zeniths)?;
    let vertices: Vec<_> = azimuths
        .iter()
        .zip(zeniths)
        .map(|(&a, &z)| projection.project(a, z))
        .collect();
    for face in faces {
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            canvas.plot(vec![vertices[face[a]], vertices[face[b]]], style);
        }
    }
    Ok(())
}

/// Default azimuth tick label: the angle in degrees
pub fn degree_label(azimuth: f64) -> String {
    format!("{:.0}°", azimuth.to_degrees())
}

/// Writes a label just outside the circle of radius `radius` at each azimuth
pub fn tick_labels<C, F>(canvas: &mut C, azimuths: &[f64], radius: f64, fontsize: f64, label: F)
where
    C: Canvas + ?Sized,
    F: Fn(f64) -> String,
{
    let (x_shift, y_shift) = (-0.1 * radius, -0.05 * radius);
    for &azimuth in azimuths {
        canvas.text(
            Text::new(
                label(azimuth),
                [
                    radius * azimuth.cos() + x_shift,
                    radius * azimuth.sin() + y_shift,
                ],
            )
            .fontsize(fontsize),
        );
    }
}

/// Compass labels, from azimuth 0 counter-clockwise
pub const COMPASS: [&str; 4] = ["N", "E", "S", "W"];

/// Writes the compass labels along the circle of radius `radius`
///
/// Each label is tangent to the circle.
pub fn compass_labels<C: Canvas + ?Sized>(canvas: &mut C, radius: f64, fontsize: f64) {
    let r = 1.1 * radius;
    for (k, label) in COMPASS.iter().enumerate() {
        let degrees = 90. * k as f64;
        let azimuth = degrees.to_radians();
        canvas.text(
            Text::new(*label, [r * azimuth.cos(), r * azimuth.sin()])
                .fontsize(fontsize)
                .rotation(degrees - 90.)
                .anchor(Anchor::Center),
        );
    }
}
