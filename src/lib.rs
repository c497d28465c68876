//! # Plot add-ons
//!
//! Drawing primitives for scientific figures:
//!  - [planar]: circles, pie slices, hexagons, histogram outlines, boxes and grid lines,
//!  - [hemisphere]: fisheye view of the observer's hemisphere given (azimuth,zenith) directions,
//!  - [pseudo3d]: grids, meshes and cell rasters warped by a 3×3 homogeneous transform,
//!  - [video]: stitching of an image sequence into a video with `ffmpeg`.
//!
//! Primitives draw on any [Canvas]; [Axes] record the drawing calls and, with the `plot`
//! feature, [Figure::save] renders them with `plotters`.
//!
//! ```no_run
//! use plot_addons::{figure, hemisphere, style::*};
//!
//! # fn main() -> plot_addons::Result<()> {
//! let mut fig = figure(FIGURE_1_1, 240.)?;
//! let ax = fig.add_axes([0., 0., 1., 1.], AXES_BLANK);
//! ax.set_aspect_equal();
//! let zeniths: Vec<f64> = (0..=9).map(|i| (10. * i as f64).to_radians()).collect();
//! let azimuths: Vec<f64> = (0..12).map(|i| (30. * i as f64).to_radians()).collect();
//! hemisphere::grid(ax, &hemisphere::Fisheye, &azimuths, &zeniths, &Default::default());
//! # #[cfg(feature = "plot")]
//! fig.save("hemisphere.png")?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod canvas;
mod error;
pub mod figure;
pub mod hemisphere;
pub mod planar;
pub mod pseudo3d;
#[cfg(feature = "plot")]
mod render;
pub mod style;
pub mod video;

pub use backend::Backend;
pub use canvas::Canvas;
pub use error::{Error, Result};
pub use figure::{figure, Axes, Figure, Span};

/// Returns `n` evenly spaced values from `start` to `stop`, both included
///
/// A single value is `start`.
pub fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.
    };
    (0..n).map(move |i| {
        if i + 1 == n && n > 1 {
            stop
        } else {
            start + i as f64 * step
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_ends() {
        let v: Vec<_> = linspace(0., 1., 5).collect();
        assert_eq!(v, vec![0., 0.25, 0.5, 0.75, 1.]);
        assert_eq!(linspace(3., 7., 1).collect::<Vec<_>>(), vec![3.]);
        assert_eq!(linspace(0., 1., 0).count(), 0);
        let v: Vec<_> = linspace(0., 2. * std::f64::consts::PI, 1001).collect();
        assert_eq!(v[1000], 2. * std::f64::consts::PI);
    }
}
