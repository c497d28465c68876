//! Drawing surface
//!
//! The primitives of [planar](crate::planar), [hemisphere](crate::hemisphere) and
//! [pseudo3d](crate::pseudo3d) only ever talk to a [Canvas].
//! [Axes](crate::Axes) implements it by recording one [Artist] per call.

use crate::style::{FillStyle, LineStyle};

/// Coordinate system of a text position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coordinates {
    /// data coordinates
    #[default]
    Data,
    /// fraction of the axes box, (0,0) is the lower left corner
    Axes,
}

/// Text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    BottomLeft,
    Center,
}

/// A filled ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: [f64; 2],
    pub width: f64,
    pub height: f64,
    /// counter-clockwise rotation of the width axis [rad]
    pub angle: f64,
}
impl Ellipse {
    /// Returns the point of the outline at the parametric angle `phi` [rad]
    pub fn point(&self, phi: f64) -> [f64; 2] {
        let (s, c) = self.angle.sin_cos();
        let u = 0.5 * self.width * phi.cos();
        let v = 0.5 * self.height * phi.sin();
        [self.center[0] + c * u - s * v, self.center[1] + s * u + c * v]
    }
    /// Samples `n` points along the outline
    pub fn outline(&self, n: usize) -> Vec<[f64; 2]> {
        crate::linspace(0., 2. * std::f64::consts::PI, n)
            .map(|phi| self.point(phi))
            .collect()
    }
    /// Returns the ellipse shrunk by `factor` around its center
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
            ..*self
        }
    }
}

/// A text label
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub position: [f64; 2],
    pub coordinates: Coordinates,
    /// font size in points
    pub fontsize: f64,
    /// counter-clockwise rotation [deg]
    pub rotation: f64,
    pub anchor: Anchor,
}
impl Text {
    pub fn new(content: impl ToString, position: [f64; 2]) -> Self {
        Self {
            content: content.to_string(),
            position,
            coordinates: Coordinates::Data,
            fontsize: 10.,
            rotation: 0.,
            anchor: Anchor::BottomLeft,
        }
    }
    pub fn fontsize(self, fontsize: f64) -> Self {
        Self { fontsize, ..self }
    }
    pub fn rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }
    pub fn anchor(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }
    pub fn in_axes_coordinates(self) -> Self {
        Self {
            coordinates: Coordinates::Axes,
            ..self
        }
    }
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Line {
        points: Vec<[f64; 2]>,
        style: LineStyle,
    },
    Polygon {
        points: Vec<[f64; 2]>,
        style: FillStyle,
    },
    Ellipse {
        ellipse: Ellipse,
        style: FillStyle,
    },
    Text(Text),
    /// horizontal line across the whole axes width
    HLine {
        y: f64,
        style: LineStyle,
    },
    /// vertical line across the whole axes height
    VLine {
        x: f64,
        style: LineStyle,
    },
}
impl Artist {
    /// Data points the artist covers, used to autoscale the axes
    pub fn data_points(&self) -> Vec<[f64; 2]> {
        match self {
            Artist::Line { points, .. } | Artist::Polygon { points, .. } => points.clone(),
            Artist::Ellipse { ellipse, .. } => ellipse.outline(16),
            Artist::Text(text) if text.coordinates == Coordinates::Data => vec![text.position],
            _ => vec![],
        }
    }
}

/// Drawing surface
pub trait Canvas {
    /// Draws the polyline through `points`
    fn plot(&mut self, points: Vec<[f64; 2]>, style: &LineStyle);
    /// Fills the polygon with vertices `points`
    fn fill(&mut self, points: Vec<[f64; 2]>, style: &FillStyle);
    fn ellipse(&mut self, ellipse: Ellipse, style: &FillStyle);
    fn text(&mut self, text: Text);
    fn axhline(&mut self, y: f64, style: &LineStyle);
    fn axvline(&mut self, x: f64, style: &LineStyle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_ellipse_outline() {
        let e = Ellipse {
            center: [1., 2.],
            width: 2.,
            height: 4.,
            angle: std::f64::consts::FRAC_PI_2,
        };
        let p = e.outline(5);
        assert_eq!(p.len(), 5);
        // the width axis now points along y
        assert!((p[0][0] - 1.).abs() < 1e-12 && (p[0][1] - 3.).abs() < 1e-12);
        assert!((p[1][0] + 1.).abs() < 1e-12 && (p[1][1] - 2.).abs() < 1e-12);
    }
}
