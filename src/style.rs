//! Colors, line and fill styles, figure and axes presets

use std::fmt;
use strum_macros::EnumIter;

/// RGB color with channels in [0,1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);
impl Rgb {
    pub const BLACK: Rgb = Rgb(0., 0., 0.);
    pub const WHITE: Rgb = Rgb(1., 1., 1.);
    pub const GREY: Rgb = Rgb(0.5, 0.5, 0.5);
    pub const RED: Rgb = Rgb(1., 0., 0.);
    pub const BLUE: Rgb = Rgb(0., 0., 1.);
    /// Returns the color with the given opacity
    pub fn alpha(self, alpha: f64) -> Rgba {
        Rgba(self.0, self.1, self.2, alpha)
    }
    /// Returns the color as 8 bits channels
    pub fn as_u8(&self) -> (u8, u8, u8) {
        let c = |v: f64| (v.clamp(0., 1.) * 255.).round() as u8;
        (c(self.0), c(self.1), c(self.2))
    }
}
impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}
impl From<colorous::Color> for Rgb {
    fn from(color: colorous::Color) -> Self {
        Rgb(
            color.r as f64 / 255.,
            color.g as f64 / 255.,
            color.b as f64 / 255.,
        )
    }
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3},{:.3},{:.3})", self.0, self.1, self.2)
    }
}

/// RGB color with an opacity, all in [0,1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub f64, pub f64, pub f64, pub f64);
impl Rgba {
    pub fn rgb(&self) -> Rgb {
        Rgb(self.0, self.1, self.2)
    }
    pub fn alpha(&self) -> f64 {
        self.3
    }
}
impl From<colorous::Color> for Rgba {
    fn from(color: colorous::Color) -> Self {
        Rgb::from(color).alpha(1.)
    }
}
impl From<[f64; 4]> for Rgba {
    fn from(v: [f64; 4]) -> Self {
        Rgba(v[0], v[1], v[2], v[3])
    }
}

/// Stroke of a polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    pub alpha: f64,
    /// line width in points
    pub linewidth: f64,
}
impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            alpha: 1.,
            linewidth: 1.,
        }
    }
}
impl LineStyle {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }
    pub fn alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
    pub fn linewidth(self, linewidth: f64) -> Self {
        Self { linewidth, ..self }
    }
}

/// Face and edge of a filled shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub facecolor: Rgb,
    pub alpha: f64,
    /// `None` draws no outline
    pub edgecolor: Option<Rgb>,
    /// outline width in points
    pub linewidth: f64,
}
impl Default for FillStyle {
    fn default() -> Self {
        Self {
            facecolor: Rgb::BLACK,
            alpha: 1.,
            edgecolor: None,
            linewidth: 0.,
        }
    }
}
impl FillStyle {
    pub fn new(facecolor: Rgb) -> Self {
        Self {
            facecolor,
            ..Default::default()
        }
    }
    pub fn alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
    pub fn edge(self, edgecolor: Rgb, linewidth: f64) -> Self {
        Self {
            edgecolor: Some(edgecolor),
            linewidth,
            ..self
        }
    }
}

/// Figure size in pixels and font scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub rows: u32,
    pub cols: u32,
    /// font scale factor, larger values give larger fonts at the same pixel size
    pub fontsize: f64,
}
pub const FIGURE_16_9: FigureStyle = FigureStyle {
    rows: 1080,
    cols: 1920,
    fontsize: 1.,
};
pub const FIGURE_4_3: FigureStyle = FigureStyle {
    rows: 1080,
    cols: 1440,
    fontsize: 1.,
};
pub const FIGURE_1_1: FigureStyle = FigureStyle {
    rows: 1080,
    cols: 1080,
    fontsize: 1.,
};
pub const FIGURE_2_1: FigureStyle = FigureStyle {
    rows: 2 * 1080,
    cols: 1080,
    fontsize: 1.,
};
impl Default for FigureStyle {
    fn default() -> Self {
        FIGURE_16_9
    }
}

/// Axes frame borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Spine {
    Left,
    Bottom,
    Right,
    Top,
}
/// Axes with ticks and tick labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AxisSide {
    X,
    Y,
}

/// Axes decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesStyle {
    pub spines: &'static [Spine],
    pub axes: &'static [AxisSide],
    pub grid: bool,
}
impl AxesStyle {
    pub fn has_spine(&self, spine: Spine) -> bool {
        self.spines.contains(&spine)
    }
    pub fn has_axis(&self, axis: AxisSide) -> bool {
        self.axes.contains(&axis)
    }
}
impl Default for AxesStyle {
    fn default() -> Self {
        AXES_MINIMAL
    }
}
pub const AXES_BLANK: AxesStyle = AxesStyle {
    spines: &[],
    axes: &[],
    grid: false,
};
pub const AXES_MINIMAL: AxesStyle = AxesStyle {
    spines: &[Spine::Left, Spine::Bottom],
    axes: &[AxisSide::X, AxisSide::Y],
    grid: true,
};
pub const AXES_MATPLOTLIB: AxesStyle = AxesStyle {
    spines: &[Spine::Left, Spine::Bottom, Spine::Right, Spine::Top],
    axes: &[AxisSide::X, AxisSide::Y],
    grid: false,
};
