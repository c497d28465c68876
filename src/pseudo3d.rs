//! Pseudo-3D drawing through a 3×3 homogeneous transform
//!
//! A point `(x,y)` is extended to `(x,y,1)`, left-multiplied by the [Projection] matrix and the
//! first two components of the product are kept.
//! There is no perspective divide, so any affine map and the linear part of a projective map
//! can be used to tilt and warp planar drawings.

use crate::{
    canvas::Canvas,
    linspace,
    style::{FillStyle, LineStyle, Rgb},
    Error, Result,
};
use nalgebra::{Matrix3, Vector3};

/// Homogeneous 2D transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection(Matrix3<f64>);
impl Default for Projection {
    fn default() -> Self {
        Self::identity()
    }
}
impl From<Matrix3<f64>> for Projection {
    fn from(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }
}
impl Projection {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }
    pub fn new(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }
    /// Creates the transform from the 9 matrix elements in row-major order
    pub fn from_row_slice(elements: &[f64]) -> Result<Self> {
        if elements.len() != 9 {
            return Err(Error::MatrixShape(elements.len()));
        }
        Ok(Self(Matrix3::from_row_slice(elements)))
    }
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }
    /// Transforms a single point
    pub fn apply(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        let v = self.0 * Vector3::new(x, y, 1.);
        [v[0], v[1]]
    }
    /// Transforms the points `(xs[i],ys[i])`
    pub fn apply_all(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<[f64; 2]>> {
        if xs.len() != ys.len() {
            return Err(Error::Length {
                expected: xs.len(),
                found: ys.len(),
            });
        }
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| self.apply([x, y]))
            .collect())
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Draws the transformed grid lines at `x_edges` and `y_edges`
///
/// Every line spans the bounding box of the edges.
pub fn grid<C: Canvas + ?Sized>(
    canvas: &mut C,
    projection: &Projection,
    x_edges: &[f64],
    y_edges: &[f64],
    style: &LineStyle,
) {
    if x_edges.is_empty() || y_edges.is_empty() {
        return;
    }
    let (xmin, xmax) = bounds(x_edges);
    let (ymin, ymax) = bounds(y_edges);
    for &x in x_edges {
        canvas.plot(
            vec![projection.apply([x, ymin]), projection.apply([x, ymax])],
            style,
        );
    }
    for &y in y_edges {
        canvas.plot(
            vec![projection.apply([xmin, y]), projection.apply([xmax, y])],
            style,
        );
    }
}

/// Draws the transformed polyline through `(xs[i],ys[i])`
pub fn plot<C: Canvas + ?Sized>(
    canvas: &mut C,
    projection: &Projection,
    xs: &[f64],
    ys: &[f64],
    style: &LineStyle,
) -> Result<()> {
    canvas.plot(projection.apply_all(xs, ys)?, style);
    Ok(())
}

/// Wireframe given by its vertices and the vertex index pairs of its edges
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub edges: Vec<[usize; 2]>,
}

/// Mapping of the mesh vertices to the plane of the projection
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MeshAxes {
    /// `(v0, v1)`
    #[default]
    Direct,
    /// `(v1, -v0)`
    SwapNegate,
}
impl MeshAxes {
    pub fn planar(&self, v: &[f64; 3]) -> [f64; 2] {
        match self {
            MeshAxes::Direct => [v[0], v[1]],
            MeshAxes::SwapNegate => [v[1], -v[0]],
        }
    }
}

/// Draws each edge of the mesh as a transformed segment
///
/// # Panics
/// If an edge refers to a vertex that does not exist
pub fn mesh<C: Canvas + ?Sized>(
    canvas: &mut C,
    projection: &Projection,
    mesh: &Mesh,
    axes: MeshAxes,
    style: &LineStyle,
) {
    for [start, stop] in &mesh.edges {
        let segment = [&mesh.vertices[*start], &mesh.vertices[*stop]]
            .map(|v| projection.apply(axes.planar(v)))
            .to_vec();
        canvas.plot(segment, style);
    }
}

/// Draws the transformed circle of radius `radius` around `center`, sampled with `steps` points
pub fn circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    projection: &Projection,
    center: [f64; 2],
    radius: f64,
    steps: usize,
    style: &LineStyle,
) {
    let points = linspace(0., 2. * std::f64::consts::PI, steps)
        .map(|phi| {
            projection.apply([
                center[0] + radius * phi.cos(),
                center[1] + radius * phi.sin(),
            ])
        })
        .collect();
    canvas.plot(points, style);
}

/// Colors of a `nx`×`ny` cell raster
///
/// `values` holds `channels` (3 for RGB, 4 for RGBA) values per cell, with the y index running
/// fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct CellColors {
    nx: usize,
    ny: usize,
    channels: usize,
    values: Vec<f64>,
}
impl CellColors {
    pub fn new(nx: usize, ny: usize, channels: usize, values: Vec<f64>) -> Result<Self> {
        if channels < 3 {
            return Err(Error::Length {
                expected: 3,
                found: channels,
            });
        }
        if values.len() != nx * ny * channels {
            return Err(Error::Length {
                expected: nx * ny * channels,
                found: values.len(),
            });
        }
        Ok(Self {
            nx,
            ny,
            channels,
            values,
        })
    }
    /// Creates the raster from one RGB(A) color per cell, with the y index running fastest
    pub fn from_cells<const N: usize>(nx: usize, ny: usize, cells: &[[f64; N]]) -> Result<Self> {
        Self::new(nx, ny, N, cells.iter().flatten().copied().collect())
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
    /// Returns the channels of cell (ix,iy)
    pub fn get(&self, ix: usize, iy: usize) -> &[f64] {
        let i = (ix * self.ny + iy) * self.channels;
        &self.values[i..i + self.channels]
    }
}

/// Options of the [cell_raster]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raster {
    /// cells with a brightest channel below the threshold are not drawn, in [0,1)
    pub threshold: f64,
    /// exponent of the opacity, strictly positive
    pub gamma: f64,
    pub edgecolor: Option<Rgb>,
    pub linewidth: f64,
    /// radius of the field-of-view circle, centered at the origin
    pub fov_radius: Option<f64>,
    pub fov_style: LineStyle,
}
impl Default for Raster {
    fn default() -> Self {
        Self {
            threshold: 0.,
            gamma: 1.,
            edgecolor: None,
            linewidth: 0.,
            fov_radius: None,
            fov_style: LineStyle::default().alpha(0.66).linewidth(0.1),
        }
    }
}

/// Draws the transformed cells of the grid given by `x_edges` and `y_edges`
///
/// Each cell is filled with its color normalized by its brightest channel, and that brightest
/// channel raised to `gamma` gives the cell opacity.
pub fn cell_raster<C: Canvas + ?Sized>(
    canvas: &mut C,
    projection: &Projection,
    x_edges: &[f64],
    y_edges: &[f64],
    colors: &CellColors,
    options: &Raster,
) -> Result<()> {
    let (nx, ny) = colors.shape();
    for (edges, n) in [(x_edges, nx), (y_edges, ny)] {
        if edges.len() != n + 1 {
            return Err(Error::BinEdges {
                edges: edges.len(),
                counts: n,
            });
        }
    }
    if !(0. ..1.).contains(&options.threshold) {
        return Err(Error::Threshold(options.threshold));
    }
    if options.gamma.is_nan() || options.gamma <= 0. {
        return Err(Error::Gamma(options.gamma));
    }
    for ix in 0..nx {
        for iy in 0..ny {
            let cell = colors.get(ix, iy);
            if cell.iter().any(|v| !(0. ..=1.).contains(v)) {
                log::warn!("cell color [{ix},{iy}] = {cell:?}, out of range [0,1]");
            }
            let norm = cell[..3].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            if norm < options.threshold || norm <= 0. {
                continue;
            }
            let (x0, x1) = (x_edges[ix], x_edges[ix + 1]);
            let (y0, y1) = (y_edges[iy], y_edges[iy + 1]);
            let quad = [[x0, y0], [x0, y1], [x1, y1], [x1, y0]]
                .map(|p| projection.apply(p))
                .to_vec();
            let mut style = FillStyle::new(Rgb(cell[0] / norm, cell[1] / norm, cell[2] / norm))
                .alpha(norm.powf(options.gamma));
            if let Some(edgecolor) = options.edgecolor {
                style = style.edge(edgecolor, options.linewidth);
            }
            canvas.fill(quad, &style);
        }
    }
    if let Some(radius) = options.fov_radius {
        circle(canvas, projection, [0., 0.], radius, 360, &options.fov_style);
    }
    Ok(())
}
