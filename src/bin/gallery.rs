use plot_addons::{
    backend::{self, Backend},
    figure, hemisphere,
    hemisphere::{Fisheye, FluxDirection, HemisphereGrid, Marker, PointColors},
    planar, pseudo3d,
    pseudo3d::{CellColors, Mesh, MeshAxes, Projection, Raster},
    style::*,
    Canvas,
};
use std::{f64::consts::PI, fs, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "plot-addons-gallery",
    about = "Renders a figure for each family of drawing primitives"
)]
struct Opt {
    /// Output directory
    #[structopt(short, long, default_value = "gallery")]
    output: PathBuf,
    /// Dots per inch
    #[structopt(long, default_value = "240")]
    dpi: f64,
    /// Rendering backend: bitmap or svg, overrides `PLOT_ADDONS_BACKEND`
    #[structopt(short, long)]
    backend: Option<Backend>,
}

fn planar_figure(dpi: f64) -> anyhow::Result<plot_addons::Figure> {
    let mut fig = figure(FIGURE_16_9, dpi)?;

    let edges: Vec<f64> = (0..=12).map(|i| i as f64).collect();
    let counts: Vec<f64> = edges[..12]
        .iter()
        .map(|x| 10. * (-(x - 6.).powi(2) / 8.).exp())
        .collect();
    let lower: Vec<f64> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| if i % 5 == 4 { f64::NAN } else { 0.8 * c })
        .collect();
    let upper: Vec<f64> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| if i % 5 == 4 { f64::NAN } else { 1.2 * c })
        .collect();
    let ax = fig.add_axes([0.07, 0.1, 0.55, 0.8], AXES_MINIMAL);
    planar::histogram(
        ax,
        &edges,
        &counts,
        &planar::Histogram::default()
            .walls()
            .band(&lower, &upper, FillStyle::new(Rgb::BLUE).alpha(0.25)),
    )?;
    planar::rectangle(ax, [2., 10.], [0., 11.], &LineStyle::new(Rgb::RED).linewidth(0.5));
    planar::hatch(ax, 1, 0, &[0., 3., 6.], &[0., 1.], &LineStyle::default())?;

    let ax = fig.add_axes([0.65, 0.1, 0.3, 0.55], AXES_BLANK);
    ax.set_aspect_equal();
    let cells = [[0., 0.], [1.5, 0.866], [1.5, -0.866], [0., 1.732], [0., -1.732]];
    for (k, center) in cells.into_iter().enumerate() {
        let color: Rgb = colorous::VIRIDIS.eval_rational(k, cells.len()).into();
        planar::hexagon(ax, center, 1., 0., &LineStyle::new(color).linewidth(2.));
    }
    planar::pie_slice(ax, [0., 0.], 0., PI / 3., 0.9, 50, &FillStyle::new(Rgb::GREY).alpha(0.5));
    planar::circle(ax, [0., 0.], 0.5, 200, &LineStyle::default());
    planar::grid_lines(ax, &[-1.5, 1.5], &[], &LineStyle::new(Rgb::GREY).linewidth(0.3));

    let zenith_edges: Vec<f64> = (0..=6).map(|i| (15. * i as f64).to_radians()).collect();
    planar::zenith_range_indicator(
        &mut fig,
        &zenith_edges,
        2,
        planar::ZENITH_INDICATOR_SPAN,
        8.,
    );
    Ok(fig)
}

fn hemisphere_figure(dpi: f64) -> anyhow::Result<plot_addons::Figure> {
    let mut fig = figure(FIGURE_1_1, dpi)?;
    let ax = fig.add_axes([0.05, 0.05, 0.9, 0.9], AXES_BLANK);
    ax.set_aspect_equal().set_xlim(-1.2, 1.2).set_ylim(-1.2, 1.2);

    let azimuths: Vec<f64> = (0..12).map(|i| (30. * i as f64).to_radians()).collect();
    let zeniths: Vec<f64> = (0..=9).map(|i| (10. * i as f64).to_radians()).collect();
    hemisphere::grid(
        ax,
        &Fisheye,
        &azimuths,
        &zeniths,
        &HemisphereGrid {
            zenith_min: Some(10f64.to_radians()),
            horizon: Some(90f64.to_radians()),
            ..Default::default()
        },
    );
    hemisphere::tick_labels(ax, &azimuths, 1.0, 6., hemisphere::degree_label);
    hemisphere::compass_labels(ax, 1.05, 10.);

    let n = 40;
    let az: Vec<f64> = (0..n).map(|i| i as f64 * 2.4).collect();
    let zd: Vec<f64> = (0..n).map(|i| (i as f64 / n as f64).sqrt() * 1.4).collect();
    let rgbas: Vec<Rgba> = (0..n)
        .map(|i| colorous::INFERNO.eval_rational(i, n).into())
        .collect();
    hemisphere::points(ax, &Fisheye, &az, &zd, 0.05, &PointColors::per_point(&rgbas))?;

    let cap = 3f64.to_radians();
    let style = LineStyle::new(Rgb::RED);
    for (azimuth, marker) in [
        (0.3, Marker::Disk(FillStyle::new(Rgb::BLUE).alpha(0.5))),
        (1.3, Marker::Ring(style)),
        (
            2.3,
            Marker::Flux {
                direction: FluxDirection::Inwards,
                style,
            },
        ),
        (
            3.3,
            Marker::Flux {
                direction: FluxDirection::Outwards,
                style,
            },
        ),
    ] {
        hemisphere::projected_circle(ax, &Fisheye, azimuth, 1.2, cap, &marker);
    }

    let mesh_az = [4.0, 4.4, 4.2, 4.6];
    let mesh_zd = [0.6, 0.6, 0.9, 0.9];
    hemisphere::mesh(
        ax,
        &Fisheye,
        &mesh_az,
        &mesh_zd,
        &[[0, 1, 2], [1, 3, 2]],
        &LineStyle::new(Rgb::GREY),
    )?;
    Ok(fig)
}

fn pseudo3d_figure(dpi: f64) -> anyhow::Result<plot_addons::Figure> {
    let mut fig = figure(FIGURE_4_3, dpi)?;
    let ax = fig.add_axes([0.05, 0.05, 0.9, 0.9], AXES_BLANK);
    ax.set_aspect_equal();

    let tilt = Projection::from_row_slice(&[1., 0.5, 0., 0., 0.4, 0., 0., 0., 1.])?;
    let (nx, ny) = (16, 16);
    let x_edges: Vec<f64> = (0..=nx).map(|i| -1. + 2. * i as f64 / nx as f64).collect();
    let y_edges: Vec<f64> = (0..=ny).map(|i| -1. + 2. * i as f64 / ny as f64).collect();
    let mut values = Vec::with_capacity(nx * ny * 3);
    for ix in 0..nx {
        for iy in 0..ny {
            let (x, y) = (
                0.5 * (x_edges[ix] + x_edges[ix + 1]),
                0.5 * (y_edges[iy] + y_edges[iy + 1]),
            );
            let intensity = (-(x * x + y * y) / 0.3).exp();
            let Rgb(r, g, b) = Rgb::from(colorous::TURBO.eval_continuous(intensity));
            values.extend([r * intensity, g * intensity, b * intensity]);
        }
    }
    let colors = CellColors::new(nx, ny, 3, values)?;
    pseudo3d::cell_raster(
        ax,
        &tilt,
        &x_edges,
        &y_edges,
        &colors,
        &Raster {
            threshold: 0.05,
            gamma: 0.5,
            fov_radius: Some(1.),
            ..Default::default()
        },
    )?;
    pseudo3d::grid(ax, &tilt, &x_edges, &y_edges, &LineStyle::default().alpha(0.3).linewidth(0.1));

    let lift = Projection::from_row_slice(&[1., 0.5, 0., 0., 0.4, 1.2, 0., 0., 1.])?;
    let square = Mesh {
        vertices: vec![[-0.5, -0.5, 0.], [0.5, -0.5, 0.], [0.5, 0.5, 0.], [-0.5, 0.5, 0.]],
        edges: vec![[0, 1], [1, 2], [2, 3], [3, 0], [0, 2]],
    };
    pseudo3d::mesh(ax, &lift, &square, MeshAxes::SwapNegate, &LineStyle::new(Rgb::BLUE));
    pseudo3d::circle(ax, &lift, [0., 0.], 0.9, 360, &LineStyle::new(Rgb::RED));
    let xs: Vec<f64> = (0..=50).map(|i| -1. + i as f64 / 25.).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 0.5 * (3. * x).sin()).collect();
    pseudo3d::plot(ax, &lift, &xs, &ys, &LineStyle::default())?;
    ax.axhline(-0.6, &LineStyle::new(Rgb::GREY).linewidth(0.5));
    Ok(fig)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    if let Some(backend) = opt.backend {
        backend::configure(backend)?;
    }
    let extension = match backend::current() {
        Backend::Bitmap => "png",
        Backend::Svg => "svg",
    };
    fs::create_dir_all(&opt.output)?;

    for (name, fig) in [
        ("planar", planar_figure(opt.dpi)?),
        ("hemisphere", hemisphere_figure(opt.dpi)?),
        ("pseudo3d", pseudo3d_figure(opt.dpi)?),
    ] {
        let path = opt.output.join(name).with_extension(extension);
        fig.save(&path)?;
        println!("{:?}", path);
        fig.close();
    }
    Ok(())
}
