//! Flow-field trace demo — marches curves through a noise field,
//! simplifies and spline-smooths them, projects them through an isometric
//! camera, and writes the result as an SVG.
//!
//! ```text
//! cargo run --example trace            # writes trace.svg
//! ```

use std::fmt::Write as _;

use inkline::camera::{Camera, CameraConfig, ProjectionMode};
use inkline::curve::{CatmullRom, Curve};
use inkline::math::{vector_2d, Point2, Point3, Vector2, Vector3};
use tracing::info;

const WIDTH: f64 = 1024.0;
const HEIGHT: f64 = 1024.0;

/// Cheap deterministic stand-in for the sketch's noise field.
fn field_angle(x: f64, y: f64) -> f64 {
    let n = (x * 1.7).sin() * (y * 1.3).cos() + (x * 0.5 + y * 0.9).sin() * 0.5;
    n * std::f64::consts::FRAC_PI_2
}

/// Marches a curve through the flow field from a seed point, in both
/// directions so the seed sits mid-curve.
fn field_curve(seed: Point2, step: f64, num_steps: usize) -> Curve {
    let mut curve = Curve::new();
    curve.push(seed);
    let mut p = seed;
    for _ in 1..num_steps / 2 {
        let v = vector_2d::rotate(Vector2::new(1.0, 0.0), field_angle(p.x, p.y)) * step;
        p += v;
        curve.push(p);
    }
    curve.reverse();
    let mut q = seed;
    for _ in 1..num_steps - num_steps / 2 {
        let v = vector_2d::rotate(Vector2::new(-1.0, 0.0), field_angle(q.x, q.y)) * step;
        q += v;
        curve.push(q);
    }
    curve
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = CameraConfig {
        position: Point3::new(2.0, 2.0, 2.0),
        target: Point3::origin(),
        up: Vector3::new(0.0, 1.0, 0.0),
        mode: ProjectionMode::Isometric,
        width: WIDTH,
        height: HEIGHT,
        zoom: 1.4,
        ..CameraConfig::default()
    };
    let camera = Camera::new(&config)?;

    let mut svg = String::new();
    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\">"
    )?;
    writeln!(svg, "<rect width=\"100%\" height=\"100%\" fill=\"#101014\"/>")?;

    let grid = 14;
    let mut total_points = 0;
    let mut kept_points = 0;
    for ix in 0..grid {
        for iy in 0..grid {
            let seed = Point2::new(
                f64::from(ix) / f64::from(grid - 1) * 2.0 - 1.0,
                f64::from(iy) / f64::from(grid - 1) * 2.0 - 1.0,
            );
            let traced = field_curve(seed, 0.01, 160);
            total_points += traced.len();
            let simplified = traced.subsample(0.002, usize::MAX);
            kept_points += simplified.len();
            let smooth = simplified.spline_resample(48, false, CatmullRom::DEFAULT_TENSION)?;

            let mut path = String::new();
            for (i, p) in smooth.points().iter().enumerate() {
                // Lift the 2D trace onto a noise-displaced sheet.
                let h = (field_angle(p.x, p.y) / std::f64::consts::FRAC_PI_2 + 1.0) * 0.25;
                let projected = camera.project(Point3::new(p.x, h, p.y));
                let cmd = if i == 0 { 'M' } else { 'L' };
                write!(path, "{cmd}{:.2} {:.2} ", projected.x, projected.y)?;
            }
            writeln!(
                svg,
                "<path d=\"{}\" fill=\"none\" stroke=\"#d8c9a3\" stroke-width=\"1.2\"/>",
                path.trim_end()
            )?;
        }
    }
    writeln!(svg, "</svg>")?;

    std::fs::write("trace.svg", &svg)?;
    info!(
        curves = grid * grid,
        total_points, kept_points, "wrote trace.svg"
    );
    Ok(())
}
