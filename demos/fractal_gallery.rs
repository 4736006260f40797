use std::io::Write;

use nalgebra::Vector2;

use orbit_lab::fractal::{chaos, presets};

fn main() {
    for ifs in presets::all() {
        let points = chaos::render_default(&ifs, 50_000);

        let (mut x_lo, mut x_hi) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_lo, mut y_hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &points {
            x_lo = x_lo.min(p.x);
            x_hi = x_hi.max(p.x);
            y_lo = y_lo.min(p.y);
            y_hi = y_hi.max(p.y);
        }

        println!(
            "{:<12} {} maps, total p = {:.3}, {} points, x [{:.3}, {:.3}], y [{:.3}, {:.3}]",
            ifs.name(),
            ifs.len(),
            ifs.total_probability(),
            points.len(),
            x_lo,
            x_hi,
            y_lo,
            y_hi
        );

        let path = format!("{}_points.csv", ifs.name());
        write_points(&path, &points).expect("Failed to write CSV");
        println!("Exported: {}", path);
    }
}

fn write_points(path: &str, points: &[Vector2<f64>]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "x,y")?;
    for p in points {
        writeln!(file, "{:.6},{:.6}", p.x, p.y)?;
    }
    Ok(())
}
