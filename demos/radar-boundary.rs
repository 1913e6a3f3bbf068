use std::error::Error;

use digital_circle::{
    extract_boundary, format_points,
    plot::{render_boundary, save_png, PlotStyle},
    Point,
};

const RADIUS: i64 = 10;
const CENTER: Point = Point::new(5, 5);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let points = extract_boundary(RADIUS, CENTER);

    println!();
    println!("Number of points: {}", points.len());
    println!("{}", format_points(&points));

    let pixmap = render_boundary(&points, RADIUS, CENTER, &PlotStyle::default())?;
    let path = "data/output/radar-boundary.png";
    save_png(&pixmap, path)?;
    log::info!(
        "Integer points inside/on circle (r={}) written to {}",
        RADIUS,
        path
    );

    Ok(())
}
