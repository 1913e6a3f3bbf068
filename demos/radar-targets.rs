use digital_circle::{
    radar::{pick_clamped_border_target, pick_point_in_disk, pick_point_on_border},
    BorderKind, GridBounds, Point,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let bounds = GridBounds::new(100, 100).unwrap();
    let center = Point::new(5, 5);
    let radius = 10;
    let mut rng = StdRng::seed_from_u64(0);

    let ring = bounds.clamp_unique(&BorderKind::Extremes.points(radius, center));
    println!(
        "Unique clamped border targets for center {}, r={}: total={}",
        center,
        radius,
        ring.len()
    );

    match pick_clamped_border_target(&mut rng, center, radius, &bounds) {
        Some(p) => println!("Random picked target: {}", p),
        None => println!("No targets."),
    }
    let on_border = pick_point_on_border(&mut rng, center, radius, &bounds);
    if let Some(p) = pick_point_in_disk(&mut rng, center, radius, &bounds) {
        println!("Random point inside circle: {}", p);
    }

    let scale = 8;
    let (image_width, image_height) = (40 * scale, 40 * scale);
    let mut image_buf = image::RgbImage::new(image_width, image_height);

    for iy in 0..image_height {
        for ix in 0..image_width {
            let p = Point::new((ix / scale) as i64, ((image_height - 1 - iy) / scale) as i64);
            let color = if Some(p) == on_border {
                image::Rgb([220, 30, 30])
            } else if ring.contains(&p) {
                image::Rgb([0, 0, 0])
            } else if digital_circle::in_disk(p, center, radius) {
                image::Rgb([200, 200, 200])
            } else {
                image::Rgb([255, 255, 255])
            };
            image_buf.put_pixel(ix, iy, color);
        }
    }

    std::fs::create_dir_all("data/output").unwrap();
    image_buf.save("data/output/radar-targets.png").unwrap();
}
