use std::collections::BTreeSet;

use crate::{internal_util::extremes_by_key, Disk, Point};

/// Extract the row/column extremes of the rasterised disk.
///
/// Every lattice point `p` with `|p - center|² <= radius²` is generated,
/// then for each column the lowest and highest point, and for each row the
/// leftmost and rightmost point, are collected. Points that are extreme in
/// more than one direction appear once. The result is sorted by `(x, y)`.
///
/// This is a coarse silhouette rather than an exact pixel boundary, but it
/// is always a subset of the disk. A negative radius yields an empty vector.
pub fn extract_boundary(radius: i64, center: Point) -> Vec<Point> {
    if radius < 0 {
        return Vec::new();
    }

    let disk = Disk::new(center, radius);
    let points = disk.points().collect::<Vec<_>>();

    let columns = extremes_by_key(points.iter().map(|p| (p.x, p.y)));
    let rows = extremes_by_key(points.iter().map(|p| (p.y, p.x)));

    let column_extremes = columns
        .iter()
        .flat_map(|(&x, &(min_y, max_y))| [Point::new(x, min_y), Point::new(x, max_y)]);
    let row_extremes = rows
        .iter()
        .flat_map(|(&y, &(min_x, max_x))| [Point::new(min_x, y), Point::new(max_x, y)]);

    let boundary = column_extremes.chain(row_extremes).collect::<BTreeSet<_>>();

    log::debug!(
        "disk r={} at {}: {} lattice points, {} boundary points",
        radius,
        center,
        points.len(),
        boundary.len()
    );

    boundary.into_iter().collect()
}
