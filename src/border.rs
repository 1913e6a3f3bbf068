use crate::{
    boundary::extract_boundary,
    internal_util::{get_grids_around, square_distance},
    Point,
};

/// Which definition of "border" to use when building a ring of targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderKind {
    /// Row and column extremes of the disk.
    #[default]
    Extremes,
    /// Disk points with at least one 4-neighbour outside the disk.
    FourNeighbor,
}

impl BorderKind {
    pub fn points(&self, radius: i64, center: Point) -> Vec<Point> {
        match self {
            BorderKind::Extremes => extract_boundary(radius, center),
            BorderKind::FourNeighbor => four_neighbor_border(radius, center),
        }
    }
}

pub fn in_disk(p: Point, center: Point, radius: i64) -> bool {
    if radius < 0 {
        return false;
    }
    let r2 = (radius as i128).pow(2);
    // overflowing distances are far beyond any i64 radius
    square_distance(&p.into(), &center.into()).is_some_and(|d| d <= r2)
}

/// Whether `p` lies in the disk and touches its outside through a 4-neighbour.
pub fn is_on_border(p: Point, center: Point, radius: i64) -> bool {
    if !in_disk(p, center, radius) {
        return false;
    }
    get_grids_around(p.x, p.y)
        .into_iter()
        .any(|around| !in_disk(around.into(), center, radius))
}

/// Collect the 4-neighbour border ring of the disk, sorted by `(x, y)`.
///
/// A radius of zero is treated as a single-cell ring at `center`.
pub fn four_neighbor_border(radius: i64, center: Point) -> Vec<Point> {
    if radius < 0 {
        return Vec::new();
    }
    if radius == 0 {
        return vec![center];
    }

    let mut ring = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let p = center.offset(dx, dy);
            if is_on_border(p, center, radius) {
                ring.push(p);
            }
        }
    }
    ring.sort();
    ring
}
