use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

pub mod border;
pub mod boundary;
pub mod grid;
mod internal_util;
#[cfg(feature = "plot")]
pub mod plot;
pub mod radar;

pub use border::{four_neighbor_border, in_disk, is_on_border, BorderKind};
pub use boundary::extract_boundary;
pub use grid::{GridBounds, GridError};

/// Integer lattice point.
/// Ordered lexicographically by (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Reflect across the vertical line through `center`.
    pub fn mirror_x(&self, center: Point) -> Self {
        Self::new(2 * center.x - self.x, self.y)
    }

    /// Reflect across the horizontal line through `center`.
    pub fn mirror_y(&self, center: Point) -> Self {
        Self::new(self.x, 2 * center.y - self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Filled set of lattice points within `radius` of `center`.
/// The points themselves are generated on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Disk {
    pub center: Point,
    pub radius: i64,
}

impl Disk {
    pub fn new(center: Point, radius: i64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, p: &Point) -> bool {
        in_disk(*p, self.center, self.radius)
    }

    /// Iterate over every lattice point of the disk.
    /// Columns are visited in ascending x, and each column in ascending y.
    /// A negative radius yields nothing.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let r = self.radius;
        (-r..=r).flat_map(move |dx| {
            (-r..=r).filter_map(move |dy| {
                if dx * dx + dy * dy <= r * r {
                    Some(self.center.offset(dx, dy))
                } else {
                    None
                }
            })
        })
    }

    /// Bounding box corners of the disk, `((min_x, min_y), (max_x, max_y))`.
    pub fn corners(&self) -> (Point, Point) {
        (
            self.center.offset(-self.radius, -self.radius),
            self.center.offset(self.radius, self.radius),
        )
    }
}

/// Format a sequence of points as `[(x, y), (x, y), ...]`.
pub fn format_points(points: &[Point]) -> String {
    let inner = points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}
