//! Random target selection on a bounded grid.
//!
//! Every picker takes the caller's RNG, so seeding is left to the caller.

use rand::{seq::SliceRandom, Rng};

use crate::{extract_boundary, four_neighbor_border, Disk, GridBounds, Point};

fn pick_from<R: Rng + ?Sized>(rng: &mut R, candidates: &[Point], what: &str) -> Option<Point> {
    log::trace!("{}: {} candidates", what, candidates.len());
    candidates.choose(rng).copied()
}

/// Pick a uniformly random in-bounds point of the disk.
pub fn pick_point_in_disk<R: Rng + ?Sized>(
    rng: &mut R,
    center: Point,
    radius: i64,
    bounds: &GridBounds,
) -> Option<Point> {
    let candidates = Disk::new(center, radius)
        .points()
        .filter(|p| bounds.contains(p))
        .collect::<Vec<_>>();
    pick_from(rng, &candidates, "disk")
}

/// Pick a uniformly random in-bounds point of the 4-neighbour border ring.
pub fn pick_point_on_border<R: Rng + ?Sized>(
    rng: &mut R,
    center: Point,
    radius: i64,
    bounds: &GridBounds,
) -> Option<Point> {
    let candidates = bounds.retain_inside(&four_neighbor_border(radius, center));
    pick_from(rng, &candidates, "border")
}

/// Pick from the extremes boundary after clamping it into the grid.
///
/// Out-of-bounds ring points collapse onto the grid edge, so a ring that
/// pokes outside the grid still yields targets along that edge.
pub fn pick_clamped_border_target<R: Rng + ?Sized>(
    rng: &mut R,
    center: Point,
    radius: i64,
    bounds: &GridBounds,
) -> Option<Point> {
    let candidates = bounds.clamp_unique(&extract_boundary(radius, center));
    pick_from(rng, &candidates, "clamped border")
}

/// Choose a patrol target anywhere inside the detection disk.
pub fn pick_patrol_target<R: Rng + ?Sized>(
    rng: &mut R,
    position: Point,
    detection_radius: i64,
    bounds: &GridBounds,
) -> Option<Point> {
    pick_point_in_disk(rng, position, detection_radius, bounds)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{in_disk, is_on_border};

    fn bounds() -> GridBounds {
        GridBounds::new(100, 100).unwrap()
    }

    #[test]
    fn test_pick_point_in_disk() {
        let mut rng = StdRng::seed_from_u64(0);
        let center = Point::new(5, 5);
        for _ in 0..200 {
            let p = pick_point_in_disk(&mut rng, center, 10, &bounds()).unwrap();
            assert!(in_disk(p, center, 10));
            assert!(bounds().contains(&p));
        }
    }

    #[test]
    fn test_pick_point_on_border() {
        let mut rng = StdRng::seed_from_u64(1);
        let center = Point::new(5, 5);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let p = pick_point_on_border(&mut rng, center, 10, &bounds()).unwrap();
            assert!(is_on_border(p, center, 10));
            assert!(bounds().contains(&p));
            seen.insert(p);
        }
        // with 2000 draws every in-bounds ring cell should have come up
        let expected = bounds().retain_inside(&four_neighbor_border(10, center));
        assert_eq!(seen.len(), expected.len());
    }

    #[test]
    fn test_pick_clamped_border_target() {
        let mut rng = StdRng::seed_from_u64(2);
        let center = Point::new(5, 5);
        let clamped = bounds().clamp_unique(&extract_boundary(10, center));
        for _ in 0..100 {
            let p = pick_clamped_border_target(&mut rng, center, 10, &bounds()).unwrap();
            assert!(clamped.contains(&p));
        }
    }

    #[test]
    fn test_no_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let far = Point::new(-50, -50);
        assert_eq!(pick_point_in_disk(&mut rng, far, 5, &bounds()), None);
        assert_eq!(pick_point_on_border(&mut rng, far, 5, &bounds()), None);
        assert_eq!(pick_patrol_target(&mut rng, Point::new(5, 5), -1, &bounds()), None);
        assert_eq!(
            pick_clamped_border_target(&mut rng, Point::new(5, 5), -1, &bounds()),
            None
        );
        // clamping always lands somewhere on the grid
        assert_eq!(
            pick_clamped_border_target(&mut rng, far, 5, &bounds()),
            Some(Point::new(0, 0))
        );
    }

    #[test]
    fn test_seeded_picks_repeat() {
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| pick_patrol_target(&mut rng, Point::new(50, 50), 7, &bounds()))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }
}
