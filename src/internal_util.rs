use std::collections::BTreeMap;

pub fn get_grids_around(x: i64, y: i64) -> [(i64, i64); 4] {
    [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
}

/// `None` when the squared distance does not fit in an `i128`.
pub fn square_distance(p1: &(i64, i64), p2: &(i64, i64)) -> Option<i128> {
    let dx = p1.0 as i128 - p2.0 as i128;
    let dy = p1.1 as i128 - p2.1 as i128;
    dx.checked_mul(dx)?.checked_add(dy.checked_mul(dy)?)
}

/// Fold `(key, value)` pairs into the (min, max) value seen per key.
pub fn extremes_by_key(
    pairs: impl IntoIterator<Item = (i64, i64)>,
) -> BTreeMap<i64, (i64, i64)> {
    let mut extremes = BTreeMap::new();
    for (key, value) in pairs {
        extremes
            .entry(key)
            .and_modify(|(min, max): &mut (i64, i64)| {
                *min = (*min).min(value);
                *max = (*max).max(value);
            })
            .or_insert((value, value));
    }
    extremes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_by_key() {
        let extremes = extremes_by_key([(0, 3), (1, 7), (0, -2), (0, 1), (1, 7)]);
        assert_eq!(extremes.len(), 2);
        assert_eq!(extremes[&0], (-2, 3));
        assert_eq!(extremes[&1], (7, 7));

        assert!(extremes_by_key([]).is_empty());
    }

    #[test]
    fn test_square_distance() {
        assert_eq!(square_distance(&(0, 0), &(3, 4)), Some(25));
        assert_eq!(square_distance(&(-2, 5), &(-2, 5)), Some(0));
        assert_eq!(
            square_distance(&(0, 0), &(i64::MAX, 0)),
            Some((i64::MAX as i128).pow(2))
        );
        assert_eq!(square_distance(&(i64::MIN, 0), &(i64::MAX, 0)), None);
    }
}
