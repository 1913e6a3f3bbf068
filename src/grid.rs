use std::collections::HashSet;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Point;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
}

/// A bounded grid covering `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct GridBounds {
    width: i64,
    height: i64,
}

impl GridBounds {
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn contains(&self, p: &Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0, self.width - 1), p.y.clamp(0, self.height - 1))
    }

    /// Clamp every point into the grid, then drop repeats.
    /// First occurrence order is kept.
    pub fn clamp_unique(&self, points: &[Point]) -> Vec<Point> {
        let mut seen = HashSet::new();
        points
            .iter()
            .map(|&p| self.clamp(p))
            .filter(|p| seen.insert(*p))
            .collect()
    }

    pub fn retain_inside(&self, points: &[Point]) -> Vec<Point> {
        points.iter().copied().filter(|p| self.contains(p)).collect()
    }
}
