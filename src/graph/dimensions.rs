// src/graph/dimensions.rs

use serde::Serialize;

/// Axis-aligned bounding box of the activity positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Fold points into a box starting from `seed` as both min and max.
    pub(crate) fn fold(points: impl Iterator<Item = (f64, f64)>, seed: (f64, f64)) -> Self {
        let (mut min_x, mut min_y) = seed;
        let (mut max_x, mut max_y) = seed;

        for (x, y) in points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}
