//! Planar grid geometry: coordinates and straight-line distances.
//!
//! The service area is an abstract square grid (default 100×100 units,
//! one unit ≈ 1 km). Locations are plain `(x, y)` pairs; distances are
//! Euclidean. Coordinates are taken as-is: out-of-range or negative values
//! are accepted without validation.

use serde::{Deserialize, Serialize};

/// A point on the planar grid. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two grid points, in grid units.
pub fn distance_between(a: Coordinate, b: Coordinate) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(distance_between(a, b), 5.0);
        assert_eq!(distance_between(b, a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Coordinate::new(50.0, 50.0);
        assert_eq!(distance_between(p, p), 0.0);
    }

    #[test]
    fn negative_coordinates_are_accepted() {
        let a = Coordinate::new(-3.0, 0.0);
        let b = Coordinate::new(0.0, -4.0);
        assert_eq!(distance_between(a, b), 5.0);
    }
}
