use serde::Serialize;
use std::fmt;

/// Mean voxel-index position of a mask's non-zero voxels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Centroid {
    /// Creates a new Centroid
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rounds every coordinate to one decimal place
    ///
    /// Halfway values round to the nearest even tenth.
    pub fn rounded(&self) -> Self {
        Self::new(round_1dp(self.x), round_1dp(self.y), round_1dp(self.z))
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded() {
        let c = Centroid::new(3.0, 10.333_333, 4.06).rounded();
        assert_eq!(c, Centroid::new(3.0, 10.3, 4.1));
    }

    #[test]
    fn test_rounded_ties_to_even() {
        let c = Centroid::new(2.25, 2.75, 0.5).rounded();
        assert_eq!(c, Centroid::new(2.2, 2.8, 0.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Centroid::new(3.0, 3.5, 4.0).to_string(), "(3, 3.5, 4)");
    }
}
