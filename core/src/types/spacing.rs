use crate::error::{BiopsycatError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Voxel spacing in millimeters along the three spatial axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelSpacing {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl VoxelSpacing {
    /// Canonical spacing masks are normalized to
    pub const ISOTROPIC_1MM: VoxelSpacing = VoxelSpacing {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// Creates a new VoxelSpacing
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a spacing with the same value on every axis
    pub fn isotropic(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the spacing as an `[x, y, z]` array
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns whether every axis has a finite, strictly positive spacing
    pub fn is_valid(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite() && *v > 0.0)
    }

    /// Parses voxel spacing from string
    ///
    /// Accepts formats like:
    /// - "1.0 1.0 1.0"
    /// - "0.5,0.5,2"
    /// - "[1, 1, 1]"
    /// - a single value, applied to all three axes
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain one or three
    /// numbers, or if any value is not strictly positive
    pub fn parse(s: &str) -> Result<Self> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        let values = re
            .find_iter(s)
            .map(|m| {
                m.as_str().parse::<f64>().map_err(|e| {
                    BiopsycatError::InvalidSpacing(format!("'{}': {}", m.as_str(), e))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let spacing = match values.as_slice() {
            [v] => Self::isotropic(*v),
            [x, y, z] => Self::new(*x, *y, *z),
            _ => {
                return Err(BiopsycatError::InvalidSpacing(format!(
                    "expected 1 or 3 values in '{}', found {}",
                    s,
                    values.len()
                )))
            }
        };

        if !spacing.is_valid() {
            return Err(BiopsycatError::InvalidSpacing(format!(
                "values must be positive, got {}",
                spacing
            )));
        }
        Ok(spacing)
    }
}

impl Default for VoxelSpacing {
    fn default() -> Self {
        Self::ISOTROPIC_1MM
    }
}

impl FromStr for VoxelSpacing {
    type Err = BiopsycatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VoxelSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {} mm", self.x, self.y, self.z)
    }
}
