use super::Centroid;
use serde::Serialize;

/// Size indicator written for every lesion
pub const DEFAULT_LESION_SIZE: u32 = 2;

/// Description written for every lesion
pub const DEFAULT_LESION_INFO: &str = "This is a tumor.";

/// One catalog entry describing a lesion mask
///
/// Field order matches the serialized key order: `x`, `y`, `z`,
/// `name`, `size`, `info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub name: String,
    pub size: u32,
    pub info: String,
}

impl CatalogRecord {
    /// Creates a record from a centroid and mask name
    pub fn new(
        centroid: Centroid,
        name: impl Into<String>,
        size: u32,
        info: impl Into<String>,
    ) -> Self {
        Self {
            x: centroid.x,
            y: centroid.y,
            z: centroid.z,
            name: name.into(),
            size,
            info: info.into(),
        }
    }

    /// Returns the record's position as a centroid
    pub fn centroid(&self) -> Centroid {
        Centroid::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_key_order() {
        let record = CatalogRecord::new(
            Centroid::new(10.0, 10.0, 10.0),
            "t1_a_b-1",
            DEFAULT_LESION_SIZE,
            DEFAULT_LESION_INFO,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"x":10.0,"y":10.0,"z":10.0,"name":"t1_a_b-1","size":2,"info":"This is a tumor."}"#
        );
        assert_eq!(record.centroid(), Centroid::new(10.0, 10.0, 10.0));
    }
}
