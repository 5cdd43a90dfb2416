//! Core type definitions for the biopsy catalog pipeline
//!
//! - [`RoiPaths`]: rois and staging directories derived from a root path
//! - [`VoxelSpacing`]: physical voxel size along x, y and z
//! - [`Centroid`]: mean voxel-index position of a mask
//! - [`CatalogRecord`]: one serialized catalog entry
//! - [`Phase`]: which half of the pipeline to run

mod centroid;
mod enums;
mod paths;
mod record;
mod spacing;

pub use centroid::Centroid;
pub use enums::Phase;
pub use paths::{RoiPaths, CATALOG_FILE_NAME, ROIS_DIR_NAME, STAGING_DIR_NAME};
pub use record::{CatalogRecord, DEFAULT_LESION_INFO, DEFAULT_LESION_SIZE};
pub use spacing::VoxelSpacing;
