use super::writer::write_catalog;
use crate::error::{BiopsycatError, IoResultExt, Result};
use crate::staging::{is_volume_file, list_files, strip_volume_extension};
use crate::types::{
    CatalogRecord, RoiPaths, VoxelSpacing, DEFAULT_LESION_INFO, DEFAULT_LESION_SIZE,
};
use crate::volume::{extract_centroid, load_volume, normalize, save_volume};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings applied to every catalog record
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOptions {
    /// Spacing masks are resampled to before measuring
    pub spacing: VoxelSpacing,

    /// Value of each record's `size` field
    pub size: u32,

    /// Value of each record's `info` field
    pub info: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            spacing: VoxelSpacing::ISOTROPIC_1MM,
            size: DEFAULT_LESION_SIZE,
            info: DEFAULT_LESION_INFO.to_string(),
        }
    }
}

/// Outcome of a catalog build
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    /// Resolved rois and staging paths
    pub paths: RoiPaths,

    /// Path of the written catalog
    pub catalog_file: PathBuf,

    /// Records in the order they were written
    pub records: Vec<CatalogRecord>,
}

/// Builds the catalog from staged masks using default options
///
/// See [`build_catalog_with_options`].
pub fn build_catalog(root: impl AsRef<Path>) -> Result<CatalogSummary> {
    build_catalog_with_options(root, &CatalogOptions::default())
}

/// Normalizes every staged mask, writes the catalog and removes staging
///
/// Staged volumes are processed in file name order. Each is resampled
/// to `options.spacing`, written back over the staged copy, reloaded
/// and measured.
///
/// # Errors
///
/// Any failure on any file aborts the build before the catalog is
/// written, leaving the staging directory in place. A mask without
/// non-zero voxels fails with [`BiopsycatError::EmptyMask`].
pub fn build_catalog_with_options(
    root: impl AsRef<Path>,
    options: &CatalogOptions,
) -> Result<CatalogSummary> {
    let paths = RoiPaths::resolve(root);
    let volumes = list_files(&paths.staging, is_volume_file)?;
    info!(
        "Building catalog from {} staged volumes in {}",
        volumes.len(),
        paths.staging.display()
    );

    let records = volumes
        .iter()
        .map(|path| catalog_record(path, options))
        .collect::<Result<Vec<_>>>()?;

    let catalog_file = paths.catalog_file();
    write_catalog(&records, &catalog_file)?;
    info!(
        "Biopsy list JSON file \"{}\" created with {} records",
        catalog_file.display(),
        records.len()
    );

    fs::remove_dir_all(&paths.staging).with_path(&paths.staging)?;
    debug!("Removed {}", paths.staging.display());

    Ok(CatalogSummary {
        paths,
        catalog_file,
        records,
    })
}

/// Normalizes one staged mask in place and builds its record
fn catalog_record(path: &Path, options: &CatalogOptions) -> Result<CatalogRecord> {
    let volume = load_volume(path)?;
    let resampled = normalize(&volume, options.spacing)?;
    save_volume(&resampled, path)?;

    let reloaded = load_volume(path)?;
    let centroid = extract_centroid(&reloaded.data).ok_or_else(|| BiopsycatError::EmptyMask {
        path: path.to_path_buf(),
    })?;

    let name = record_name(path)?;
    debug!(
        "{}: {:?} -> {:?}, centroid {}",
        name,
        volume.shape(),
        reloaded.shape(),
        centroid
    );
    Ok(CatalogRecord::new(
        centroid,
        name,
        options.size,
        options.info.clone(),
    ))
}

/// Returns the file name without its volume extension
fn record_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(strip_volume_extension)
        .map(str::to_string)
        .ok_or_else(|| {
            BiopsycatError::InvalidVolume(format!(
                "{} does not have a volume file name",
                path.display()
            ))
        })
}
