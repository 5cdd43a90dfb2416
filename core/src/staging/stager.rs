use super::naming::{is_candidate_mask_name, is_index_file, is_volume_file};
use crate::error::{IoResultExt, Result};
use crate::types::RoiPaths;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of staging a root path
#[derive(Debug, Clone)]
pub struct StageReport {
    /// Resolved rois and staging paths
    pub paths: RoiPaths,

    /// Staged copies, in lexical file name order
    pub staged: Vec<PathBuf>,
}

impl StageReport {
    /// Number of staged mask index files
    ///
    /// Counted over the files copied in this run, so the count and the
    /// copy use the same enumeration.
    pub fn candidate_count(&self) -> usize {
        self.staged.iter().filter(|p| is_index_file(p)).count()
    }

    /// Number of staged volumetric images
    pub fn volume_count(&self) -> usize {
        self.staged.iter().filter(|p| is_volume_file(p)).count()
    }
}

/// Copies candidate masks from the rois path into the staging path
///
/// Creates the staging directory if needed. Existing staged files with
/// the same name are overwritten; the originals are left in place.
///
/// # Errors
///
/// Returns an error if the rois path cannot be listed, the staging
/// directory cannot be created or a file cannot be copied.
pub fn stage(root: impl AsRef<Path>) -> Result<StageReport> {
    let paths = RoiPaths::resolve(root);
    info!("Staging masks from {}", paths.rois.display());

    fs::create_dir_all(&paths.staging).with_path(&paths.staging)?;

    let candidates = list_files(&paths.rois, |path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_candidate_mask_name)
    })?;

    let mut staged = Vec::with_capacity(candidates.len());
    for source in candidates {
        // list_files only yields entries that have a file name
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = paths.staging.join(name);
        fs::copy(&source, &target).with_path(&source)?;
        debug!("Staged {} -> {}", source.display(), target.display());
        staged.push(target);
    }

    let report = StageReport { paths, staged };
    info!("Found {} biopsy files", report.candidate_count());
    Ok(report)
}

/// Lists regular files directly under `dir` accepted by `predicate`
///
/// Non-recursive. The result is sorted by path so downstream output
/// does not depend on filesystem enumeration order.
pub fn list_files<F>(dir: &Path, predicate: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_path(dir)? {
        let path = entry.with_path(dir)?.path();
        if path.is_file() && predicate(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
