use crate::catalog::{build_catalog_with_options, CatalogOptions, CatalogSummary};
use crate::error::Result;
use crate::staging::{stage, StageReport};
use crate::types::{Phase, RoiPaths};
use std::path::{Path, PathBuf};

/// Two-phase biopsy catalog pipeline bound to a root path
///
/// Phase 1 stages candidate masks into `rois/temp`; phase 2 normalizes
/// them, writes `rois/biopsy_lists.json` and removes the staging
/// directory. The phases share nothing but the root path and the
/// staging directory on disk, so they may run in separate processes.
///
/// # Example
///
/// ```
/// use biopsycat_core::{BiopsyPipeline, Phase, PhaseOutcome};
/// use tempfile::TempDir;
///
/// let root = TempDir::new().unwrap();
/// std::fs::create_dir(root.path().join("rois")).unwrap();
/// std::fs::write(root.path().join("rois").join("notes.txt"), "not a mask").unwrap();
///
/// let pipeline = BiopsyPipeline::new(root.path());
///
/// // Nothing matches the mask naming convention
/// let outcome = pipeline.run(Phase::Stage).unwrap();
/// assert!(matches!(outcome, PhaseOutcome::Staged(ref r) if r.staged.is_empty()));
///
/// // An empty catalog is still written and staging is removed
/// let outcome = pipeline.run(Phase::Catalog).unwrap();
/// assert!(matches!(outcome, PhaseOutcome::Cataloged(ref s) if s.records.is_empty()));
/// assert!(!pipeline.paths().staging.exists());
/// ```
#[derive(Debug, Clone)]
pub struct BiopsyPipeline {
    root: PathBuf,
    options: CatalogOptions,
}

impl BiopsyPipeline {
    /// Creates a pipeline with default catalog options
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_options(root, CatalogOptions::default())
    }

    /// Creates a pipeline with custom catalog options
    pub fn with_options(root: impl AsRef<Path>, options: CatalogOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Returns the paths both phases derive from the root
    pub fn paths(&self) -> RoiPaths {
        RoiPaths::resolve(&self.root)
    }

    /// Runs phase 1: stages candidate masks
    pub fn stage(&self) -> Result<StageReport> {
        stage(&self.root)
    }

    /// Runs phase 2: builds the catalog from staged masks
    pub fn build_catalog(&self) -> Result<CatalogSummary> {
        build_catalog_with_options(&self.root, &self.options)
    }

    /// Runs the selected phase
    pub fn run(&self, phase: Phase) -> Result<PhaseOutcome> {
        match phase {
            Phase::Stage => self.stage().map(PhaseOutcome::Staged),
            Phase::Catalog => self.build_catalog().map(PhaseOutcome::Cataloged),
        }
    }
}

/// Result of running one pipeline phase
#[derive(Debug, Clone)]
pub enum PhaseOutcome {
    Staged(StageReport),
    Cataloged(CatalogSummary),
}

impl PhaseOutcome {
    /// Returns the phase that produced this outcome
    pub fn phase(&self) -> Phase {
        match self {
            PhaseOutcome::Staged(_) => Phase::Stage,
            PhaseOutcome::Cataloged(_) => Phase::Catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VoxelSpacing;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_paths_follow_root() {
        let pipeline = BiopsyPipeline::new("/data/case1/rois");
        assert_eq!(
            pipeline.paths().staging,
            PathBuf::from("/data/case1/rois/temp")
        );
    }

    #[test]
    fn test_run_reports_phase() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("rois")).unwrap();
        let options = CatalogOptions {
            spacing: VoxelSpacing::isotropic(0.5),
            ..CatalogOptions::default()
        };
        let pipeline = BiopsyPipeline::with_options(temp_dir.path(), options);

        assert_eq!(pipeline.run(Phase::Stage).unwrap().phase(), Phase::Stage);
        assert_eq!(
            pipeline.run(Phase::Catalog).unwrap().phase(),
            Phase::Catalog
        );
    }
}
