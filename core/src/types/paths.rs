use std::path::{Path, PathBuf};

/// Name of the directory holding the lesion masks
pub const ROIS_DIR_NAME: &str = "rois";

/// Name of the staging directory created under the rois path
pub const STAGING_DIR_NAME: &str = "temp";

/// Name of the catalog file written to the rois path
pub const CATALOG_FILE_NAME: &str = "biopsy_lists.json";

/// Paths derived from a caller-supplied root path
///
/// Both phases derive the same paths from the same root, which is the
/// only coupling between them besides the staging directory contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiPaths {
    /// Directory containing the candidate mask files
    pub rois: PathBuf,

    /// Working directory, always `rois/temp`
    pub staging: PathBuf,
}

impl RoiPaths {
    /// Resolves the rois and staging paths for a root path
    ///
    /// If the last segment of `root` is already `rois` it is used as is,
    /// otherwise `root/rois` is used.
    pub fn resolve(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let rois = if root.file_name().is_some_and(|name| name == ROIS_DIR_NAME) {
            root.to_path_buf()
        } else {
            root.join(ROIS_DIR_NAME)
        };
        let staging = rois.join(STAGING_DIR_NAME);
        Self { rois, staging }
    }

    /// Path of the catalog file
    pub fn catalog_file(&self) -> PathBuf {
        self.rois.join(CATALOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_appends_rois() {
        let paths = RoiPaths::resolve("/data/case1");
        assert_eq!(paths.rois, PathBuf::from("/data/case1/rois"));
        assert_eq!(paths.staging, PathBuf::from("/data/case1/rois/temp"));
    }

    #[test]
    fn test_resolve_keeps_existing_rois() {
        let paths = RoiPaths::resolve("/data/case1/rois");
        assert_eq!(paths.rois, PathBuf::from("/data/case1/rois"));
        assert_eq!(paths.staging, PathBuf::from("/data/case1/rois/temp"));
    }

    #[test]
    fn test_resolve_trailing_separator() {
        let paths = RoiPaths::resolve("/data/case1/rois/");
        assert_eq!(paths.rois, PathBuf::from("/data/case1/rois"));
    }

    #[test]
    fn test_resolve_similar_name_is_not_rois() {
        let paths = RoiPaths::resolve("/data/my_rois");
        assert_eq!(paths.rois, PathBuf::from("/data/my_rois/rois"));
    }

    #[test]
    fn test_catalog_file() {
        let paths = RoiPaths::resolve("/data/case1");
        assert_eq!(
            paths.catalog_file(),
            PathBuf::from("/data/case1/rois/biopsy_lists.json")
        );
    }
}
