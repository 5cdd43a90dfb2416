//! Filename predicates for lesion masks
//!
//! Masks follow the `t<...>_<...>_<...>-<...>.<ext>` naming convention,
//! e.g. `t1_a_b-1.nii.gz`. Matching is done on the file name only.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Volumetric image extensions, longest first
pub const VOLUME_EXTENSIONS: [&str; 2] = [".nii.gz", ".nii"];

/// Extension of the mask index files paired with each volume
pub const INDEX_EXTENSION: &str = "idf";

/// Checks if a file name follows the lesion mask naming convention
///
/// The name must contain a `t`, followed somewhere later by an
/// underscore, a second underscore, a hyphen and finally a dot. Hidden
/// files (leading `.`) never match.
pub fn is_candidate_mask_name(name: &str) -> bool {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^(?:[^.].*)?t.*_.*_.*-.*\..*$").expect("Failed to compile regex")
    });
    re.is_match(name)
}

/// Returns the file name of a path as UTF-8, if it has one
fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Checks if a path names a volumetric image (`.nii.gz` or `.nii`)
pub fn is_volume_file(path: &Path) -> bool {
    file_name(path).is_some_and(|name| strip_volume_extension(name).is_some())
}

/// Checks if a path names a mask index file (`.idf`)
pub fn is_index_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INDEX_EXTENSION))
}

/// Strips the volumetric image extension from a file name
///
/// Returns `None` if the name has no recognised volume extension or
/// nothing is left once it is removed.
pub fn strip_volume_extension(name: &str) -> Option<&str> {
    VOLUME_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .filter(|stem| !stem.is_empty())
}
