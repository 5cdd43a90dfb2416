//! Discovery and staging of candidate mask files
//!
//! Candidate masks are copied from the rois directory into a `temp`
//! staging directory, which is the only handoff to catalog building.

pub mod naming;
mod stager;

pub use naming::{is_candidate_mask_name, is_index_file, is_volume_file, strip_volume_extension};
pub use stager::{list_files, stage, StageReport};
