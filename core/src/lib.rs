pub mod api;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod staging;
pub mod types;
pub mod volume;

pub use api::{BiopsyPipeline, PhaseOutcome};
pub use catalog::{build_catalog, build_catalog_with_options, CatalogOptions, CatalogSummary};
pub use cli::report::TextReport;
pub use error::{BiopsycatError, Result};
pub use staging::{is_candidate_mask_name, stage, StageReport};
pub use types::*;
pub use volume::{extract_centroid, load_volume, normalize, save_volume, MaskVolume};
