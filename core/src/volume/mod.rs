//! Mask volume loading, normalization and measurement
//!
//! [`normalize`] and [`extract_centroid`] are pure; file access goes
//! through [`load_volume`] and [`save_volume`].

mod centroid;
mod io;
mod mask;
mod resample;

pub use centroid::extract_centroid;
pub use io::{load_volume, save_volume};
pub use mask::MaskVolume;
pub use resample::normalize;
