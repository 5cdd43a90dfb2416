//! Nearest-neighbour resampling onto a new voxel spacing
//!
//! The physical extent of the grid is kept, not its voxel count. Voxel
//! centres of the output grid are mapped back to the closest input
//! voxel, so label values are copied and never blended.

use super::MaskVolume;
use crate::error::{BiopsycatError, Result};
use crate::types::VoxelSpacing;
use ndarray::Array3;

/// Resamples a mask onto `target` spacing
///
/// The origin is unchanged; `pixdim` and the sform axes are rescaled to
/// the new spacing. Resampling a volume already at `target` returns an
/// identical grid.
///
/// # Errors
///
/// Returns an error if either spacing is not strictly positive or the
/// output grid does not fit in a NIfTI-1 header
pub fn normalize(volume: &MaskVolume, target: VoxelSpacing) -> Result<MaskVolume> {
    if !target.is_valid() {
        return Err(BiopsycatError::InvalidSpacing(format!(
            "target spacing must be positive, got {}",
            target
        )));
    }
    let source = volume.spacing()?.as_array();
    let target_arr = target.as_array();
    let shape = volume.shape();

    let maps: Vec<Vec<usize>> = (0..3)
        .map(|axis| axis_map(shape[axis], source[axis], target_arr[axis]))
        .collect();

    let data = Array3::from_shape_fn(
        (maps[0].len(), maps[1].len(), maps[2].len()),
        |(i, j, k)| volume.data[[maps[0][i], maps[1][j], maps[2][k]]],
    );

    let mut header = volume.header.clone();
    for axis in 0..3 {
        let scale = (target_arr[axis] / source[axis]) as f32;
        header.pixdim[axis + 1] = target_arr[axis] as f32;
        header.srow_x[axis] *= scale;
        header.srow_y[axis] *= scale;
        header.srow_z[axis] *= scale;
    }

    MaskVolume::new(header, data)
}

/// Number of output voxels along an axis of `len` voxels
fn output_len(len: usize, source: f64, target: f64) -> usize {
    ((len as f64 * source / target).round() as usize).max(1)
}

/// Maps each output index on an axis to its nearest input index
fn axis_map(len: usize, source: f64, target: f64) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let last = len - 1;
    (0..output_len(len, source, target))
        .map(|out| {
            let position = out as f64 * target / source;
            (position.round() as usize).min(last)
        })
        .collect()
}
