use super::MaskVolume;
use crate::error::{BiopsycatError, Result};
use log::debug;
use ndarray::{ArrayD, Axis, Ix3};
use nifti::writer::WriterOptions;
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
use std::path::Path;

/// Loads a NIfTI mask volume (`.nii` or `.nii.gz`)
///
/// Trailing singleton dimensions (e.g. `X x Y x Z x 1`) are dropped.
/// Intensity scaling from the header is applied to the voxel values.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a 3D volume
pub fn load_volume(path: impl AsRef<Path>) -> Result<MaskVolume> {
    let path = path.as_ref();
    let object = ReaderOptions::new()
        .read_file(path)
        .map_err(|e| BiopsycatError::nifti(path, e))?;
    let header = object.header().clone();
    let data = object
        .into_volume()
        .into_ndarray::<f32>()
        .map_err(|e| BiopsycatError::nifti(path, e))?;

    let data = into_spatial(data).map_err(|msg| {
        BiopsycatError::InvalidVolume(format!("{}: {}", path.display(), msg))
    })?;
    debug!("Loaded {} with shape {:?}", path.display(), data.dim());

    let mut volume = MaskVolume::new(header, data)?;
    // Values are already scaled by into_ndarray
    volume.header.scl_slope = 1.0;
    volume.header.scl_inter = 0.0;
    Ok(volume)
}

/// Writes a mask volume to `path`, compressing when it ends in `.gz`
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn save_volume(volume: &MaskVolume, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    WriterOptions::new(path)
        .reference_header(&volume.header)
        .write_nifti(&volume.data)
        .map_err(|e| BiopsycatError::nifti(path, e))?;
    debug!("Wrote {} with shape {:?}", path.display(), volume.data.dim());
    Ok(())
}

/// Reduces a dynamic-dimension array to its three spatial axes
fn into_spatial(mut data: ArrayD<f32>) -> std::result::Result<ndarray::Array3<f32>, String> {
    if data.ndim() < 3 {
        return Err(format!("expected 3 spatial dimensions, found {}", data.ndim()));
    }
    while data.ndim() > 3 {
        let last = Axis(data.ndim() - 1);
        if data.len_of(last) != 1 {
            return Err(format!(
                "expected a single 3D volume, found shape {:?}",
                data.shape()
            ));
        }
        data = data.index_axis_move(last, 0);
    }
    data.into_dimensionality::<Ix3>()
        .map_err(|e| format!("cannot view data as 3D: {}", e))
}
