use crate::error::{BiopsycatError, Result};
use crate::types::VoxelSpacing;
use ndarray::Array3;
use nifti::NiftiHeader;

/// NIfTI `sform_code` for scanner-anatomical coordinates
const NIFTI_XFORM_SCANNER_ANAT: i16 = 1;

/// A lesion mask held in memory
///
/// `data` is indexed `[x, y, z]` in voxel space; `header` carries the
/// spatial metadata (spacing, affine) written back alongside it.
#[derive(Debug, Clone)]
pub struct MaskVolume {
    pub header: NiftiHeader,
    pub data: Array3<f32>,
}

impl MaskVolume {
    /// Creates a volume from an existing header and voxel grid
    ///
    /// The header's dimensions are updated to match `data`.
    pub fn new(header: NiftiHeader, data: Array3<f32>) -> Result<Self> {
        let mut volume = Self { header, data };
        volume.sync_dims()?;
        Ok(volume)
    }

    /// Creates a volume with an axis-aligned affine at the origin
    pub fn from_data(data: Array3<f32>, spacing: VoxelSpacing) -> Result<Self> {
        let [sx, sy, sz] = spacing.as_array().map(|v| v as f32);
        let header = NiftiHeader {
            pixdim: [1.0, sx, sy, sz, 1.0, 1.0, 1.0, 1.0],
            sform_code: NIFTI_XFORM_SCANNER_ANAT,
            srow_x: [sx, 0.0, 0.0, 0.0],
            srow_y: [0.0, sy, 0.0, 0.0],
            srow_z: [0.0, 0.0, sz, 0.0],
            scl_slope: 1.0,
            scl_inter: 0.0,
            ..NiftiHeader::default()
        };
        Self::new(header, data)
    }

    /// Returns the voxel grid shape as `[x, y, z]`
    pub fn shape(&self) -> [usize; 3] {
        let (x, y, z) = self.data.dim();
        [x, y, z]
    }

    /// Returns the voxel spacing recorded in the header
    ///
    /// # Errors
    ///
    /// Returns an error if any spatial spacing is zero, negative or not finite
    pub fn spacing(&self) -> Result<VoxelSpacing> {
        let pixdim = &self.header.pixdim;
        let spacing = VoxelSpacing::new(pixdim[1] as f64, pixdim[2] as f64, pixdim[3] as f64);
        if !spacing.is_valid() {
            return Err(BiopsycatError::InvalidVolume(format!(
                "voxel spacing must be positive, got {}",
                spacing
            )));
        }
        Ok(spacing)
    }

    /// Number of non-zero voxels
    pub fn nonzero_count(&self) -> usize {
        self.data.iter().filter(|v| **v != 0.0).count()
    }

    /// Writes the grid shape into the header's `dim` field
    fn sync_dims(&mut self) -> Result<()> {
        let mut dim = [1u16; 8];
        dim[0] = 3;
        for (axis, len) in self.shape().into_iter().enumerate() {
            dim[axis + 1] = u16::try_from(len).map_err(|_| {
                BiopsycatError::InvalidVolume(format!(
                    "axis {} has {} voxels, more than NIfTI-1 allows",
                    axis, len
                ))
            })?;
        }
        self.header.dim = dim;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_sets_header() {
        let data = Array3::<f32>::zeros((4, 5, 6));
        let volume = MaskVolume::from_data(data, VoxelSpacing::new(0.5, 0.5, 2.0)).unwrap();

        assert_eq!(volume.shape(), [4, 5, 6]);
        assert_eq!(&volume.header.dim[..4], &[3, 4, 5, 6]);
        assert_eq!(volume.spacing().unwrap(), VoxelSpacing::new(0.5, 0.5, 2.0));
        assert_eq!(volume.header.srow_z[2], 2.0);
        assert_eq!(volume.nonzero_count(), 0);
    }

    #[test]
    fn test_invalid_spacing() {
        let data = Array3::<f32>::zeros((2, 2, 2));
        let mut volume = MaskVolume::from_data(data, VoxelSpacing::isotropic(1.0)).unwrap();
        volume.header.pixdim[2] = 0.0;
        assert!(matches!(
            volume.spacing(),
            Err(BiopsycatError::InvalidVolume(_))
        ));
    }

    #[test]
    fn test_nonzero_count() {
        let mut data = Array3::<f32>::zeros((3, 3, 3));
        data[[0, 1, 2]] = 1.0;
        data[[2, 2, 2]] = 3.0;
        let volume = MaskVolume::from_data(data, VoxelSpacing::default()).unwrap();
        assert_eq!(volume.nonzero_count(), 2);
    }
}
