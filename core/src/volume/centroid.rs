use crate::types::Centroid;
use ndarray::Array3;

/// Computes the centroid of all non-zero voxels
///
/// Each axis is the arithmetic mean of the voxel indices, rounded to
/// one decimal place. All non-zero voxels contribute to a single
/// centroid, however many disjoint regions they form.
///
/// Returns `None` when the mask has no non-zero voxels.
pub fn extract_centroid(data: &Array3<f32>) -> Option<Centroid> {
    let mut sums = [0.0f64; 3];
    let mut count = 0usize;

    for ((x, y, z), value) in data.indexed_iter() {
        if *value != 0.0 {
            sums[0] += x as f64;
            sums[1] += y as f64;
            sums[2] += z as f64;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some(Centroid::new(sums[0] / n, sums[1] / n, sums[2] / n).rounded())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_voxels() {
        let mut data = Array3::<f32>::zeros((8, 8, 8));
        data[[2, 2, 2]] = 1.0;
        data[[4, 4, 6]] = 1.0;
        assert_eq!(extract_centroid(&data), Some(Centroid::new(3.0, 3.0, 4.0)));
    }

    #[test]
    fn test_block_centred_on_index() {
        let mut data = Array3::<f32>::zeros((21, 21, 21));
        for x in 9..=11 {
            for y in 9..=11 {
                for z in 9..=11 {
                    data[[x, y, z]] = 1.0;
                }
            }
        }
        assert_eq!(
            extract_centroid(&data),
            Some(Centroid::new(10.0, 10.0, 10.0))
        );
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let mut data = Array3::<f32>::zeros((4, 4, 4));
        data[[0, 0, 0]] = 1.0;
        data[[1, 0, 0]] = 1.0;
        data[[1, 1, 0]] = 1.0;
        // x = 2/3, y = 1/3
        assert_eq!(extract_centroid(&data), Some(Centroid::new(0.7, 0.3, 0.0)));
    }

    #[test]
    fn test_disjoint_regions_average_together() {
        let mut data = Array3::<f32>::zeros((10, 10, 10));
        data[[0, 0, 0]] = 1.0;
        data[[9, 9, 9]] = 2.0;
        assert_eq!(extract_centroid(&data), Some(Centroid::new(4.5, 4.5, 4.5)));
    }

    #[test]
    fn test_negative_values_count_as_nonzero() {
        let mut data = Array3::<f32>::zeros((3, 3, 3));
        data[[2, 1, 0]] = -1.0;
        assert_eq!(extract_centroid(&data), Some(Centroid::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn test_empty_mask() {
        let data = Array3::<f32>::zeros((4, 4, 4));
        assert_eq!(extract_centroid(&data), None);
    }
}
