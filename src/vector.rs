//! This is the vector math module
//! Provide Euclidean distance between feature vectors

use crate::error::{KnnError, Result};

/// Euclidean Distance
/// dist = sqrt(sum((a[i] - b[i])^2)) for i = 0..a.len()
/// Can only process vectors with same dimensions
pub fn euclidean_distance(left: &[f32], right: &[f32]) -> Result<f32> {
    if left.len() != right.len() {
        return Err(KnnError::DimensionMismatch {
            expected: left.len(),
            actual: right.len(),
        });
    }

    let sum_sq = left.iter()
        .zip(right.iter())
        .map(|(x, y)| {
            let delta = x - y;
            delta * delta
        })
        .sum::<f32>();

    Ok(sum_sq.sqrt())
}
