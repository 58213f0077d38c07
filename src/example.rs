//! The example module
//! A stored, labeled feature vector

use crate::error::Result;
use crate::vector::euclidean_distance;

/// Class identifier attached to every example.
pub type Label = i32;

/// A labeled feature vector owned by a [`KnnClassifier`](crate::KnnClassifier).
///
/// The features are copied on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    features: Box<[f32]>,
    label: Label,
}

impl Example {
    /// Creates an example holding a private copy of `features`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knn_classifier::Example;
    ///
    /// let buffer = vec![3.0, 4.0];
    /// let example = Example::new(&buffer, 7);
    /// drop(buffer);
    ///
    /// assert_eq!(example.features(), &[3.0, 4.0]);
    /// assert_eq!(example.label(), 7);
    /// ```
    pub fn new(features: &[f32], label: Label) -> Example {
        Example { features: features.into(), label }
    }

    pub fn features(&self) -> &[f32] {
        &self.features
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Euclidean distance between this example and `query`.
    ///
    /// # Returns
    ///
    /// * `Ok(f32)` - The L2 distance
    /// * `Err(KnnError)` - If `query` length differs from the stored length
    ///
    /// # Examples
    ///
    /// ```
    /// use knn_classifier::Example;
    ///
    /// let example = Example::new(&[3.0, 4.0], 1);
    /// assert_eq!(example.distance(&[0.0, 0.0]).unwrap(), 5.0);
    /// assert!(example.distance(&[0.0]).is_err());
    /// ```
    pub fn distance(&self, query: &[f32]) -> Result<f32> {
        euclidean_distance(&self.features, query)
    }
}
