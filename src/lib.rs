//! # knn-classifier - A Minimal k-Nearest-Neighbors Classifier
//!
//! A small classifier for resource-constrained devices. Labeled feature
//! vectors are stored in insertion order and queries are classified by
//! majority vote among the k closest examples under Euclidean distance.
//!
//! ## Example
//!
//! ```
//! use knn_classifier::KnnClassifier;
//!
//! let mut knn = KnnClassifier::new(2).unwrap();
//!
//! // Add labeled examples
//! knn.add_example(&[0.0, 0.0], 1).unwrap();
//! knn.add_example(&[10.0, 10.0], 2).unwrap();
//! knn.add_example(&[0.1, 0.1], 1).unwrap();
//!
//! // Classify a query against its single nearest example
//! let result = knn.classify(&[0.0, 0.0], 1).unwrap().unwrap();
//! assert_eq!(result.label, 1);
//! assert_eq!(knn.confidence(), Some(1.0));
//!
//! // Asking for more neighbors than there are examples is not possible
//! assert!(knn.classify(&[0.0, 0.0], 4).unwrap().is_none());
//! assert!(knn.confidence().is_none());
//! ```

pub mod error;
pub mod vector;
mod classifier;
mod example;
mod neighbors;

// Re-export the classifier as the primary public API
pub use classifier::{Classification, KnnClassifier};
pub use error::{KnnError, Result};
pub use example::{Example, Label};
pub use neighbors::{ClassifyScratch, Neighbor};
