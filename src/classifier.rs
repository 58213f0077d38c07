//! The classifier module
//! Stores labeled examples and classifies queries by k-nearest-neighbor vote

use crate::error::{KnnError, Result};
use crate::example::{Example, Label};
use crate::neighbors::{ClassifyScratch, Neighbor};
use tracing::{debug, trace, warn};

/// Outcome of a successful classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Winning label of the majority vote
    pub label: Label,
    /// Fraction of the k neighbors that voted for `label`
    pub confidence: f32,
}

#[derive(Debug, Clone)]
pub struct KnnClassifier {
    input_length: usize,
    examples: Vec<Example>,
    last_confidence: Option<f32>,
}

impl KnnClassifier {
    /// Creates an empty classifier for feature vectors of `input_length`.
    ///
    /// # Returns
    ///
    /// * `Ok(KnnClassifier)` - An empty classifier
    /// * `Err(KnnError::InvalidInputLength)` - If `input_length` is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use knn_classifier::KnnClassifier;
    ///
    /// let knn = KnnClassifier::new(3).unwrap();
    /// assert_eq!(knn.count(), 0);
    /// assert_eq!(knn.input_length(), 3);
    ///
    /// assert!(KnnClassifier::new(0).is_err());
    /// ```
    pub fn new(input_length: usize) -> Result<KnnClassifier> {
        KnnClassifier::with_capacity(input_length, 0)
    }

    /// Creates an empty classifier with room for `capacity` examples.
    ///
    /// Reserving up front keeps the storage from growing while examples are
    /// collected, which matters on devices with a small heap.
    pub fn with_capacity(input_length: usize, capacity: usize) -> Result<KnnClassifier> {
        if input_length == 0 {
            return Err(KnnError::InvalidInputLength);
        }

        Ok(KnnClassifier {
            input_length,
            examples: Vec::with_capacity(capacity),
            last_confidence: None,
        })
    }

    pub fn input_length(&self) -> usize {
        self.input_length
    }

    /// Appends a labeled example after every example added so far.
    ///
    /// The features are copied, so the caller's buffer can be reused
    /// immediately.
    ///
    /// # Arguments
    ///
    /// * `features` - Feature vector, exactly `input_length` values
    /// * `label` - Class of the example
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Example stored
    /// * `Err(KnnError::DimensionMismatch)` - If `features` has the wrong length
    ///
    /// # Examples
    ///
    /// ```
    /// use knn_classifier::KnnClassifier;
    ///
    /// let mut knn = KnnClassifier::new(2).unwrap();
    /// knn.add_example(&[0.0, 1.0], 1).unwrap();
    /// assert_eq!(knn.count(), 1);
    ///
    /// // Wrong length is rejected and nothing is stored
    /// assert!(knn.add_example(&[0.0, 1.0, 2.0], 1).is_err());
    /// assert_eq!(knn.count(), 1);
    /// ```
    pub fn add_example(&mut self, features: &[f32], label: Label) -> Result<()> {
        self.check_length(features)?;

        self.examples.push(Example::new(features, label));
        debug!(label, count = self.examples.len(), "example added");

        Ok(())
    }

    /// Classifies `query` by majority vote among its `k` nearest examples.
    ///
    /// Every example is scanned once in insertion order. The `k` closest by
    /// Euclidean distance are kept, earlier examples winning distance ties.
    /// The most frequent label among them wins; on equal counts the label
    /// of the nearer neighbor wins. The confidence is the winning count
    /// divided by `k` and is also retrievable through [`confidence`].
    ///
    /// Classification is impossible when `k` is zero or larger than the
    /// number of stored examples. In that case `Ok(None)` is returned and
    /// the recorded confidence is cleared.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Classification))` - Winning label and its confidence
    /// * `Ok(None)` - Classification impossible for this `k`
    /// * `Err(KnnError::DimensionMismatch)` - If `query` has the wrong length
    ///
    /// # Examples
    ///
    /// ```
    /// use knn_classifier::KnnClassifier;
    ///
    /// let mut knn = KnnClassifier::new(2).unwrap();
    /// knn.add_example(&[0.0, 0.0], 1).unwrap();
    /// knn.add_example(&[10.0, 10.0], 2).unwrap();
    /// knn.add_example(&[0.1, 0.1], 1).unwrap();
    ///
    /// let result = knn.classify(&[0.0, 0.0], 3).unwrap().unwrap();
    /// assert_eq!(result.label, 1);
    /// assert!((result.confidence - 2.0 / 3.0).abs() < 1e-6);
    ///
    /// // More neighbors than examples
    /// assert!(knn.classify(&[0.0, 0.0], 4).unwrap().is_none());
    /// assert!(knn.confidence().is_none());
    /// ```
    ///
    /// [`confidence`]: KnnClassifier::confidence
    pub fn classify(&mut self, query: &[f32], k: usize) -> Result<Option<Classification>> {
        let mut scratch = ClassifyScratch::new();
        self.classify_with(query, k, &mut scratch)
    }

    /// Same as [`classify`](KnnClassifier::classify), reusing the buffers in
    /// `scratch` instead of allocating new ones.
    pub fn classify_with(
        &mut self,
        query: &[f32],
        k: usize,
        scratch: &mut ClassifyScratch,
    ) -> Result<Option<Classification>> {
        self.check_length(query)?;

        let count = self.examples.len();
        if k == 0 || k > count {
            trace!(k, count, "classification impossible");
            self.last_confidence = None;
            return Ok(None);
        }

        self.select_neighbors(query, k, scratch)?;

        let Some((label, votes)) = scratch.vote() else {
            warn!(k, count, "no example within a finite distance of the query");
            self.last_confidence = None;
            return Ok(None);
        };

        let confidence = votes as f32 / k as f32;
        self.last_confidence = Some(confidence);
        trace!(k, count, label, votes, "query classified");

        Ok(Some(Classification { label, confidence }))
    }

    /// Returns the `k` examples nearest to `query` as (distance, label)
    /// pairs, nearest first.
    ///
    /// Uses the same selection as [`classify`](KnnClassifier::classify) but
    /// does not vote and does not touch the recorded confidence. A `k`
    /// larger than the number of examples returns all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use knn_classifier::KnnClassifier;
    ///
    /// let mut knn = KnnClassifier::new(2).unwrap();
    /// knn.add_example(&[3.0, 4.0], 1).unwrap();
    /// knn.add_example(&[1.0, 0.0], 2).unwrap();
    ///
    /// let neighbors = knn.nearest_neighbors(&[0.0, 0.0], 5).unwrap();
    /// assert_eq!(neighbors.len(), 2);
    /// assert_eq!(neighbors[0].label, 2);
    /// assert_eq!(neighbors[1].distance, 5.0);
    /// ```
    pub fn nearest_neighbors(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        self.check_length(query)?;

        let k = k.min(self.examples.len());
        let mut scratch = ClassifyScratch::with_k(k);
        if k > 0 {
            self.select_neighbors(query, k, &mut scratch)?;
        }

        Ok(scratch.into_neighbors())
    }

    /// Confidence of the most recent classification.
    ///
    /// `None` before the first classification and after any call to
    /// [`classify`](KnnClassifier::classify) that found classification
    /// impossible.
    pub fn confidence(&self) -> Option<f32> {
        self.last_confidence
    }

    /// Removes every example carrying `label`, keeping the others in order.
    ///
    /// # Returns
    ///
    /// The number of examples removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use knn_classifier::KnnClassifier;
    ///
    /// let mut knn = KnnClassifier::new(1).unwrap();
    /// knn.add_example(&[0.0], 1).unwrap();
    /// knn.add_example(&[1.0], 2).unwrap();
    /// knn.add_example(&[2.0], 1).unwrap();
    ///
    /// assert_eq!(knn.clear_class(1), 2);
    /// assert_eq!(knn.count(), 1);
    /// assert_eq!(knn.count_by_class(1), 0);
    /// ```
    pub fn clear_class(&mut self, label: Label) -> usize {
        let before = self.examples.len();
        self.examples.retain(|example| example.label() != label);

        let removed = before - self.examples.len();
        debug!(label, removed, count = self.examples.len(), "class cleared");

        removed
    }

    /// Removes every example.
    pub fn clear_all_classes(&mut self) {
        let removed = self.examples.len();
        self.examples.clear();
        debug!(removed, "all classes cleared");
    }

    /// Returns the number of examples carrying `label`.
    pub fn count_by_class(&self, label: Label) -> usize {
        self.examples
            .iter()
            .filter(|example| example.label() == label)
            .count()
    }

    /// Returns the number of stored examples.
    pub fn count(&self) -> usize {
        self.examples.len()
    }

    /// Iterates over the stored examples in insertion order.
    pub fn examples(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }

    /// Fills `scratch` with the k nearest examples to `query`.
    ///
    /// `k` must be at least 1 and `query` must already be length-checked.
    fn select_neighbors(&self, query: &[f32], k: usize, scratch: &mut ClassifyScratch) -> Result<()> {
        scratch.reset(k);

        for example in &self.examples {
            let distance = example.distance(query)?;
            scratch.offer(k, Neighbor { distance, label: example.label() });
        }

        Ok(())
    }

    fn check_length(&self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.input_length {
            return Err(KnnError::DimensionMismatch {
                expected: self.input_length,
                actual: vector.len(),
            });
        }

        Ok(())
    }
}
