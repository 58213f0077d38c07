//! Bounded k-best selection and majority voting
//!
//! The k-best list is kept sorted by ascending distance and never grows past
//! `k` entries. A free slot behaves as if it held a distance of `f32::MAX`,
//! so NaN distances and distances that overflowed to infinity never enter
//! the list.

use crate::example::Label;

/// One entry of the k-best list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub distance: f32,
    pub label: Label,
}

/// Reusable buffers for [`KnnClassifier::classify_with`].
///
/// Holding one of these across calls avoids allocating the k-best list and
/// the vote tally on every classification.
///
/// # Examples
///
/// ```
/// use knn_classifier::{ClassifyScratch, KnnClassifier};
///
/// let mut knn = KnnClassifier::new(1).unwrap();
/// knn.add_example(&[0.0], 1).unwrap();
/// knn.add_example(&[1.0], 2).unwrap();
///
/// let mut scratch = ClassifyScratch::with_k(1);
/// for query in [[0.1], [0.9]] {
///     knn.classify_with(&query, 1, &mut scratch).unwrap();
/// }
/// assert_eq!(scratch.neighbors()[0].label, 2);
/// ```
///
/// [`KnnClassifier::classify_with`]: crate::KnnClassifier::classify_with
#[derive(Debug, Clone, Default)]
pub struct ClassifyScratch {
    neighbors: Vec<Neighbor>,
    tally: Vec<(Label, usize)>,
}

impl ClassifyScratch {
    pub fn new() -> ClassifyScratch {
        ClassifyScratch::default()
    }

    /// Creates scratch buffers pre-sized for `k` neighbors.
    pub fn with_k(k: usize) -> ClassifyScratch {
        ClassifyScratch {
            neighbors: Vec::with_capacity(k),
            tally: Vec::with_capacity(k),
        }
    }

    /// Neighbors selected by the most recent classification, nearest first.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub(crate) fn into_neighbors(self) -> Vec<Neighbor> {
        self.neighbors
    }

    pub(crate) fn reset(&mut self, k: usize) {
        self.neighbors.clear();
        self.tally.clear();
        self.neighbors.reserve(k);
        self.tally.reserve(k);
    }

    /// Offers a candidate to the k-best list.
    ///
    /// The candidate goes in front of the first entry with a strictly
    /// greater distance, evicting the last entry when the list is full.
    /// Equal distances keep the earlier candidate ahead.
    pub(crate) fn offer(&mut self, k: usize, candidate: Neighbor) {
        let slot = self.neighbors
            .iter()
            .position(|n| candidate.distance < n.distance);

        match slot {
            Some(index) => {
                if self.neighbors.len() == k {
                    self.neighbors.pop();
                }
                self.neighbors.insert(index, candidate);
            }
            None if self.neighbors.len() < k && candidate.distance < f32::MAX => {
                self.neighbors.push(candidate);
            }
            None => {}
        }
    }

    /// Tallies labels over the selected neighbors and returns the winner
    /// with its vote count. Ties go to the label tallied first.
    ///
    /// Returns `None` when no neighbor was selected.
    pub(crate) fn vote(&mut self) -> Option<(Label, usize)> {
        self.tally.clear();

        for neighbor in &self.neighbors {
            match self.tally.iter_mut().find(|(label, _)| *label == neighbor.label) {
                Some((_, count)) => *count += 1,
                None => self.tally.push((neighbor.label, 1)),
            }
        }

        let mut winner: Option<(Label, usize)> = None;
        for &(label, count) in &self.tally {
            if winner.is_none_or(|(_, max)| count > max) {
                winner = Some((label, count));
            }
        }

        winner
    }
}
