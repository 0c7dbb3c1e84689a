//! Types for the suggestion engine

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::part::{Category, Part, PartId};

/// A ranked candidate for one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub part: Part,
    pub bucket: Category,
    pub score: f64,
    /// Derived from the part's own attributes only
    pub reason: String,
}

/// Output of one suggestion pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionSet {
    /// Global top-N across every bucket
    pub flat: Vec<Suggestion>,
    /// Top-N per bucket; buckets with no survivors are absent
    pub by_bucket: BTreeMap<Category, Vec<Suggestion>>,
}

impl SuggestionSet {
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty() && self.by_bucket.values().all(Vec::is_empty)
    }

    pub fn bucket(&self, category: Category) -> &[Suggestion] {
        self.by_bucket.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Result caps for the two views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionLimits {
    pub flat: usize,
    pub per_bucket: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self { flat: super::DEFAULT_FLAT_LIMIT, per_bucket: super::DEFAULT_PER_BUCKET_LIMIT }
    }
}

/// How often a candidate was picked alongside the base, supplied by the caller
pub trait CoOccurrence {
    fn weight(&self, part_id: &PartId) -> f64;
}

/// No co-occurrence data: every weight is zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCoOccurrence;

impl CoOccurrence for NoCoOccurrence {
    fn weight(&self, _part_id: &PartId) -> f64 {
        0.0
    }
}

impl CoOccurrence for HashMap<PartId, f64> {
    fn weight(&self, part_id: &PartId) -> f64 {
        self.get(part_id).copied().filter(|weight| weight.is_finite()).unwrap_or(0.0)
    }
}

impl<T: CoOccurrence + ?Sized> CoOccurrence for &T {
    fn weight(&self, part_id: &PartId) -> f64 {
        (**self).weight(part_id)
    }
}
