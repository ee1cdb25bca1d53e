//! Ranking of classification outputs.
//!
//! Pairs every probability with its label by position and orders the pairs
//! from most to least likely. Every class is kept; callers that only want the
//! first few use [`RankedResult::top`].

use crate::core::errors::{ClassifierError, PipelineStage};
use crate::core::tensor::PredictionVector;
use serde::Serialize;
use std::cmp::Ordering;

/// One label with its probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// Class name taken from the metadata.
    pub label: String,
    /// Unrounded probability as returned by the model.
    pub probability: f32,
    /// Position of the class in the model output.
    pub index: usize,
}

impl RankedEntry {
    /// Probability as a percentage with exactly two decimals, e.g. `"70.00"`.
    pub fn percentage(&self) -> String {
        format_fixed_2(self.probability as f64 * 100.0)
    }
}

/// Formats `value` with two decimals, rounding exact ties away from zero.
///
/// `{:.2}` rounds a value that sits exactly halfway (e.g. `3.125`) to even;
/// results shown to users round it up instead. A finite `f64` is an exact
/// two-decimal tie only when `value * 8` is an odd integer.
pub fn format_fixed_2(value: f64) -> String {
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 && eighths < (1u64 << 48) as f64 {
        let cents = (eighths * 12.5 + 0.5) as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }
    format!("{:.2}", value)
}

impl std::fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}%", self.label, self.percentage())
    }
}

/// Labels ordered by non-increasing probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most likely class.
    pub fn best(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    /// The `k` most likely classes, or all of them when `k` exceeds the count.
    pub fn top(&self, k: usize) -> &[RankedEntry] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for RankedResult {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Descending order on probabilities. NaN sorts after every number and `-0.0`
/// ties with `0.0`, so the comparison is total and ties stay stable.
fn descending(a: f32, b: f32) -> Ordering {
    let key = |p: f32| if p.is_nan() { f32::NEG_INFINITY } else { p + 0.0 };
    key(b).total_cmp(&key(a))
}

/// Sorts entries in place, most likely first. Equal probabilities keep their order.
pub fn sort_entries(entries: &mut [RankedEntry]) {
    entries.sort_by(|a, b| descending(a.probability, b.probability));
}

/// Pairs `vector` with `labels` and sorts the pairs by descending probability.
///
/// # Errors
///
/// Returns `ShapeMismatch` when the vector and the label list differ in length.
pub fn rank(vector: &PredictionVector, labels: &[String]) -> Result<RankedResult, ClassifierError> {
    if vector.len() != labels.len() {
        return Err(ClassifierError::shape_mismatch(
            PipelineStage::Ranking,
            labels.len(),
            vector.len(),
        ));
    }

    let mut entries: Vec<RankedEntry> = vector
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(index, (probability, label))| RankedEntry {
            label: label.clone(),
            probability,
            index,
        })
        .collect();

    sort_entries(&mut entries);

    Ok(RankedResult { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(result: &RankedResult) -> Vec<(&str, f32)> {
        result
            .iter()
            .map(|e| (e.label.as_str(), e.probability))
            .collect()
    }

    #[test]
    fn test_rank_orders_by_probability() {
        let vector = PredictionVector::from(vec![0.1, 0.7, 0.2]);
        let result = rank(&vector, &labels(&["cat", "dog", "bird"])).unwrap();
        assert_eq!(pairs(&result), vec![("dog", 0.7), ("bird", 0.2), ("cat", 0.1)]);
        assert_eq!(
            result.iter().map(|e| e.index).collect::<Vec<_>>(),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let vector = PredictionVector::from(vec![0.5, 0.5]);
        let result = rank(&vector, &labels(&["a", "b"])).unwrap();
        assert_eq!(pairs(&result), vec![("a", 0.5), ("b", 0.5)]);

        let vector = PredictionVector::from(vec![0.2, 0.4, 0.2, 0.0, -0.0, 0.2]);
        let result = rank(&vector, &labels(&["a", "b", "c", "d", "e", "f"])).unwrap();
        let order: Vec<&str> = result.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c", "f", "d", "e"]);
    }

    #[test]
    fn test_rank_length_mismatch() {
        let vector = PredictionVector::from(vec![0.1, 0.2, 0.7]);
        let err = rank(&vector, &labels(&["a", "b"])).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::ShapeMismatch {
                stage: PipelineStage::Ranking,
                expected: 2,
                actual: 3,
            }
        ));
    }

    #[test]
    fn test_rank_keeps_every_class() {
        let vector = PredictionVector::from(vec![0.05; 20]);
        let names: Vec<String> = (0..20).map(|i| format!("class{i}")).collect();
        let result = rank(&vector, &names).unwrap();
        assert_eq!(result.len(), 20);
        assert_eq!(result.top(3).len(), 3);
        assert_eq!(result.top(100).len(), 20);
    }

    #[test]
    fn test_rank_sorted_and_idempotent() {
        let values = vec![0.3, 0.01, 0.3, 0.9, 0.0, 0.15, 0.3, 0.04];
        let names: Vec<String> = (0..values.len()).map(|i| i.to_string()).collect();
        let result = rank(&PredictionVector::from(values), &names).unwrap();

        assert!(
            result
                .entries()
                .windows(2)
                .all(|w| w[0].probability >= w[1].probability)
        );

        let mut again = result.entries().to_vec();
        sort_entries(&mut again);
        assert_eq!(again.as_slice(), result.entries());
    }

    #[test]
    fn test_nan_sorts_last() {
        let vector = PredictionVector::from(vec![f32::NAN, 0.2, 0.8]);
        let result = rank(&vector, &labels(&["broken", "low", "high"])).unwrap();
        let order: Vec<&str> = result.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(order, vec!["high", "low", "broken"]);
    }

    #[test]
    fn test_percentage_format() {
        let vector = PredictionVector::from(vec![0.1, 0.7, 0.2]);
        let result = rank(&vector, &labels(&["cat", "dog", "bird"])).unwrap();
        let best = result.best().unwrap();
        assert_eq!(best.percentage(), "70.00");
        assert_eq!(best.probability, 0.7);
        assert_eq!(best.to_string(), "dog: 70.00%");

        let tiny = RankedEntry {
            label: "x".to_string(),
            probability: 0.0,
            index: 0,
        };
        assert_eq!(tiny.percentage(), "0.00");
    }

    #[test]
    fn test_percentage_rounds_exact_ties_up() {
        let entry = |probability: f32| RankedEntry {
            label: "x".to_string(),
            probability,
            index: 0,
        };
        assert_eq!(entry(1.0 / 32.0).percentage(), "3.13");
        assert_eq!(entry(5.0 / 32.0).percentage(), "15.63");
        assert_eq!(entry(1.0 / 8.0).percentage(), "12.50");
        assert_eq!(entry(1.0 / 64.0).percentage(), "1.56");
        assert_eq!(entry(1.0).percentage(), "100.00");

        assert_eq!(format_fixed_2(0.125), "0.13");
        assert_eq!(format_fixed_2(-3.125), "-3.13");
        assert_eq!(format_fixed_2(2.675), "2.67");
        assert_eq!(format_fixed_2(f64::NAN), "NaN");
    }

    #[test]
    fn test_empty_input() {
        let result = rank(&PredictionVector::from(Vec::new()), &[]).unwrap();
        assert!(result.is_empty());
        assert!(result.best().is_none());
    }
}
