//! Composite scoring and summary generation for evaluated candidates.

use crate::schema::{Architecture, CycleRecord, ScoreSet};

/// Weight on the performance signal.
const PERFORMANCE_WEIGHT: f64 = 0.6;
/// Weight on the novelty signal.
const NOVELTY_WEIGHT: f64 = 0.3;
/// Penalty weight on the complexity signal.
const COMPLEXITY_WEIGHT: f64 = 0.1;

/// Reduce the three quality signals to the single ranking scalar.
///
/// Performance dominates, novelty is rewarded, complexity is mildly
/// penalized. The result is clamped to [0, 1]; this is the only place in
/// the pipeline where scores are clamped.
pub fn composite_score(scores: &ScoreSet) -> f64 {
    let weighted = PERFORMANCE_WEIGHT * scores.performance + NOVELTY_WEIGHT * scores.novelty
        - COMPLEXITY_WEIGHT * scores.complexity;
    weighted.clamp(0.0, 1.0)
}

/// Package one evaluated candidate into its persisted record.
///
/// Pure and deterministic: identical inputs always yield an identical
/// composite score and summary.
pub fn analyze(candidate: &Architecture, scores: ScoreSet) -> CycleRecord {
    let composite = composite_score(&scores);
    let summary = format!(
        "Architecture {} achieved a performance score of {:.2}, novelty score \
         of {:.2} and complexity score of {:.2}. Composite score: {:.2}.",
        candidate.display_id(),
        scores.performance,
        scores.novelty,
        scores.complexity,
        composite
    );
    CycleRecord {
        architecture: candidate.clone(),
        scores,
        composite_score: composite,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(performance: f64, novelty: f64, complexity: f64) -> ScoreSet {
        ScoreSet {
            performance,
            novelty,
            complexity,
            diagnostic: String::new(),
        }
    }

    #[test]
    fn test_composite_weighting() {
        assert!((composite_score(&scores(0.5, 0.5, 0.5)) - 0.4).abs() < 1e-12);
        assert!((composite_score(&scores(1.0, 1.0, 0.0)) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_composite_clamps_to_unit_interval() {
        // Unclamped oracle output can push the weighted sum out of range.
        assert_eq!(composite_score(&scores(5.0, 5.0, 0.0)), 1.0);
        assert_eq!(composite_score(&scores(0.0, 0.0, 3.0)), 0.0);
        assert_eq!(composite_score(&scores(-2.0, -2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_composite_deterministic() {
        let input = scores(0.123_456, 0.654_321, 0.333_333);
        assert_eq!(composite_score(&input), composite_score(&input));
    }

    #[test]
    fn test_summary_format() {
        let mut candidate = Architecture::baseline();
        candidate.id = Some("arch_0000042".to_string());

        let record = analyze(&candidate, scores(0.8, 0.4, 0.2));
        assert_eq!(
            record.summary,
            "Architecture arch_0000042 achieved a performance score of 0.80, \
             novelty score of 0.40 and complexity score of 0.20. \
             Composite score: 0.58."
        );
        assert!((record.composite_score - 0.58).abs() < 1e-12);
    }

    #[test]
    fn test_summary_without_id_reads_unknown() {
        let record = analyze(&Architecture::baseline(), scores(0.5, 0.5, 0.5));
        assert!(record.summary.starts_with("Architecture unknown achieved"));
    }

    #[test]
    fn test_record_carries_inputs_through() {
        let candidate = Architecture::baseline();
        let input = scores(0.9, 0.1, 0.7);
        let record = analyze(&candidate, input.clone());
        assert_eq!(record.architecture, candidate);
        assert_eq!(record.scores, input);
    }
}
