//! Persisted record types for discovery cycles.

use serde::{Deserialize, Serialize};

use super::Architecture;

/// The three quality signals produced by scoring, plus the raw oracle text.
///
/// Each value is nominally in [0, 1] but arrives unclamped from the oracle;
/// clamping happens only when the composite score is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    /// Estimated strength relative to a baseline.
    pub performance: f64,
    /// Estimated distance from known designs.
    pub novelty: f64,
    /// Estimated computational cost.
    pub complexity: f64,
    /// Raw oracle output, or the fallback marker when scoring degraded.
    #[serde(default)]
    pub diagnostic: String,
}

/// One persisted outcome of a discovery cycle.
///
/// Records are append-only: once written, never mutated or deleted. The
/// store's parent sampling ranks the full history by `composite_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// The candidate that was scored.
    pub architecture: Architecture,
    /// Raw quality signals from the evaluator.
    pub scores: ScoreSet,
    /// Ranking scalar in [0, 1].
    pub composite_score: f64,
    /// Human-readable one-line report.
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let mut architecture = Architecture::baseline();
        architecture.id = Some("arch_1234567".to_string());
        let record = CycleRecord {
            architecture,
            scores: ScoreSet {
                performance: 0.8,
                novelty: 0.4,
                complexity: 0.2,
                diagnostic: "{\"performance\": 0.8}".to_string(),
            },
            composite_score: 0.58,
            summary: "summary text".to_string(),
        };

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: CycleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_diagnostic_defaults_empty() {
        let json = r#"{
            "architecture": {"hidden_size": 512},
            "scores": {"performance": 0.5, "novelty": 0.5, "complexity": 0.5},
            "composite_score": 0.4,
            "summary": "s"
        }"#;
        let record: CycleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.scores.diagnostic, "");
    }
}
