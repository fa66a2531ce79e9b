//! Architecture description types for the discovery loop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bounds for one recognized numeric hyperparameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Key in the architecture's parameter map.
    pub name: &'static str,
    /// Inclusive lower bound.
    pub lo: i64,
    /// Inclusive upper bound.
    pub hi: i64,
}

impl ParamSpec {
    /// Width of the valid range.
    #[inline]
    pub fn width(&self) -> i64 {
        self.hi - self.lo
    }

    /// Integer midpoint of the range. Truncating division, so an odd
    /// range sum rounds down (e.g. [1, 32] -> 16).
    #[inline]
    pub fn midpoint(&self) -> i64 {
        (self.lo + self.hi) / 2
    }

    /// Clamp a value into the closed range.
    #[inline]
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.lo, self.hi)
    }
}

/// Hyperparameters subject to mutation. Any other key rides along untouched.
pub const RECOGNIZED_PARAMS: [ParamSpec; 3] = [
    ParamSpec {
        name: "hidden_size",
        lo: 32,
        hi: 2048,
    },
    ParamSpec {
        name: "num_layers",
        lo: 1,
        hi: 48,
    },
    ParamSpec {
        name: "num_heads",
        lo: 1,
        hi: 32,
    },
];

/// A candidate architecture: a flat map of named hyperparameters plus an
/// opaque tracking id.
///
/// Serializes as a single flat JSON object. The id is assigned fresh on
/// every mutation and is used only for display and traceability, never for
/// equality or lookup. Values are immutable once produced; mutation always
/// yields a new `Architecture`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    /// Tracking id, absent on the baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Named hyperparameters. Recognized numeric keys are mutated; the
    /// rest pass through byte-for-byte.
    #[serde(flatten)]
    pub params: BTreeMap<String, Value>,
}

impl Architecture {
    /// Fixed starting point used when no history exists yet.
    pub fn baseline() -> Self {
        let mut params = BTreeMap::new();
        params.insert("hidden_size".to_string(), Value::from(512));
        params.insert("num_layers".to_string(), Value::from(6));
        params.insert("num_heads".to_string(), Value::from(8));
        Self { id: None, params }
    }

    /// Numeric view of a parameter, if present and numeric.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        self.params.get(key).and_then(Value::as_f64)
    }

    /// Set an integer parameter value.
    pub fn set(&mut self, key: &str, value: i64) {
        self.params.insert(key.to_string(), Value::from(value));
    }

    /// Tracking id for display, or `"unknown"` when none is assigned.
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoints_truncate() {
        let by_name: BTreeMap<&str, ParamSpec> =
            RECOGNIZED_PARAMS.iter().map(|s| (s.name, *s)).collect();
        assert_eq!(by_name["hidden_size"].midpoint(), 1040);
        assert_eq!(by_name["num_layers"].midpoint(), 24);
        // (1 + 32) / 2 truncates to 16, not 16.5 rounded.
        assert_eq!(by_name["num_heads"].midpoint(), 16);
    }

    #[test]
    fn test_baseline_values() {
        let baseline = Architecture::baseline();
        assert_eq!(baseline.id, None);
        assert_eq!(baseline.numeric("hidden_size"), Some(512.0));
        assert_eq!(baseline.numeric("num_layers"), Some(6.0));
        assert_eq!(baseline.numeric("num_heads"), Some(8.0));
    }

    #[test]
    fn test_numeric_rejects_non_numbers() {
        let mut arch = Architecture::baseline();
        arch.params
            .insert("hidden_size".to_string(), Value::from("wide"));
        assert_eq!(arch.numeric("hidden_size"), None);
        assert_eq!(arch.numeric("no_such_key"), None);
    }

    #[test]
    fn test_serializes_flat() {
        let mut arch = Architecture::baseline();
        arch.id = Some("arch_0000042".to_string());
        arch.params
            .insert("activation".to_string(), Value::from("gelu"));

        let json = serde_json::to_value(&arch).unwrap();
        assert_eq!(json["id"], "arch_0000042");
        assert_eq!(json["hidden_size"], 512);
        assert_eq!(json["activation"], "gelu");

        let back: Architecture = serde_json::from_value(json).unwrap();
        assert_eq!(back, arch);
    }

    #[test]
    fn test_baseline_omits_id_when_serialized() {
        let json = serde_json::to_value(Architecture::baseline()).unwrap();
        assert!(json.get("id").is_none());
    }
}
