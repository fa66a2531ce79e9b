//! Candidate scoring via an external model oracle, with randomized fallback.
//!
//! Scoring never fails: any oracle problem (transport, status, shape,
//! parse) degrades to uniform-random scores so the discovery loop keeps
//! moving. Degradation is visible in the outcome variant and in the
//! record's diagnostic text, not as an error.

use std::time::Duration;

use log::{debug, warn};
use rand::prelude::*;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::advisor::Advisor;
use crate::schema::{Architecture, PipelineConfig, ScoreSet};

/// Diagnostic marker stored when no oracle text was received at all.
pub const FALLBACK_MARKER: &str = "fallback";

/// Question posed to the advisor when gathering prompt context.
const ADVISOR_QUESTION: &str =
    "how should a novel architecture balance layers, hidden size and efficiency";

/// Outcome of scoring one candidate.
#[derive(Debug, Clone)]
pub enum EvalOutcome {
    /// Scores parsed from a live oracle response.
    Scored(ScoreSet),
    /// Random substitute scores; `reason` records what went wrong.
    Fallback { scores: ScoreSet, reason: String },
}

impl EvalOutcome {
    /// The scores, however they were obtained.
    pub fn scores(&self) -> &ScoreSet {
        match self {
            Self::Scored(scores) => scores,
            Self::Fallback { scores, .. } => scores,
        }
    }

    /// Consume the outcome, keeping only the scores.
    pub fn into_scores(self) -> ScoreSet {
        match self {
            Self::Scored(scores) => scores,
            Self::Fallback { scores, .. } => scores,
        }
    }

    /// True when the oracle did not produce these scores.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Failures internal to the oracle call. These never escape the evaluator;
/// they become the fallback reason.
#[derive(Debug, thiserror::Error)]
enum OracleError {
    #[error("oracle transport failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("oracle response body unreadable: {0}")]
    Body(#[from] std::io::Error),
    #[error("oracle response missing 'response' field")]
    MissingField,
    #[error("oracle text is not a scores object: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Raw shape of the oracle's scoring object. Missing fields default to 0.0.
#[derive(Debug, Default, Deserialize)]
struct RawScores {
    #[serde(default)]
    performance: f64,
    #[serde(default)]
    novelty: f64,
    #[serde(default)]
    complexity: f64,
}

/// Scores candidate architectures with the configured oracle model.
pub struct Evaluator {
    model: String,
    use_oracle: bool,
    oracle_url: String,
    timeout: Duration,
    advisor_hints: usize,
    advisor: Advisor,
    rng: StdRng,
}

impl Evaluator {
    /// Build an evaluator from pipeline configuration. The seed drives
    /// only the fallback score draws.
    pub fn new(config: &PipelineConfig, seed: u64) -> Self {
        Self {
            model: config.model.clone(),
            use_oracle: config.use_oracle,
            oracle_url: config.oracle_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            advisor_hints: config.advisor_hints,
            advisor: Advisor::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the default advisor corpus.
    pub fn with_advisor(mut self, advisor: Advisor) -> Self {
        self.advisor = advisor;
        self
    }

    /// Score one candidate. Never fails.
    pub fn evaluate(&mut self, candidate: &Architecture) -> EvalOutcome {
        if !self.use_oracle {
            return self.fallback(String::new(), "oracle disabled".to_string());
        }

        let prompt = self.build_prompt(candidate);
        debug!("oracle prompt: {prompt}");

        match self.call_oracle(&prompt) {
            Ok(raw) => {
                debug!("oracle response: {raw}");
                match parse_scores(&raw) {
                    Ok(mut scores) => {
                        scores.diagnostic = raw;
                        EvalOutcome::Scored(scores)
                    }
                    Err(err) => {
                        warn!("oracle text unusable, substituting random scores: {err}");
                        self.fallback(raw, err.to_string())
                    }
                }
            }
            Err(err) => {
                warn!("oracle call failed, substituting random scores: {err}");
                self.fallback(String::new(), err.to_string())
            }
        }
    }

    /// One bounded, non-streaming generate call. No retry: a failed
    /// attempt goes straight to fallback.
    fn call_oracle(&self, prompt: &str) -> Result<String, OracleError> {
        let url = format!("{}/api/generate", self.oracle_url);
        let body: Value = ureq::post(&url)
            .timeout(self.timeout)
            .send_json(json!({
                "model": self.model,
                "prompt": prompt,
                "stream": false,
            }))?
            .into_json()?;

        match body.get("response").and_then(Value::as_str) {
            Some(text) => Ok(text.to_string()),
            None => Err(OracleError::MissingField),
        }
    }

    fn build_prompt(&self, candidate: &Architecture) -> String {
        let serialized =
            serde_json::to_string(candidate).unwrap_or_else(|_| String::from("{}"));

        let mut prompt = String::new();
        if self.advisor_hints > 0 {
            for hint in self.advisor.query(ADVISOR_QUESTION, self.advisor_hints) {
                prompt.push_str("Context: ");
                prompt.push_str(&hint);
                prompt.push('\n');
            }
        }
        prompt.push_str(
            "You are an expert model architect. Given the following \
             architecture description in JSON, assess its quality.\n",
        );
        prompt.push_str("Architecture: ");
        prompt.push_str(&serialized);
        prompt.push('\n');
        prompt.push_str(
            "Return a JSON object with keys 'performance', 'novelty' and \
             'complexity', each between 0 and 1, representing your estimates \
             of how strong, novel and complex this design is. Do not include \
             any additional commentary.\n",
        );
        prompt
    }

    /// Uniform-random scores in [0, 1). The diagnostic keeps whatever raw
    /// text the oracle produced, or the fallback marker when there is none.
    fn fallback(&mut self, raw: String, reason: String) -> EvalOutcome {
        let scores = ScoreSet {
            performance: self.rng.gen_range(0.0..1.0),
            novelty: self.rng.gen_range(0.0..1.0),
            complexity: self.rng.gen_range(0.0..1.0),
            diagnostic: if raw.is_empty() {
                FALLBACK_MARKER.to_string()
            } else {
                raw
            },
        };
        EvalOutcome::Fallback { scores, reason }
    }
}

/// Extract the three score fields from raw oracle text.
///
/// Models often wrap the object in a ``` fence, sometimes tagged `json`;
/// one fence is stripped from each end before parsing.
fn parse_scores(raw: &str) -> Result<ScoreSet, OracleError> {
    let parsed: RawScores = serde_json::from_str(strip_fence(raw))?;
    Ok(ScoreSet {
        performance: parsed.performance,
        novelty: parsed.novelty,
        complexity: parsed.complexity,
        diagnostic: String::new(),
    })
}

fn strip_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}
