//! Orchestration core for the architecture discovery loop.
//!
//! One cycle flows through four stages, each feeding the next:
//!
//! - **Evolution** (`evolve`): perturb the sampled parent into a candidate
//! - **Scoring** (`score`): obtain quality signals from the oracle, or the
//!   random fallback when it is unavailable
//! - **Analysis** (`analyze`): reduce the signals to one composite score
//!   and a summary
//! - **Cycle driver** (`cycle`): wire the stages to the result store and
//!   repeat
//!
//! # Example
//!
//! ```rust,no_run
//! use arch_search::pipeline::DiscoveryPipeline;
//! use arch_search::schema::PipelineConfig;
//!
//! let config = PipelineConfig {
//!     use_oracle: false, // random scoring, no model required
//!     ..PipelineConfig::default()
//! };
//! let mut pipeline = DiscoveryPipeline::new(&config).unwrap();
//! let record = pipeline.run_cycle().unwrap();
//! println!("{}", record.summary);
//! ```

mod analyze;
mod cycle;
mod evolve;
mod score;

pub use analyze::{analyze, composite_score};
pub use cycle::DiscoveryPipeline;
pub use evolve::{DEFAULT_NOISE_SCALE, Evolver};
pub use score::{EvalOutcome, Evaluator, FALLBACK_MARKER};
