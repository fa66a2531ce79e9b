//! Automated neural-architecture discovery loop.
//!
//! This crate runs a closed propose -> score -> record cycle over candidate
//! architecture descriptions. Each cycle samples the best-scoring parent
//! from history, perturbs it into a new candidate, scores the candidate
//! with an external model oracle (degrading to random scores when the
//! oracle is unavailable), reduces the scores to one composite ranking
//! value and appends the outcome to a durable history the next cycle
//! samples from.
//!
//! # Architecture
//!
//! The crate is split into four modules:
//!
//! - `schema`: configuration and persisted record types
//! - `pipeline`: the per-cycle orchestration core
//! - `store`: the JSON-file history the loop samples from and appends to
//! - `advisor`: fixed-corpus retrieval for scoring-prompt hints
//!
//! # Example
//!
//! ```rust,no_run
//! use arch_search::{DiscoveryPipeline, PipelineConfig};
//!
//! // Score with the random fallback so no model server is required.
//! let config = PipelineConfig {
//!     use_oracle: false,
//!     num_cycles: 5,
//!     ..PipelineConfig::default()
//! };
//!
//! let mut pipeline = DiscoveryPipeline::new(&config).unwrap();
//! for record in pipeline.run_cycles(config.num_cycles).unwrap() {
//!     println!("{}", record.summary);
//! }
//! ```

pub mod advisor;
pub mod pipeline;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use advisor::Advisor;
pub use pipeline::{DiscoveryPipeline, EvalOutcome, Evaluator, Evolver};
pub use schema::{Architecture, CycleRecord, PipelineConfig, ScoreSet};
pub use store::{ResultStore, StorageError};
