//! Single-cycle orchestration of the discovery loop.

use log::info;

use crate::schema::{CycleRecord, PipelineConfig};
use crate::store::{ResultStore, StorageError};

use super::analyze::analyze;
use super::evolve::Evolver;
use super::score::Evaluator;

/// Drives propose -> score -> record cycles over a shared result store.
///
/// Cycles are strictly sequential; the store is the only state shared
/// between them, so cycle k samples against everything cycle k-1 appended.
pub struct DiscoveryPipeline {
    evolver: Evolver,
    evaluator: Evaluator,
    store: ResultStore,
}

impl DiscoveryPipeline {
    /// Build a pipeline from configuration, opening the history store.
    pub fn new(config: &PipelineConfig) -> Result<Self, StorageError> {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        Ok(Self {
            evolver: Evolver::new(config.noise_scale, seed),
            evaluator: Evaluator::new(config, seed.wrapping_add(1)),
            store: ResultStore::open(&config.history_path)?,
        })
    }

    /// Run one full cycle and return the freshly persisted record.
    ///
    /// Sample, mutate, score, reduce, append, in exactly that order, each
    /// step feeding the next. Scoring degradation is invisible here; only
    /// a storage failure aborts the cycle.
    pub fn run_cycle(&mut self) -> Result<CycleRecord, StorageError> {
        let parent = self.store.sample_parent()?;
        let candidate = self.evolver.evolve(&parent);
        let outcome = self.evaluator.evaluate(&candidate);
        let record = analyze(&candidate, outcome.into_scores());
        self.store.append(record.clone())?;
        info!(
            "cycle complete: candidate={} composite={:.3}",
            record.architecture.display_id(),
            record.composite_score
        );
        Ok(record)
    }

    /// Run `n` sequential cycles. The first storage failure aborts the run
    /// and propagates; completed cycles stay persisted.
    pub fn run_cycles(&mut self, n: u32) -> Result<Vec<CycleRecord>, StorageError> {
        let mut records = Vec::with_capacity(n as usize);
        for _ in 0..n {
            records.push(self.run_cycle()?);
        }
        Ok(records)
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }
}
