//! Candidate generation by bounded random perturbation of a parent.

use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::schema::{Architecture, RECOGNIZED_PARAMS};

/// Default perturbation scale relative to each parameter's range width.
pub const DEFAULT_NOISE_SCALE: f64 = 0.1;

/// Generates new candidate architectures by perturbing a parent.
///
/// The RNG is the only side effect; the parent is never modified.
pub struct Evolver {
    rng: StdRng,
    noise_scale: f64,
}

impl Evolver {
    /// Create from seed.
    pub fn new(noise_scale: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            noise_scale,
        }
    }

    /// Create with random seed.
    pub fn from_entropy(noise_scale: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            noise_scale,
        }
    }

    /// Return a mutated copy of the parent architecture.
    ///
    /// Each recognized numeric parameter independently receives zero-mean
    /// Gaussian noise scaled to its range width, is truncated toward zero
    /// to an integer and clamped back into its closed range. A recognized
    /// parameter that is missing or non-numeric is repaired to its range
    /// midpoint instead. Every other key is copied verbatim, and the
    /// result carries a fresh tracking id.
    pub fn evolve(&mut self, parent: &Architecture) -> Architecture {
        let mut candidate = parent.clone();
        for spec in RECOGNIZED_PARAMS {
            match parent.numeric(spec.name) {
                Some(value) => {
                    let noise: f64 = self.rng.sample(StandardNormal);
                    let perturbed = value + noise * self.noise_scale * spec.width() as f64;
                    candidate.set(spec.name, spec.clamp(perturbed as i64));
                }
                None => candidate.set(spec.name, spec.midpoint()),
            }
        }
        candidate.id = Some(self.fresh_id());
        candidate
    }

    /// Tracking id of the form `arch_0000000`.
    fn fresh_id(&mut self) -> String {
        format!("arch_{:07}", self.rng.gen_range(0..10_000_000))
    }
}
