//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through the MarketRng owned by the engine,
//! derived from the single master seed of the run. Re-deriving with
//! the same seed replays exactly the same draws.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The deterministic market-return stream for a single run.
pub struct MarketRng {
    inner: Pcg64Mcg,
}

impl MarketRng {
    pub fn new(master_seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(master_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform draw between `lo` and `hi`, in percent.
    pub fn percent_between(&mut self, lo: f64, hi: f64) -> f64 {
        debug_assert!(lo <= hi, "lo must not exceed hi");
        lo + self.next_f64() * (hi - lo)
    }
}
