//! Connectivity badge sampling.
//!
//! The header's online/offline badge flips at random to suggest a flaky
//! rural connection. It is purely cosmetic; no behavior depends on it.

use rand::Rng;
use std::time::Duration;

/// How often the badge re-samples.
pub const CONNECTIVITY_INTERVAL: Duration = Duration::from_secs(10);

/// Chance a sample comes up offline.
pub const OFFLINE_PROBABILITY: f64 = 0.1;

/// Samples the displayed connectivity state.
#[derive(Debug, Clone)]
pub struct ConnectivityMonitor {
    offline_probability: f64,
}

impl ConnectivityMonitor {
    pub fn new() -> Self {
        Self {
            offline_probability: OFFLINE_PROBABILITY,
        }
    }

    /// Override the offline chance (demos crank it up).
    pub fn with_offline_probability(mut self, probability: f64) -> Self {
        self.offline_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Draw the next displayed state: online unless the sample lands in
    /// the offline band.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() > self.offline_probability
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_is_mostly_online() {
        let monitor = ConnectivityMonitor::new();
        let mut rng = StdRng::seed_from_u64(99);
        let samples = 10_000;
        let online = (0..samples).filter(|_| monitor.sample(&mut rng)).count();
        let rate = online as f64 / samples as f64;
        assert!(rate > 0.85 && rate < 0.95, "online rate was {rate}");
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let always_off = ConnectivityMonitor::new().with_offline_probability(1.0);
        assert!((0..100).all(|_| !always_off.sample(&mut rng)));

        let always_on = ConnectivityMonitor::new().with_offline_probability(0.0);
        assert!((0..100).all(|_| always_on.sample(&mut rng)));
    }
}
