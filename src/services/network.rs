//! Latency and fault injection standing in for an unreliable backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::NetworkProfile;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct SimulatedNetwork {
    profile: NetworkProfile,
    rng: Arc<Mutex<StdRng>>,
}

/// What the network decided for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub delay: Duration,
    pub fail: bool,
}

impl SimulatedNetwork {
    pub fn new(profile: NetworkProfile) -> Self {
        let rng = match profile.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            profile,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn reliable() -> Self {
        Self::new(NetworkProfile::reliable())
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    /// Draws a delay in `[min, max)` and an independent failure flag.
    pub fn roll(&self) -> Roll {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let NetworkProfile {
            latency_min_ms,
            latency_max_ms,
            failure_rate,
            ..
        } = self.profile;
        let delay_ms = if latency_max_ms > latency_min_ms {
            rng.gen_range(latency_min_ms..latency_max_ms)
        } else {
            latency_min_ms
        };
        let fail = rng.gen::<f64>() < failure_rate;
        Roll {
            delay: Duration::from_millis(delay_ms),
            fail,
        }
    }

    /// Suspends for the simulated latency, then either lets the mutating call
    /// through or fails it before anything is changed.
    pub async fn round_trip(&self, operation: &str) -> Result<()> {
        let roll = self.roll();
        if !roll.delay.is_zero() {
            tokio::time::sleep(roll.delay).await;
        }
        if roll.fail {
            tracing::warn!(
                operation,
                delay_ms = roll.delay.as_millis() as u64,
                "simulated server error"
            );
            return Err(Error::TransientServer);
        }
        tracing::debug!(
            operation,
            delay_ms = roll.delay.as_millis() as u64,
            "simulated round trip"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SimulatedNetwork {
        SimulatedNetwork::new(NetworkProfile {
            seed: Some(seed),
            ..NetworkProfile::default()
        })
    }

    #[test]
    fn delays_stay_within_bounds() {
        let network = seeded(7);
        for _ in 0..5_000 {
            let roll = network.roll();
            assert!(roll.delay >= Duration::from_millis(200));
            assert!(roll.delay < Duration::from_millis(1200));
        }
    }

    #[test]
    fn failure_rate_converges() {
        let network = seeded(42);
        let trials = 20_000;
        let failures = (0..trials).filter(|_| network.roll().fail).count();
        let observed = failures as f64 / trials as f64;
        // Four standard deviations of a binomial at p = 0.07.
        assert!((observed - 0.07).abs() < 0.0073, "observed {}", observed);
    }

    #[test]
    fn reliable_profile_never_fails_or_waits() {
        let network = SimulatedNetwork::reliable();
        for _ in 0..1_000 {
            assert_eq!(
                network.roll(),
                Roll {
                    delay: Duration::ZERO,
                    fail: false
                }
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn round_trip_suspends_for_the_drawn_delay() {
        let network = SimulatedNetwork::new(NetworkProfile {
            latency_min_ms: 500,
            latency_max_ms: 500,
            failure_rate: 0.0,
            seed: Some(1),
        });
        let started = tokio::time::Instant::now();
        network.round_trip("test").await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn certain_failure_is_transient() {
        let network = SimulatedNetwork::new(NetworkProfile {
            failure_rate: 1.0,
            ..NetworkProfile::reliable()
        });
        let err = network.round_trip("test").await.unwrap_err();
        assert!(err.is_transient());
    }
}
