//! Synthetic population generation.

use std::time::Duration;

use chrono::Duration as ChronoDuration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::client::Client;
use crate::clock::Clock;

/// Generate `count` clients with sequential ids and random priority windows.
/// Windows fall between now and the time it would take to serve the whole
/// batch, so roughly half the population turns busy while it waits.
pub fn generate(count: u32, service_time: Duration, clock: &dyn Clock) -> Vec<Client> {
    generate_with(&mut rand::thread_rng(), count, service_time, clock)
}

/// Seeded variant of [`generate`] for reproducible runs.
pub fn generate_seeded(
    count: u32,
    service_time: Duration,
    clock: &dyn Clock,
    seed: u64,
) -> Vec<Client> {
    generate_with(&mut StdRng::seed_from_u64(seed), count, service_time, clock)
}

fn generate_with(
    rng: &mut impl Rng,
    count: u32,
    service_time: Duration,
    clock: &dyn Clock,
) -> Vec<Client> {
    let now = clock.now();
    let horizon_ms = (service_time.as_millis() as i64).saturating_mul(i64::from(count));

    (0..count)
        .map(|id| {
            let from_off = rng.gen_range(0..=horizon_ms);
            let to_off = rng.gen_range(from_off..=horizon_ms);
            Client::new(
                id,
                now + ChronoDuration::milliseconds(from_off),
                now + ChronoDuration::milliseconds(to_off),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{DateTime, Utc};

    fn t0() -> DateTime<Utc> {
        "2026-01-01T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_generated_clients_have_sequential_ids_and_valid_windows() {
        let clock = ManualClock::new(t0());
        let clients = generate(50, Duration::from_millis(100), &clock);

        assert_eq!(clients.len(), 50);
        for (i, client) in clients.iter().enumerate() {
            assert_eq!(client.id, i as u32);
            assert!(client.validate().is_ok());
            assert!(client.window.from >= t0());
        }
    }

    #[test]
    fn test_windows_stay_inside_the_batch_horizon() {
        let clock = ManualClock::new(t0());
        let clients = generate(20, Duration::from_millis(100), &clock);

        let horizon = t0() + ChronoDuration::milliseconds(100 * 20);
        assert!(clients.iter().all(|c| c.window.to <= horizon));
    }

    #[test]
    fn test_same_seed_reproduces_the_population() {
        let clock = ManualClock::new(t0());
        let a = generate_seeded(30, Duration::from_millis(100), &clock, 42);
        let b = generate_seeded(30, Duration::from_millis(100), &clock, 42);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.window, y.window);
        }
    }
}
