//! Client entity: an identity plus a time-boxed priority window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A client whose priority window starts after it ends.
/// Rejected at admission; the rest of the batch proceeds.
#[derive(Debug, Clone, Error, Serialize)]
#[error("client {id} has an inverted priority window ({from} > {to})")]
pub struct InvalidClient {
    pub id: u32,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Closed time interval `[from, to]` during which a client holds elevated
/// scheduling precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl PriorityWindow {
    /// Inclusive at both ends.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.from <= now && now <= self.to
    }
}

/// A unit of demand for the machine. Fields never change after creation;
/// only the derived priority predicate varies as the clock advances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub window: PriorityWindow,
}

impl Client {
    pub fn new(id: u32, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            id,
            window: PriorityWindow { from, to },
        }
    }

    /// True iff `now` falls inside the priority window. Pure function of
    /// `now` and the immutable window; recomputed on every check, never
    /// cached.
    pub fn is_priority(&self, now: DateTime<Utc>) -> bool {
        self.window.contains(now)
    }

    /// Check the `from <= to` invariant. Clients can arrive from untrusted
    /// JSON input, so this runs at the admission boundary rather than at
    /// construction.
    pub fn validate(&self) -> Result<(), InvalidClient> {
        if self.window.from > self.window.to {
            return Err(InvalidClient {
                id: self.id,
                from: self.window.from,
                to: self.window.to,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        "2026-01-01T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_window_is_inclusive_at_both_ends() {
        let c = Client::new(1, t0(), t0() + Duration::seconds(60));
        assert!(c.is_priority(t0()));
        assert!(c.is_priority(t0() + Duration::seconds(30)));
        assert!(c.is_priority(t0() + Duration::seconds(60)));
        assert!(!c.is_priority(t0() - Duration::milliseconds(1)));
        assert!(!c.is_priority(t0() + Duration::seconds(61)));
    }

    #[test]
    fn test_zero_length_window_is_valid() {
        let c = Client::new(2, t0(), t0());
        assert!(c.validate().is_ok());
        assert!(c.is_priority(t0()));
    }

    #[test]
    fn test_inverted_window_fails_validation() {
        let c = Client::new(3, t0() + Duration::seconds(10), t0());
        let err = c.validate().unwrap_err();
        assert_eq!(err.id, 3);
    }
}
