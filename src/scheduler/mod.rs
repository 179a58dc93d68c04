//! Two-class queue discipline and the service loop that drains it.

pub mod engine;
pub mod queue;

// Re-export common types
pub use self::engine::{Scheduler, SchedulerState};
pub use self::queue::{AdmissionReport, DualQueue};

/// Observation emitted after each completed service step, in strict service
/// order. `was_priority` is the client's status at the moment of being
/// served, not the line it was dequeued from.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ServiceEvent {
    pub client_id: u32,
    pub was_priority: bool,
    pub served_at: chrono::DateTime<chrono::Utc>,
}
