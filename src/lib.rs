//! EspressoQueue -- a two-class service queue simulator.
//!
//! One espresso machine serves a population of clients first come, first
//! served, except that clients inside a time-boxed priority window jump
//! ahead of the normal line. Priority is a live predicate of the clock, so
//! the normal line is re-checked for promotions between every service event.

pub mod client;
pub mod clock;
pub mod population;
pub mod scheduler;

use std::time::Duration;

use serde::Serialize;

use crate::client::Client;
use crate::clock::{Clock, SystemClock};
use crate::scheduler::{DualQueue, Scheduler, ServiceEvent};

/// Result of a completed simulation: admission counts plus the service log
/// in strict service order.
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub admitted: usize,
    pub rejected: usize,
    pub events: Vec<ServiceEvent>,
}

/// Admit `clients` once, then drain the queue to completion against the wall
/// clock. Invalid clients are skipped and counted, never fatal.
pub async fn run_simulation(clients: Vec<Client>, service_time: Duration) -> SimulationReport {
    run_simulation_with(clients, service_time, SystemClock).await
}

/// Same as [`run_simulation`] but against a caller-supplied clock.
pub async fn run_simulation_with<C: Clock>(
    clients: Vec<Client>,
    service_time: Duration,
    clock: C,
) -> SimulationReport {
    let mut queue = DualQueue::new();
    let admission = queue.admit(clients, &clock);
    if !admission.rejected.is_empty() {
        tracing::warn!(
            rejected = admission.rejected.len(),
            "skipped clients with invalid priority windows"
        );
    }
    tracing::info!(admitted = admission.admitted, "admission complete");

    let mut scheduler = Scheduler::new(queue, clock, service_time);
    let events = scheduler.run().await;

    SimulationReport {
        admitted: admission.admitted,
        rejected: admission.rejected.len(),
        events,
    }
}
