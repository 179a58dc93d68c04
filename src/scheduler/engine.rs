//! Service loop: drain both lines to completion, one fixed-duration pour at
//! a time.

use std::time::Duration;

use tracing::info;

use super::queue::DualQueue;
use super::ServiceEvent;
use crate::clock::Clock;

/// Lifecycle of the service loop. `Drained` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SchedulerState {
    Running,
    Drained,
}

/// Drives the queue forward: one promotion check, one selection and one
/// fixed-duration service action per cycle, until both lines are empty.
pub struct Scheduler<C: Clock> {
    queue: DualQueue,
    clock: C,
    service_time: Duration,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(queue: DualQueue, clock: C, service_time: Duration) -> Self {
        Self {
            queue,
            clock,
            service_time,
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.queue.is_empty() {
            SchedulerState::Drained
        } else {
            SchedulerState::Running
        }
    }

    /// One service cycle: re-check promotions, pick the next client, occupy
    /// the machine for the service duration, then record the observation.
    /// Returns `None` once the queue is drained.
    ///
    /// Priority in the emitted event is re-evaluated against the clock at
    /// service time, not the line the client was dequeued from; the two can
    /// disagree if time advanced in between.
    pub async fn step(&mut self) -> Option<ServiceEvent> {
        self.queue.promote(&self.clock);
        let client = self.queue.select_next()?;

        // The machine serves exactly one client at a time; nothing else
        // proceeds while it pours.
        tokio::time::sleep(self.service_time).await;

        let served_at = self.clock.now();
        let was_priority = client.is_priority(served_at);
        info!(
            client_id = client.id,
            priority = was_priority,
            "served client"
        );

        Some(ServiceEvent {
            client_id: client.id,
            was_priority,
            served_at,
        })
    }

    /// Run to completion and return the service log in strict service order.
    pub async fn run(&mut self) -> Vec<ServiceEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.step().await {
            events.push(event);
        }
        info!(served = events.len(), "queue drained");
        events
    }
}
