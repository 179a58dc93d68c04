//! Two-class FIFO queue with lazy priority promotion.
//!
//! Priority order: priority line > normal line. Within a line, strict FCFS.
//! A waiting client's priority status is a function of the clock, so the
//! normal line is re-checked between service events (see `promote`).

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::client::{Client, InvalidClient};
use crate::clock::Clock;

/// Outcome of a batch admission. Invalid clients are skipped and reported,
/// never fatal to the batch.
#[derive(Debug, Default)]
pub struct AdmissionReport {
    pub admitted: usize,
    pub rejected: Vec<InvalidClient>,
}

/// Holds the two FIFO lines and implements admission, promotion and
/// selection. A client is in at most one line at any instant.
#[derive(Debug, Default)]
pub struct DualQueue {
    normal: VecDeque<Client>,
    priority: VecDeque<Client>,
}

impl DualQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a batch of clients. Each valid client is placed into the
    /// priority line if its window is active right now, else into the normal
    /// line, preserving the input order within each line. Clients with an
    /// inverted window are skipped and reported.
    pub fn admit<C: Clock + ?Sized>(
        &mut self,
        clients: impl IntoIterator<Item = Client>,
        clock: &C,
    ) -> AdmissionReport {
        let mut report = AdmissionReport::default();
        for client in clients {
            if let Err(invalid) = client.validate() {
                warn!(client_id = invalid.id, "rejecting client: {invalid}");
                report.rejected.push(invalid);
                continue;
            }
            if client.is_priority(clock.now()) {
                self.priority.push_back(client);
            } else {
                self.normal.push_back(client);
            }
            report.admitted += 1;
        }
        report
    }

    /// Move the first normal client whose window has since become active to
    /// the tail of the priority line. At most one client moves per call; if
    /// none qualifies this is a no-op.
    pub fn promote<C: Clock + ?Sized>(&mut self, clock: &C) {
        let now = clock.now();
        if let Some(idx) = self.normal.iter().position(|c| c.is_priority(now)) {
            if let Some(client) = self.normal.remove(idx) {
                debug!(client_id = client.id, "promoted to priority line");
                self.priority.push_back(client);
            }
        }
    }

    /// Head of the priority line if any, else head of the normal line, else
    /// `None` once both lines are drained.
    pub fn select_next(&mut self) -> Option<Client> {
        self.priority
            .pop_front()
            .or_else(|| self.normal.pop_front())
    }

    pub fn is_empty(&self) -> bool {
        self.priority.is_empty() && self.normal.is_empty()
    }

    pub fn len(&self) -> usize {
        self.priority.len() + self.normal.len()
    }
}
