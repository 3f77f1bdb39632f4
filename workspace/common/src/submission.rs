/// Sequence number handed to one dispatched submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Tracks the most recent submission so stale responses can be dropped.
///
/// Requests are never cancelled; a response is simply ignored when a newer
/// ticket has been issued since its request went out.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    latest: u64,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before it.
    pub fn begin(&mut self) -> SubmissionTicket {
        self.latest += 1;
        tracing::trace!(sequence = self.latest, "Submission started");
        SubmissionTicket(self.latest)
    }

    pub fn is_current(&self, ticket: SubmissionTicket) -> bool {
        let current = ticket.0 == self.latest;
        if !current {
            tracing::debug!(
                sequence = ticket.0,
                latest = self.latest,
                "Superseded submission"
            );
        }
        current
    }
}
