//! Execution context forwarded to guards and hooks.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cancellation and deadline information for a single trigger call.
///
/// The machine never inspects the context. It is handed unchanged to every
/// guard and hook, which may use it to bail out of slow work. Clones share
/// the same cancellation flag, so cancelling any clone cancels them all.
#[derive(Clone, Debug)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
    deadline: Option<DateTime<Utc>>,
    started_at: DateTime<Utc>,
}

impl Context {
    /// A context with no deadline that is never cancelled unless asked to be.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
            started_at: Utc::now(),
        }
    }

    /// Attach an absolute deadline.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attach a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = chrono::Duration::from_std(timeout)
            .ok()
            .and_then(|timeout| Utc::now().checked_add_signed(timeout));
        match deadline {
            Some(deadline) => self.with_deadline(deadline),
            // Too far in the future to represent; treat as unbounded.
            None => self,
        }
    }

    /// Signal cancellation to every clone of this context.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// True once the deadline, if any, has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Utc::now() >= deadline)
    }

    /// Time left until the deadline. `None` when no deadline is set,
    /// `Duration::ZERO` once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|deadline| {
            deadline
                .signed_duration_since(Utc::now())
                .to_std()
                .unwrap_or(Duration::ZERO)
        })
    }

    /// Time elapsed since the context was created.
    pub fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
