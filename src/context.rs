//! Cancellation/deadline passthrough.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// A caller-supplied cancellation/deadline signal.
///
/// The core hands the context to every statement execution untouched;
/// whether and how it is enforced is the connection layer's business. The
/// bundled rusqlite driver checks it before each statement, a custom driver
/// may wire the deadline into its socket timeouts or ignore the context
/// entirely.
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl Context {
    /// A context that never cancels and never expires.
    pub fn background() -> Self {
        Self::default()
    }

    /// Attaches an absolute deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attaches a shared cancellation flag; setting the flag to `true`
    /// signals cancellation.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = Some(flag);
        self
    }

    /// The attached deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the cancellation flag has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Whether the deadline, if any, has passed.
    pub fn deadline_exceeded(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn background_context_never_signals() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert!(!ctx.deadline_exceeded());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn cancellation_flag_is_shared() {
        let flag = Arc::new(AtomicBool::new(false));
        let ctx = Context::background().with_cancellation(Arc::clone(&flag));
        assert!(!ctx.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn past_deadline_is_exceeded() {
        let ctx = Context::background().with_deadline(Instant::now() - Duration::from_secs(1));
        assert!(ctx.deadline_exceeded());
    }
}
