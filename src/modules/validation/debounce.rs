/// Coalesces rapid invocations into one delayed delivery.
///
/// Each `call` overwrites any pending payload and restarts the wait, so
/// only the arguments of the last call in a burst survive. There is at
/// most one pending delivery per instance at any time. Time is passed in
/// explicitly as epoch milliseconds, which keeps the component
/// deterministic: the owner polls it from its own tick.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    fire_at: u64,
    payload: T,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Schedule `payload` for delivery `wait_ms` from `now_ms`,
    /// cancelling any earlier pending delivery.
    pub fn call(&mut self, payload: T, now_ms: u64) {
        self.pending = Some(Pending {
            fire_at: now_ms + self.wait_ms,
            payload,
        });
    }

    /// Deliver the pending payload if its wait has elapsed.
    /// Returns `None` while the wait is still running or nothing is pending.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(pending) if now_ms >= pending.fire_at => {
                self.pending.take().map(|p| p.payload)
            }
            _ => None,
        }
    }

    /// Deliver the pending payload immediately (the blur path skips the wait).
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Drop the pending payload without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_call_wins() {
        let mut debouncer = Debouncer::new(100);

        // Three calls in a burst at t=0, t=30, t=60
        debouncer.call("first", 0);
        debouncer.call("second", 30);
        debouncer.call("third", 60);

        // Nothing fires before the quiet period elapses
        assert_eq!(debouncer.poll(100), None);
        assert_eq!(debouncer.poll(159), None);

        // Fires exactly once, at 60 + 100, with the last call's payload
        assert_eq!(debouncer.poll(160), Some("third"));

        // And never again
        assert_eq!(debouncer.poll(500), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_single_call_fires_after_wait() {
        let mut debouncer = Debouncer::new(500);
        debouncer.call(42, 1000);

        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(1499), None);
        assert_eq!(debouncer.poll(1500), Some(42));
    }

    #[test]
    fn test_flush_skips_the_wait() {
        let mut debouncer = Debouncer::new(500);
        debouncer.call("pending", 0);

        assert_eq!(debouncer.flush(), Some("pending"));
        assert_eq!(debouncer.poll(10_000), None);
    }

    #[test]
    fn test_cancel_drops_payload() {
        let mut debouncer = Debouncer::new(100);
        debouncer.call("doomed", 0);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(1000), None);
    }

    #[test]
    fn test_empty_poll_is_noop() {
        let mut debouncer: Debouncer<()> = Debouncer::new(100);
        assert_eq!(debouncer.poll(0), None);
        assert_eq!(debouncer.flush(), None);
    }
}
