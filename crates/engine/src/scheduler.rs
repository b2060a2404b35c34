//! Tick scheduling.
//!
//! The simulation never sleeps or spawns timers itself. It asks a
//! [`TickScheduler`] for one-shot ticks and re-arms after each fired tick, so
//! the host event loop stays in charge of time.

/// Identifies one armed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Timer service used by [`crate::Simulation`].
pub trait TickScheduler {
    /// Schedule a single tick `delay_ms` from the scheduler's current time.
    fn arm(&mut self, delay_ms: u64) -> TickHandle;

    /// Cancel a pending tick. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
}

/// Deadline-based scheduler driven by an externally supplied millisecond clock.
///
/// The host loop calls [`DeadlineScheduler::advance_to`] with the current time
/// and dispatches whatever handle comes back. Tests drive it with synthetic
/// timestamps.
#[derive(Debug, Clone, Default)]
pub struct DeadlineScheduler {
    now_ms: u64,
    next_id: u64,
    /// (handle, due time), unordered. Holds at most a couple of entries.
    pending: Vec<(TickHandle, u64)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward and pop the earliest tick that is due, if any.
    ///
    /// Time never goes backwards; an older `now_ms` is treated as "no change".
    /// Only one tick is returned per call, so a stalled loop does not burst
    /// through a backlog of generations.
    pub fn advance_to(&mut self, now_ms: u64) -> Option<TickHandle> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.1 <= now)
            .min_by_key(|(_, entry)| entry.1)
            .map(|(i, _)| i)?;
        let (handle, _) = self.pending.swap_remove(pos);
        Some(handle)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|&(_, due)| due).min()
    }

    /// Milliseconds from `now_ms` until the next deadline (0 if overdue).
    pub fn time_until_next(&self, now_ms: u64) -> Option<u64> {
        self.next_deadline().map(|due| due.saturating_sub(now_ms))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl TickScheduler for DeadlineScheduler {
    fn arm(&mut self, delay_ms: u64) -> TickHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = TickHandle(self.next_id);
        self.pending
            .push((handle, self.now_ms.saturating_add(delay_ms)));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }
}
