use std::collections::VecDeque;

/// Handle for one requested frame callback. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub u64);

/// Host frame-scheduling primitive (a display link, `requestAnimationFrame`, a test clock).
///
/// The host invokes [`crate::SeatMapView::on_frame`] with the returned id when the frame fires.
pub trait FrameScheduler {
    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FrameId;
    /// Withdraw a request. Unknown or already-fired ids are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// Scheduler for headless hosts and tests: requests queue up until the host drains them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameId>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest outstanding request, as if its frame fired.
    pub fn take_due(&mut self) -> Option<FrameId> {
        self.pending.pop_front()
    }

    /// Outstanding requests.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total requests ever made.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Requests withdrawn before they fired.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        self.requested += 1;
        let id = FrameId(self.next_id);
        self.pending.push_back(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Some(pos) = self.pending.iter().position(|p| *p == id) {
            self.pending.remove(pos);
            self.cancelled += 1;
        }
    }
}

/// Caps how many consecutive no-change cycles keep rescheduling.
///
/// This guards against a rescheduling storm when nothing is changing. It is not a frame-rate
/// limiter; any input change re-arms it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IdleBudget {
    limit: u32,
    idle: u32,
}

impl IdleBudget {
    pub(crate) fn new(limit: u32) -> Self {
        Self { limit, idle: 0 }
    }

    pub(crate) fn reset(&mut self) {
        self.idle = 0;
    }

    pub(crate) fn record_idle(&mut self) {
        self.idle = self.idle.saturating_add(1);
    }

    pub(crate) fn exhausted(&self) -> bool {
        self.idle >= self.limit
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;
