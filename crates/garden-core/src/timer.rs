//! One-shot dismissal timers.
//!
//! The presenter never calls back into itself; a [`TimerService`] is told
//! which [`DismissTicket`] to hand back when the delay elapses, and stale
//! tickets are ignored by the presenter.

use instant::Instant;
use std::time::Duration;

/// Generation number of a shown popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DismissTicket(pub u64);

pub trait TimerService {
    type Handle;

    fn now(&self) -> Instant;

    /// Arrange for `ticket` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, ticket: DismissTicket) -> Self::Handle;

    /// Cancel a timer that may or may not have fired already.
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualHandle(u64);

#[derive(Clone, Debug)]
struct Pending {
    id: u64,
    due: Duration,
    ticket: DismissTicket,
}

/// Virtual clock for tests and the headless driver. Time only moves when
/// [`ManualTimers::advance`] is called.
#[derive(Clone, Debug)]
pub struct ManualTimers {
    base: Instant,
    elapsed: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Default for ManualTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimers {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every ticket that came due, oldest first.
    pub fn advance(&mut self, by: Duration) -> Vec<DismissTicket> {
        self.elapsed += by;
        let now = self.elapsed;
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.due, p.id));
        due.into_iter().map(|p| p.ticket).collect()
    }
}

impl TimerService for ManualTimers {
    type Handle = ManualHandle;

    fn now(&self) -> Instant {
        self.base + self.elapsed
    }

    fn schedule(&mut self, delay: Duration, ticket: DismissTicket) -> ManualHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.elapsed + delay,
            ticket,
        });
        ManualHandle(id)
    }

    fn cancel(&mut self, handle: ManualHandle) {
        self.pending.retain(|p| p.id != handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_when_due() {
        let mut timers = ManualTimers::new();
        timers.schedule(Duration::from_secs(3), DismissTicket(1));
        assert!(timers.advance(Duration::from_secs(2)).is_empty());
        assert_eq!(timers.advance(Duration::from_secs(1)), vec![DismissTicket(1)]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cancelled_never_fires() {
        let mut timers = ManualTimers::new();
        let h = timers.schedule(Duration::from_secs(1), DismissTicket(1));
        timers.cancel(h);
        assert!(timers.advance(Duration::from_secs(10)).is_empty());
    }
}
