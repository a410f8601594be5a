//! Timers module - generation-keyed, cancellable delayed actions
//!
//! Each armed timer remembers the session generation that armed it. A restart
//! bumps the generation, so anything armed by an earlier session is dropped
//! instead of firing into the new one.

use arrayvec::ArrayVec;

use crate::types::TimerKind;

/// At most one settle and one win timer can be pending at a time; leave slack.
const MAX_PENDING: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub kind: TimerKind,
    pub remaining_ms: u32,
    pub generation: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    pending: ArrayVec<PendingTimer, MAX_PENDING>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` for its standard delay.
    pub fn arm(&mut self, kind: TimerKind, generation: u32) {
        self.arm_after(kind, kind.delay_ms(), generation);
    }

    /// Arm `kind` for an explicit delay. Re-arming a pending kind replaces it.
    pub fn arm_after(&mut self, kind: TimerKind, delay_ms: u32, generation: u32) {
        self.pending.retain(|t| t.kind != kind);
        let timer = PendingTimer {
            kind,
            remaining_ms: delay_ms,
            generation,
        };
        if self.pending.try_push(timer).is_err() {
            log::warn!("timer queue full, dropping {:?}", kind);
        }
    }

    /// Advance time, returning the kinds that came due for `generation`.
    ///
    /// Due timers from any other generation are discarded silently.
    pub fn advance(&mut self, elapsed_ms: u32, generation: u32) -> ArrayVec<TimerKind, MAX_PENDING> {
        let mut due = ArrayVec::new();
        self.pending.retain(|t| {
            t.remaining_ms = t.remaining_ms.saturating_sub(elapsed_ms);
            if t.remaining_ms > 0 {
                return true;
            }
            if t.generation == generation {
                due.push(t.kind);
            } else {
                log::trace!("dropping stale {:?} from generation {}", t.kind, t.generation);
            }
            false
        });
        due
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[PendingTimer] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SETTLE_DELAY_MS;

    #[test]
    fn fires_after_delay() {
        let mut timers = Timers::new();
        timers.arm(TimerKind::Settle, 0);

        assert!(timers.advance(SETTLE_DELAY_MS - 1, 0).is_empty());
        let due = timers.advance(1, 0);
        assert_eq!(due.as_slice(), &[TimerKind::Settle]);
        assert!(timers.is_empty());
    }

    #[test]
    fn stale_generation_never_fires() {
        let mut timers = Timers::new();
        timers.arm(TimerKind::Settle, 3);

        let due = timers.advance(10_000, 4);
        assert!(due.is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn rearm_replaces_pending_kind() {
        let mut timers = Timers::new();
        timers.arm_after(TimerKind::Settle, 100, 0);
        timers.arm_after(TimerKind::Settle, 500, 0);

        assert_eq!(timers.pending().len(), 1);
        assert!(timers.advance(100, 0).is_empty());
        assert!(timers.is_pending(TimerKind::Settle));
    }

    #[test]
    fn cancel_all_clears() {
        let mut timers = Timers::new();
        timers.arm(TimerKind::Settle, 0);
        timers.arm(TimerKind::WinAnnounce, 0);
        timers.cancel_all();
        assert!(timers.advance(u32::MAX, 0).is_empty());
    }

    #[test]
    fn independent_kinds_fire_in_order_of_expiry() {
        let mut timers = Timers::new();
        timers.arm_after(TimerKind::WinAnnounce, 50, 1);
        timers.arm_after(TimerKind::Settle, 20, 1);

        assert_eq!(timers.advance(30, 1).as_slice(), &[TimerKind::Settle]);
        assert_eq!(timers.advance(30, 1).as_slice(), &[TimerKind::WinAnnounce]);
    }
}
