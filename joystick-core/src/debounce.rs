//! Time-window debounce for edge-triggered buttons.

use core::sync::atomic::{AtomicU32, Ordering};

/// Remembers when a button's last edge was accepted.
///
/// Timestamps are milliseconds from a monotonic clock truncated to `u32`;
/// elapsed time is computed with wrapping subtraction so the ~49 day rollover
/// is harmless.
pub struct DebounceTimer {
    last_accepted: AtomicU32,
    window_ms: u32,
}

impl DebounceTimer {
    /// Starts as if an edge had been accepted at time zero.
    pub const fn new(window_ms: u32) -> Self {
        Self {
            last_accepted: AtomicU32::new(0),
            window_ms,
        }
    }

    /// Accepts the edge at `now_ms` if more than the window has elapsed since
    /// the last accepted one. The decision and the timestamp update are a
    /// single atomic step; a suppressed edge changes nothing.
    pub fn try_accept(&self, now_ms: u32) -> bool {
        self.last_accepted
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                (now_ms.wrapping_sub(last) > self.window_ms).then_some(now_ms)
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_inside_window_are_suppressed() {
        let timer = DebounceTimer::new(200);
        assert!(timer.try_accept(1_000));
        assert!(!timer.try_accept(1_150));
        assert!(!timer.try_accept(1_200));
        assert!(timer.try_accept(1_201));
    }

    #[test]
    fn suppressed_edge_does_not_extend_window() {
        let timer = DebounceTimer::new(200);
        assert!(timer.try_accept(1_000));
        assert!(!timer.try_accept(1_190));
        // Measured from the accepted edge at 1000, not the bounce at 1190.
        assert!(timer.try_accept(1_250));
    }

    #[test]
    fn edge_right_after_boot_is_suppressed() {
        let timer = DebounceTimer::new(200);
        assert!(!timer.try_accept(150));
        assert!(timer.try_accept(201));
    }

    #[test]
    fn clock_rollover_is_handled() {
        let timer = DebounceTimer::new(200);
        assert!(timer.try_accept(u32::MAX - 50));
        assert!(!timer.try_accept(100));
        assert!(timer.try_accept(150));
    }
}
