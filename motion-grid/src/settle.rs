//! Settle detection for the entrance animation.
//!
//! ## Usage
//!
//! The grid controller arms the machine once every item in a frame is at
//! full opacity and promotes it after a short rest delay; pagination UI is
//! gated on the settled latch.

use std::time::{Duration, Instant};

use tracing::debug;

/// Delay between every item reaching full opacity and the settled latch.
pub(crate) const REST_DELAY: Duration = Duration::from_millis(100);

/// One-way machine: unsettled, resting toward settled, settled.
///
/// The settled latch never reverts, even when later patches animate again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SettleState {
    #[default]
    Unsettled,
    Settling {
        since: Instant,
    },
    Settled,
}

impl SettleState {
    /// Starts the rest delay. Only an unsettled machine arms.
    pub(crate) fn arm(&mut self, now: Instant) {
        if *self == Self::Unsettled {
            *self = Self::Settling { since: now };
            debug!("entrance animation at rest, settling");
        }
    }

    /// Promotes to settled once the rest delay has elapsed.
    pub(crate) fn poll(&mut self, now: Instant) {
        if let Self::Settling { since } = *self
            && now.duration_since(since) >= REST_DELAY
        {
            *self = Self::Settled;
            debug!("entrance animation settled");
        }
    }

    pub(crate) fn is_settled(&self) -> bool {
        *self == Self::Settled
    }

    /// True while the rest delay is still counting down.
    pub(crate) fn has_pending_delay(&self, now: Instant) -> bool {
        match *self {
            Self::Settling { since } => now.duration_since(since) < REST_DELAY,
            Self::Unsettled | Self::Settled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_after_rest_delay() {
        let start = Instant::now();
        let mut state = SettleState::default();
        assert!(!state.is_settled());

        state.arm(start);
        state.poll(start);
        assert!(!state.is_settled(), "settled before the rest delay");
        assert!(state.has_pending_delay(start));

        state.poll(start + REST_DELAY);
        assert!(state.is_settled());
        assert!(!state.has_pending_delay(start + REST_DELAY));
    }

    #[test]
    fn test_arming_twice_keeps_the_first_deadline() {
        let start = Instant::now();
        let mut state = SettleState::default();
        state.arm(start);
        state.arm(start + Duration::from_millis(50));

        state.poll(start + REST_DELAY);
        assert!(state.is_settled());
    }

    #[test]
    fn test_settled_latch_never_reverts() {
        let start = Instant::now();
        let mut state = SettleState::default();
        state.arm(start);
        state.poll(start + REST_DELAY);

        state.arm(start + Duration::from_secs(5));
        assert!(state.is_settled());
    }

    #[test]
    fn test_unsettled_has_no_pending_delay() {
        let state = SettleState::default();
        assert!(!state.has_pending_delay(Instant::now()));
    }
}
