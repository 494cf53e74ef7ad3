//! Countdown module - whole-second session timer
//!
//! The countdown is fed elapsed milliseconds from the frame loop and carries the
//! remainder between calls, so frame jitter never gains or loses time. It lives
//! inside the running phase of a session; dropping that phase drops the timer.

use crate::types::COUNTDOWN_STEP_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Countdown {
    remaining_secs: u32,
    carry_ms: u32,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining_secs: secs,
            carry_ms: 0,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Milliseconds accumulated toward the next decrement
    pub fn carry_ms(&self) -> u32 {
        self.carry_ms
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Advance by `elapsed_ms` and return how many one-second steps fired.
    ///
    /// Never decrements below zero; an expired countdown ignores further time.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.is_expired() {
            return 0;
        }

        let total = self.carry_ms.saturating_add(elapsed_ms);
        let steps = (total / COUNTDOWN_STEP_MS).min(self.remaining_secs);
        self.remaining_secs -= steps;
        self.carry_ms = if self.is_expired() {
            0
        } else {
            total % COUNTDOWN_STEP_MS
        };
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_per_second() {
        let mut c = Countdown::new(3);
        assert_eq!(c.advance(999), 0);
        assert_eq!(c.remaining_secs(), 3);
        assert_eq!(c.advance(1), 1);
        assert_eq!(c.remaining_secs(), 2);
        assert_eq!(c.carry_ms(), 0);
    }

    #[test]
    fn carries_remainder_across_frames() {
        let mut c = Countdown::new(10);
        let mut fired = 0;
        // 16ms frames: 63 frames = 1008ms.
        for _ in 0..63 {
            fired += c.advance(16);
        }
        assert_eq!(fired, 1);
        assert_eq!(c.remaining_secs(), 9);
        assert_eq!(c.carry_ms(), 8);
    }

    #[test]
    fn large_jump_fires_several_steps() {
        let mut c = Countdown::new(5);
        assert_eq!(c.advance(3500), 3);
        assert_eq!(c.remaining_secs(), 2);
        assert_eq!(c.carry_ms(), 500);
    }

    #[test]
    fn stops_at_zero() {
        let mut c = Countdown::new(2);
        assert_eq!(c.advance(10_000), 2);
        assert!(c.is_expired());
        assert_eq!(c.carry_ms(), 0);
        assert_eq!(c.advance(1000), 0);
        assert_eq!(c.remaining_secs(), 0);
    }
}
