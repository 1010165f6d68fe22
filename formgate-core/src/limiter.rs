// formgate-core/src/limiter.rs
use log::debug;
use std::collections::HashMap;

/// Last accepted submission time per key, in milliseconds since the epoch.
///
/// Entries are overwritten on every accepted attempt and never removed; the
/// set of keys is small and fixed in practice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitState {
    last_accepted: HashMap<String, u64>,
}

impl RateLimitState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_accepted(&self, key: &str) -> Option<u64> {
        self.last_accepted.get(key).copied()
    }

    fn record(&mut self, key: &str, now_ms: u64) {
        self.last_accepted.insert(key.to_string(), now_ms);
    }
}

/// A fixed-delay limiter that keeps accepted submissions for a key apart.
///
/// Rejected attempts never move the recorded timestamp, so hammering the
/// submit button does not push the cooldown deadline back.
#[derive(Debug, Clone)]
pub struct SubmissionLimiter {
    min_delay_ms: u64,
    state: RateLimitState,
}

impl SubmissionLimiter {
    /// Creates a limiter with an empty state.
    /// e.g., min_delay_ms: 1000 (one accepted submission per second)
    pub fn new(min_delay_ms: u64) -> Self {
        Self::with_state(min_delay_ms, RateLimitState::new())
    }

    pub fn with_state(min_delay_ms: u64, state: RateLimitState) -> Self {
        Self { min_delay_ms, state }
    }

    /// Returns true and records `now_ms` if `key` may submit. Otherwise
    /// returns false and leaves the state untouched.
    pub fn check_and_record(&mut self, key: &str, now_ms: u64) -> bool {
        if self.remaining_ms(key, now_ms) > 0 {
            debug!("Submission for '{}' rejected by rate limiter.", key);
            return false;
        }

        self.state.record(key, now_ms);
        true
    }

    /// Milliseconds until `key` is allowed again; 0 when it already is.
    ///
    /// A clock that moved backwards counts as no time elapsed.
    pub fn remaining_ms(&self, key: &str, now_ms: u64) -> u64 {
        match self.state.last_accepted(key) {
            Some(last) => {
                let elapsed = now_ms.saturating_sub(last);
                self.min_delay_ms.saturating_sub(elapsed)
            }
            None => 0,
        }
    }

    pub fn state(&self) -> &RateLimitState {
        &self.state
    }

    pub fn into_state(self) -> RateLimitState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "contact-form";

    #[test]
    fn first_attempt_is_allowed_and_recorded() {
        let mut limiter = SubmissionLimiter::new(1000);
        assert!(limiter.check_and_record(KEY, 5_000));
        assert_eq!(limiter.state().last_accepted(KEY), Some(5_000));
    }

    #[test]
    fn rejection_keeps_original_deadline() {
        let mut limiter = SubmissionLimiter::new(1000);
        assert!(limiter.check_and_record(KEY, 10_000));
        for t in [10_001, 10_500, 10_999] {
            assert!(!limiter.check_and_record(KEY, t));
            assert_eq!(limiter.state().last_accepted(KEY), Some(10_000));
        }
        assert!(limiter.check_and_record(KEY, 11_000));
        assert_eq!(limiter.state().last_accepted(KEY), Some(11_000));
    }

    #[test]
    fn keys_are_independent() {
        let mut limiter = SubmissionLimiter::new(1000);
        assert!(limiter.check_and_record("a", 100));
        assert!(limiter.check_and_record("b", 150));
        assert!(!limiter.check_and_record("a", 200));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut limiter = SubmissionLimiter::new(1000);
        assert_eq!(limiter.remaining_ms(KEY, 0), 0);
        limiter.check_and_record(KEY, 2_000);
        assert_eq!(limiter.remaining_ms(KEY, 2_000), 1000);
        assert_eq!(limiter.remaining_ms(KEY, 2_400), 600);
        assert_eq!(limiter.remaining_ms(KEY, 3_000), 0);
    }

    #[test]
    fn clock_going_backwards_is_rejected() {
        let mut limiter = SubmissionLimiter::new(1000);
        assert!(limiter.check_and_record(KEY, 50_000));
        assert!(!limiter.check_and_record(KEY, 40_000));
        assert_eq!(limiter.state().last_accepted(KEY), Some(50_000));
    }
}
