use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_LIMIT: u32 = 5;
pub const DEFAULT_WINDOW_MS: i64 = 60_000;

/// Fixed-window request budget. Owned by the caller and threaded through
/// `check_and_consume`; nothing is kept globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitState {
    pub count: u32,
    pub window_start: i64,
    pub limit: u32,
    pub window_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateDecision {
    pub allowed: bool,
    pub reset_in_ms: i64,
}

impl RateLimitState {
    pub fn new(limit: u32, window_ms: i64, now_ms: i64) -> Self {
        Self { count: 0, window_start: now_ms, limit, window_ms }
    }

    pub fn with_defaults(now_ms: i64) -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_WINDOW_MS, now_ms)
    }

    pub fn window_end(&self) -> i64 {
        self.window_start.saturating_add(self.window_ms)
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count)
    }

    /// `check_and_consume` against the wall clock.
    pub fn check_now(self) -> (RateDecision, RateLimitState) {
        check_and_consume(self, chrono::Utc::now().timestamp_millis())
    }
}

/// Decide whether one more request fits and return the updated state.
///
/// The window restarts at `now_ms` only once `now_ms` is strictly past its end.
pub fn check_and_consume(state: RateLimitState, now_ms: i64) -> (RateDecision, RateLimitState) {
    let mut next = state;
    if now_ms > state.window_end() {
        next.count = 0;
        next.window_start = now_ms;
    }

    let reset_in_ms = next.window_end() - now_ms;
    if next.count < next.limit {
        next.count += 1;
        (RateDecision { allowed: true, reset_in_ms }, next)
    } else {
        warn!(limit = next.limit, reset_in_ms, "rate limit exhausted");
        (RateDecision { allowed: false, reset_in_ms }, next)
    }
}
