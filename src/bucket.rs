use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Refill discipline for a [`TokenBucket`].
///
/// Both disciplines converge to the same sustained rate; they differ in how
/// tokens become available within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refill {
    /// Continuous drip: tokens accrue smoothly, recomputed from elapsed time
    /// on every acquisition.
    Greedy,
    /// Batch top-up: the full period quota lands at once on each period
    /// boundary.
    Intervally,
}

/// Rate limit parameters: `capacity` tokens replenish over `period`.
///
/// The upstream service allows bursts of up to `capacity` requests and a
/// sustained rate of `capacity / period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    capacity: u32,
    period: Duration,
    refill: Refill,
}

impl RateLimit {
    /// Creates a greedy-refill limit of `capacity` tokens per `period`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `period` is zero.
    #[must_use]
    pub fn new(capacity: u32, period: Duration) -> Self {
        assert!(capacity > 0, "rate limit capacity must be non-zero");
        assert!(!period.is_zero(), "rate limit period must be non-zero");
        Self {
            capacity,
            period,
            refill: Refill::Greedy,
        }
    }

    /// Selects the refill discipline.
    #[must_use]
    pub const fn with_refill(mut self, refill: Refill) -> Self {
        self.refill = refill;
        self
    }

    /// Burst size of the bucket.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Tokens per second, for the greedy discipline.
    fn rate(&self) -> f64 {
        f64::from(self.capacity) / self.period.as_secs_f64()
    }
}

#[derive(Debug)]
struct State {
    tokens: f64,
    last_refill: Instant,
}

/// Token bucket bounding the rate of outgoing requests.
///
/// One permit is acquired per attempt; shared by every operation issued
/// through one connection. The bucket starts full.
#[derive(Debug)]
pub struct TokenBucket {
    limit: RateLimit,
    // The lock is held across the refill wait, so concurrent acquirers are
    // served in arrival order (tokio mutexes are FIFO-fair). This also rules
    // out double-spend: only the lock holder can deduct.
    state: Mutex<State>,
}

impl TokenBucket {
    /// Creates a full bucket with the given limit.
    #[must_use]
    pub fn new(limit: RateLimit) -> Self {
        Self {
            limit,
            state: Mutex::new(State {
                tokens: f64::from(limit.capacity),
                last_refill: Instant::now(),
            }),
        }
    }

    /// Acquires `n` tokens, waiting for refill as needed.
    ///
    /// Never fails, only delays. `n` is clamped to the bucket capacity so a
    /// single oversized acquisition cannot wait forever.
    pub async fn acquire(&self, n: u32) {
        debug_assert!(n <= self.limit.capacity, "acquisition exceeds capacity");
        let need = f64::from(n.min(self.limit.capacity));

        let mut state = self.state.lock().await;
        loop {
            self.refill(&mut state);
            if state.tokens >= need {
                state.tokens -= need;
                return;
            }
            let wait = self.time_until(&state, need);
            tracing::trace!(wait_ms = wait.as_millis(), "rate limited, waiting for refill");
            tokio::time::sleep(wait).await;
        }
    }

    /// Tokens currently available, after applying any pending refill.
    pub async fn available(&self) -> f64 {
        let mut state = self.state.lock().await;
        self.refill(&mut state);
        state.tokens
    }

    fn refill(&self, state: &mut State) {
        let now = Instant::now();
        let elapsed = now.duration_since(state.last_refill);
        let cap = f64::from(self.limit.capacity);

        match self.limit.refill {
            Refill::Greedy => {
                state.tokens = cap.min(state.tokens + elapsed.as_secs_f64() * self.limit.rate());
                state.last_refill = now;
            }
            Refill::Intervally => {
                let periods = elapsed.as_nanos() / self.limit.period.as_nanos();
                if periods > 0 {
                    state.tokens = cap;
                    // Advance by whole periods only, keeping the boundary phase.
                    let advance = u32::try_from(periods).unwrap_or(u32::MAX);
                    state.last_refill += self.limit.period * advance;
                }
            }
        }
    }

    fn time_until(&self, state: &State, need: f64) -> Duration {
        match self.limit.refill {
            Refill::Greedy => Duration::from_secs_f64((need - state.tokens) / self.limit.rate()),
            Refill::Intervally => {
                let since = Instant::now().duration_since(state.last_refill);
                self.limit.period.saturating_sub(since)
            }
        }
    }
}
