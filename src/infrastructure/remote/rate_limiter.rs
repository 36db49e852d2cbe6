use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

pub const DEFAULT_MAX_REQUESTS: usize = 10;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

/// Sliding-window throttle shared by every caller of the remote service.
///
/// Each `acquire` reserves a send instant. A reservation is placed no earlier
/// than `window` after the request `max_requests` places back, so any
/// half-open interval of length `window` holds at most `max_requests` reservations.
///
/// The bound holds for reservation instants. The actual send happens after
/// `sleep_until` returns, so scheduler lag can shift individual sends slightly
/// later and bunch them past the limit at the wire.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    max_delay: Duration,
    reservations: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration, max_delay: Duration) -> Self {
        let max_requests = max_requests.max(1);
        Self {
            max_requests,
            window,
            max_delay,
            reservations: Mutex::new(VecDeque::with_capacity(max_requests + 1)),
        }
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Waits until one more request fits in the window.
    ///
    /// Fails without waiting when the required delay exceeds `max_delay`.
    pub async fn acquire(&self) -> Result<(), RateLimitError> {
        let slot = {
            let mut reservations = self.reservations.lock().await;
            let now = Instant::now();

            while let Some(oldest) = reservations.front() {
                if *oldest + self.window <= now {
                    reservations.pop_front();
                } else {
                    break;
                }
            }

            let slot = if reservations.len() < self.max_requests {
                now
            } else {
                let blocking = reservations[reservations.len() - self.max_requests];
                blocking + self.window
            };

            let wait = slot.saturating_duration_since(now);
            if wait > self.max_delay {
                return Err(RateLimitError::DelayExceeded {
                    wait,
                    max_delay: self.max_delay,
                });
            }

            reservations.push_back(slot);
            slot
        };

        tokio::time::sleep_until(slot).await;
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW, DEFAULT_MAX_DELAY)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("request would wait {wait:?}, over the {max_delay:?} limit")]
    DelayExceeded { wait: Duration, max_delay: Duration },
}
