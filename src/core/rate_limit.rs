use std::time::Duration;
use tokio::time::sleep;

/// Default spacing between NBA Stats calls; faster than this gets the client blocked.
pub const NBA_STATS_DELAY_MS: u64 = 600;

/// Spaces out consecutive requests; the first call goes through immediately.
#[derive(Debug)]
pub struct RateLimiter {
    delay: Duration,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        }
    }

    pub async fn wait(&mut self) {
        if self.should_wait() {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }

    fn should_wait(&self) -> bool {
        self.request_count > 0 && !self.delay.is_zero()
    }
}
