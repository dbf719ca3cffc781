use std::time::Duration;

/// Pause inserted between consecutive daily requests to stay under the API rate limit.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(350);

/// Fixed inter-request delay policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay at all. Meant for tests and scripted transports.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_pause_waits_for_delay() {
        let throttle = Throttle::new(Duration::from_millis(20));
        let started = Instant::now();
        throttle.pause().await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(Throttle::default().delay(), Duration::from_millis(350));
        assert!(Throttle::none().delay().is_zero());
    }
}
