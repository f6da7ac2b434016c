//! Cancellable expiration countdown for generated batches

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How a countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryOutcome {
    /// The full lifetime elapsed
    Expired,
    /// The countdown was cancelled before expiring
    Cancelled,
}

/// Cancellable countdown for a password batch lifetime.
///
/// The countdown never blocks a thread; it awaits the tokio clock and
/// races it against a cancellation token, so Ctrl-C or any other task
/// holding the token can stop it cleanly.
#[derive(Debug, Clone)]
pub struct ExpiryTimer {
    lifetime: Duration,
    token: CancellationToken,
}

impl ExpiryTimer {
    /// Create a timer for the given lifetime
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            token: CancellationToken::new(),
        }
    }

    /// Configured lifetime
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Token other tasks can use to cancel the countdown
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancel the countdown
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait out the lifetime in a single sleep
    pub async fn wait(&self) -> ExpiryOutcome {
        tokio::select! {
            _ = self.token.cancelled() => ExpiryOutcome::Cancelled,
            _ = tokio::time::sleep(self.lifetime) => ExpiryOutcome::Expired,
        }
    }

    /// Count down in ticks, reporting the remaining lifetime after
    /// each one.
    ///
    /// The callback fires once with the full lifetime before the first
    /// tick, then after every tick down to zero unless cancelled. The
    /// final step is shortened when the lifetime is not a whole number
    /// of ticks.
    pub async fn run_with_ticks<F>(&self, tick: Duration, mut on_tick: F) -> ExpiryOutcome
    where
        F: FnMut(Duration),
    {
        if tick.is_zero() {
            return self.wait().await;
        }

        let mut remaining = self.lifetime;
        on_tick(remaining);

        while !remaining.is_zero() {
            let step = tick.min(remaining);
            tokio::select! {
                _ = self.token.cancelled() => return ExpiryOutcome::Cancelled,
                _ = tokio::time::sleep(step) => {
                    remaining = remaining.saturating_sub(step);
                    on_tick(remaining);
                }
            }
        }

        ExpiryOutcome::Expired
    }
}
