use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::TransportError;

/// Cancellation and deadline for a single call (or a group of calls sharing it).
///
/// Cloning shares the same cancellation token; [`RequestContext::child`] derives a context
/// that is cancelled whenever its parent is, but can also be cancelled on its own.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing token, e.g. one owned by a shutdown handler.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Tighten the deadline to `now + timeout`. Never extends an earlier deadline.
    ///
    /// A timeout too large to represent as an instant (e.g. `Duration::MAX`) adds no deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(cur) => cur.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Fails fast if the context is already done; otherwise races `fut` against cancellation
    /// and the deadline. The losing future is dropped, which aborts any in-flight I/O.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        if self.token.is_cancelled() {
            return Err(TransportError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(TransportError::DeadlineExceeded);
            }
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(TransportError::Cancelled),
            _ = expired => Err(TransportError::DeadlineExceeded),
            res = fut => res,
        }
    }
}
