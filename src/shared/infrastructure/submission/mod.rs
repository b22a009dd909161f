// Simulated form submission: validate, show a pending indicator, settle after a
// fixed delay, then hand the target route to the navigator.
//
// Lifecycle per instance
// - Idle -> Settled(Failure) when validation fails. No delay, never Pending.
// - Idle -> Pending -> Settled(Success | Failure) otherwise.
// - Pending -> Cancelled when the owning view is torn down before the delay elapses.
//   The commit is never applied after cancellation.
//
// A fresh instance is created for every submission; instances share nothing.

use crate::shared::core::errors::{DomainError, ValidationError};
use crate::shared::infrastructure::navigation::{Navigator, Route};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Success { route: Route },
    Failure { reason: DomainError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
    Settled(Settlement),
    Cancelled,
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Settled(_) | SubmissionState::Cancelled
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Success { value: T, route: Route },
    Failure(DomainError),
    Cancelled,
}

#[derive(Clone)]
pub struct SubmissionPipeline {
    settle_delay: Duration,
    navigator: Arc<dyn Navigator>,
}

impl SubmissionPipeline {
    pub fn new(settle_delay: Duration, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            settle_delay,
            navigator,
        }
    }

    /// Create a new instance in `Idle`. Subscribe to it or grab its teardown
    /// token before calling [`Submission::submit`].
    pub fn start(&self) -> Submission {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Submission {
            state,
            teardown: CancellationToken::new(),
            settle_delay: self.settle_delay,
            navigator: self.navigator.clone(),
        }
    }

    pub async fn submit<P, T, V, C, Fut>(
        &self,
        payload: P,
        validate: V,
        commit: C,
        target: Route,
    ) -> Outcome<T>
    where
        V: FnOnce(&P) -> Result<(), ValidationError>,
        C: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        self.start().submit(payload, validate, commit, target).await
    }
}

pub struct Submission {
    state: watch::Sender<SubmissionState>,
    teardown: CancellationToken,
    settle_delay: Duration,
    navigator: Arc<dyn Navigator>,
}

impl Submission {
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Token the view cancels when it is torn down.
    pub fn teardown_token(&self) -> CancellationToken {
        self.teardown.clone()
    }

    pub async fn submit<P, T, V, C, Fut>(
        self,
        payload: P,
        validate: V,
        commit: C,
        target: Route,
    ) -> Outcome<T>
    where
        V: FnOnce(&P) -> Result<(), ValidationError>,
        C: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        if let Err(error) = validate(&payload) {
            let reason = DomainError::from(error);
            tracing::debug!(%reason, "submission rejected by validation");
            self.settle(Settlement::Failure {
                reason: reason.clone(),
            });
            return Outcome::Failure(reason);
        }

        self.state.send_replace(SubmissionState::Pending);
        tracing::debug!(delay = ?self.settle_delay, "submission pending");

        tokio::select! {
            biased;
            _ = self.teardown.cancelled() => {
                tracing::debug!("submission cancelled before settling");
                self.state.send_replace(SubmissionState::Cancelled);
                return Outcome::Cancelled;
            }
            _ = tokio::time::sleep(self.settle_delay) => {}
        }

        match commit(payload).await {
            Ok(value) => {
                self.settle(Settlement::Success {
                    route: target.clone(),
                });
                self.navigator.navigate(target.clone()).await;
                Outcome::Success {
                    value,
                    route: target,
                }
            }
            Err(reason) => {
                tracing::warn!(%reason, "submission commit failed");
                self.settle(Settlement::Failure {
                    reason: reason.clone(),
                });
                Outcome::Failure(reason)
            }
        }
    }

    fn settle(&self, settlement: Settlement) {
        self.state.send_replace(SubmissionState::Settled(settlement));
    }
}
