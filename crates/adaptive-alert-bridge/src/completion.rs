// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-shot completion handle shared by the buttons of a modal.
//
// Every button holds a clone of the same `Completion`. The sender lives in a
// take-once slot, so the first tap wins and any later resolve is a no-op.

use std::sync::{Arc, Mutex};

use adaptive_alert_core::error::{AlertError, Result};
use adaptive_alert_core::{InvocationId, Outcome};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Resolving end of an invocation.
#[derive(Debug, Clone)]
pub struct Completion {
    invocation: InvocationId,
    /// Taken on first resolve.
    slot: Arc<Mutex<Option<oneshot::Sender<Outcome>>>>,
}

impl Completion {
    /// Create a connected completion/pending pair for one invocation.
    pub fn channel(invocation: InvocationId) -> (Self, PendingOutcome) {
        let (tx, rx) = oneshot::channel();
        let completion = Self {
            invocation,
            slot: Arc::new(Mutex::new(Some(tx))),
        };
        (completion, PendingOutcome { invocation, rx })
    }

    pub fn invocation(&self) -> InvocationId {
        self.invocation
    }

    /// Resolve the invocation with `outcome`.
    ///
    /// Returns `true` if this call resolved it, `false` if it was already
    /// resolved.
    pub fn resolve(&self, outcome: Outcome) -> bool {
        let sender = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        let Some(tx) = sender else {
            tracing::warn!(
                invocation = %self.invocation,
                %outcome,
                "completion already resolved; ignoring"
            );
            return false;
        };

        tracing::debug!(invocation = %self.invocation, %outcome, "resolving invocation");
        if tx.send(outcome).is_err() {
            tracing::debug!(invocation = %self.invocation, "caller stopped waiting");
        }
        true
    }

    /// Whether some clone of this handle has already resolved.
    pub fn is_resolved(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_none()
    }
}

/// Waiting end of an invocation.
///
/// Yields `AlertError::Unresolved` when every `Completion` clone was dropped
/// without a tap (no host screen, external dismissal).
#[derive(Debug)]
pub struct PendingOutcome {
    invocation: InvocationId,
    rx: oneshot::Receiver<Outcome>,
}

impl PendingOutcome {
    pub fn invocation(&self) -> InvocationId {
        self.invocation
    }

    /// Wait for the user's choice.
    pub async fn wait(self) -> Result<Outcome> {
        self.rx.await.map_err(|_| AlertError::Unresolved)
    }

    /// Blocking variant of [`wait`](Self::wait). Must not be called from
    /// inside an async runtime or from the main thread that drives the
    /// modal.
    pub fn blocking_wait(self) -> Result<Outcome> {
        self.rx.blocking_recv().map_err(|_| AlertError::Unresolved)
    }

    /// Poll without waiting. `None` while the modal is still up.
    pub fn try_outcome(&mut self) -> Option<Result<Outcome>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(Ok(outcome)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(AlertError::Unresolved)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_resolve_wins() {
        let (completion, pending) = Completion::channel(InvocationId::new());
        let other_button = completion.clone();

        assert!(completion.resolve(Outcome::Primary));
        assert!(!other_button.resolve(Outcome::Secondary));
        assert!(other_button.is_resolved());

        assert_eq!(pending.wait().await.unwrap(), Outcome::Primary);
    }

    #[tokio::test]
    async fn dropping_every_handle_is_unresolved() {
        let (completion, pending) = Completion::channel(InvocationId::new());
        let clone = completion.clone();
        drop(completion);
        drop(clone);

        assert!(matches!(pending.wait().await, Err(AlertError::Unresolved)));
    }

    #[test]
    fn try_outcome_reports_progress() {
        let (completion, mut pending) = Completion::channel(InvocationId::new());
        assert!(pending.try_outcome().is_none());

        completion.resolve(Outcome::Action(4));
        assert_eq!(pending.try_outcome().unwrap().unwrap(), Outcome::Action(4));
    }

    #[test]
    fn resolve_after_caller_left_still_counts() {
        let (completion, pending) = Completion::channel(InvocationId::new());
        drop(pending);
        assert!(completion.resolve(Outcome::Cancel));
        assert!(!completion.resolve(Outcome::Cancel));
    }

    #[test]
    fn blocking_wait_from_another_thread() {
        let (completion, pending) = Completion::channel(InvocationId::new());
        let waiter = std::thread::spawn(move || pending.blocking_wait());
        completion.resolve(Outcome::Secondary);
        assert_eq!(waiter.join().unwrap().unwrap(), Outcome::Secondary);
    }
}
