//! Confirmation gate
//!
//! Two-phase confirmation for destructive edits: [`ConfirmationGate::propose`]
//! parks an action and returns a token, [`ConfirmationGate::resolve`] either
//! releases the action for execution or discards it.
//!
//! The gate holds at most one pending action. A new proposal replaces the
//! open one (last request wins); the replaced token becomes stale.

use std::fmt::{self, Display, Formatter};

/// Handle for one proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfirmationToken(u64);

impl Display for ConfirmationToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "confirm#{}", self.0)
    }
}

/// Open confirmation, as presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation<A> {
    /// Token that resolves this proposal
    pub token: ConfirmationToken,
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub message: String,
    /// Action to run on confirmation
    pub action: A,
}

/// Outcome of resolving a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<A> {
    /// Confirmed: the caller must now execute the action
    Execute(A),
    /// Cancelled: the action was dropped
    Cancelled(A),
    /// Token is not the pending one; nothing happened
    Stale,
}

/// Single-slot confirmation gate
#[derive(Debug, Clone)]
pub struct ConfirmationGate<A> {
    pending: Option<PendingConfirmation<A>>,
    issued: u64,
}

impl<A> Default for ConfirmationGate<A> {
    fn default() -> Self {
        Self {
            pending: None,
            issued: 0,
        }
    }
}

impl<A> ConfirmationGate<A> {
    /// Create a closed gate
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate for `action`, replacing any open proposal
    pub fn propose(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        action: A,
    ) -> ConfirmationToken {
        self.issued += 1;
        let token = ConfirmationToken(self.issued);
        if let Some(replaced) = self.pending.take() {
            tracing::debug!(replaced = %replaced.token, by = %token, "confirmation superseded");
        }
        self.pending = Some(PendingConfirmation {
            token,
            title: title.into(),
            message: message.into(),
            action,
        });
        token
    }

    /// Currently open proposal
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<&PendingConfirmation<A>> {
        self.pending.as_ref()
    }

    /// Check if a proposal is open
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve `token`, closing the gate if it is the pending one
    pub fn resolve(&mut self, token: ConfirmationToken, accepted: bool) -> Decision<A> {
        match self.pending.take() {
            Some(pending) if pending.token == token => {
                if accepted {
                    Decision::Execute(pending.action)
                } else {
                    Decision::Cancelled(pending.action)
                }
            }
            other => {
                self.pending = other;
                Decision::Stale
            }
        }
    }

    /// Shorthand for `resolve(token, true)`
    #[inline]
    pub fn confirm(&mut self, token: ConfirmationToken) -> Decision<A> {
        self.resolve(token, true)
    }

    /// Shorthand for `resolve(token, false)`
    #[inline]
    pub fn cancel(&mut self, token: ConfirmationToken) -> Decision<A> {
        self.resolve(token, false)
    }
}
