//! The upload-to-comparison state machine.
//!
//! A [`Session`] owns the display references for the current original
//! and colorized images and tracks exactly one processing phase at a
//! time. The reference type `R` is generic: the browser layer plugs in
//! its Blob-URL guard, so dropping a reference releases the underlying
//! resource. Replacing or clearing references therefore *is* the
//! acquire/release pairing -- no separate cleanup pass exists to forget.
//!
//! Completion is guarded by a generation [`Ticket`]: a response that
//! arrives after a reset (or after a newer upload started) is discarded
//! instead of overwriting the newer state.

use serde::{Deserialize, Serialize};

/// The one user-facing failure message. Transport errors, non-success
/// statuses, and refused connections all collapse into it.
pub const PROCESSING_ERROR_MESSAGE: &str = "Error processing image. Please try again.";

/// Where the session is in the upload-to-comparison flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing uploaded, or the session was reset.
    #[default]
    Idle,
    /// One colorize request is in flight.
    Processing,
    /// The colorized result is available.
    Succeeded,
    /// The request failed; [`Session::error`] holds the message.
    Failed,
}

/// Proof of which processing cycle a completion belongs to.
///
/// Returned by [`Session::begin`]; [`Session::succeed`] and
/// [`Session::fail`] ignore completions whose ticket no longer matches
/// the session's generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Rejected session transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A cycle is already in flight; at most one request may be
    /// outstanding. Reset first, or wait for completion.
    #[error("a colorization request is already in flight")]
    AlreadyProcessing,
}

/// Per-visit colorization session state.
///
/// `R` is the display-reference type (e.g. an owned Blob URL). The
/// session drops stale references as part of every transition that
/// replaces or clears them.
#[derive(Debug)]
pub struct Session<R> {
    phase: Phase,
    original: Option<R>,
    result: Option<R>,
    error: Option<&'static str>,
    generation: u64,
}

impl<R> Default for Session<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Session<R> {
    /// A fresh idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            original: None,
            result: None,
            error: None,
            generation: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Display reference for the uploaded original, if any.
    #[must_use]
    pub const fn original(&self) -> Option<&R> {
        self.original.as_ref()
    }

    /// Display reference for the colorized result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// The user-facing error message, set only in [`Phase::Failed`].
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Processing)
    }

    /// Start a new processing cycle for `original`.
    ///
    /// Drops the previous original and result references, clears any
    /// error, and moves to [`Phase::Processing`]. The returned ticket
    /// must be presented when the request completes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyProcessing`] (dropping `original`)
    /// while a cycle is in flight -- at most one request is outstanding
    /// at a time.
    pub fn begin(&mut self, original: R) -> Result<Ticket, SessionError> {
        if self.is_processing() {
            return Err(SessionError::AlreadyProcessing);
        }
        self.generation += 1;
        self.phase = Phase::Processing;
        self.original = Some(original);
        self.result = None;
        self.error = None;
        Ok(Ticket(self.generation))
    }

    /// Commit a successful response for the cycle `ticket` belongs to.
    ///
    /// Returns `false` (dropping `result`, which releases its resource)
    /// when the ticket is stale: the session was reset, or a newer
    /// cycle has started since.
    pub fn succeed(&mut self, ticket: Ticket, result: R) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.phase = Phase::Succeeded;
        self.result = Some(result);
        self.error = None;
        true
    }

    /// Record a failed response for the cycle `ticket` belongs to.
    ///
    /// Sets the fixed [`PROCESSING_ERROR_MESSAGE`]; there is no finer
    /// taxonomy and no retry -- the user re-uploads to try again.
    /// Returns `false` for a stale ticket, leaving the session untouched.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.phase = Phase::Failed;
        self.result = None;
        self.error = Some(PROCESSING_ERROR_MESSAGE);
        true
    }

    /// Return to idle from any phase.
    ///
    /// Drops both display references and clears the error. Bumps the
    /// generation so an in-flight request's eventual completion is
    /// discarded rather than resurrecting the cleared state.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.original = None;
        self.result = None;
        self.error = None;
    }
}
