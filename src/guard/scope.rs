/*!
 * Scope Guards
 *
 * Deferred actions that run at scope exit unless disarmed
 */

use super::traits::{Guard, GuardDrop};
use super::{GuardError, GuardMetadata, GuardResult};

/// Scope guard that runs a deferred action at most once
///
/// The action fires when the guard is dropped, on every exit path
/// (normal return, early return, panic unwind), unless `disarm` was
/// called first. `Some` = armed, `None` = disarmed or spent, so the
/// run-at-most-once invariant is carried by the type itself.
///
/// The action must not panic: a panic from a destructor during unwind
/// aborts the process.
///
/// # Example
///
/// ```ignore
/// let mut rollback = ScopeGuard::new(|| {
///     let _ = std::fs::remove_file(&artifact);
/// });
/// risky_write()?;    // on error the artifact is removed
/// rollback.disarm(); // commit: keep the artifact
/// ```
pub struct ScopeGuard<F: FnOnce()> {
    action: Option<F>,
    metadata: GuardMetadata,
}

impl<F: FnOnce()> ScopeGuard<F> {
    /// Create an armed guard owning `action`
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
            metadata: GuardMetadata::new("scope"),
        }
    }

    /// Cancel the pending action without running it
    ///
    /// Idempotent. This is the commit-path operation: once disarmed the
    /// guard's destruction is a no-op.
    pub fn disarm(&mut self) {
        self.action = None;
    }

    /// Check whether the action is still pending
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }

    fn fire(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl<F: FnOnce() + Send> Guard for ScopeGuard<F> {
    fn resource_type(&self) -> &'static str {
        "scope"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    fn is_active(&self) -> bool {
        self.is_armed()
    }

    fn release(&mut self) -> GuardResult<()> {
        if !self.is_armed() {
            return Err(GuardError::AlreadyReleased);
        }
        self.fire();
        Ok(())
    }
}

impl<F: FnOnce() + Send> GuardDrop for ScopeGuard<F> {
    fn on_drop(&mut self) {
        self.fire();
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        self.fire();
    }
}
