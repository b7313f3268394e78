/*!
 * Composite Guards
 *
 * Combine multiple guards into one with LIFO release
 */

use super::traits::{Guard, GuardDrop};
use super::{GuardError, GuardMetadata, GuardResult};

/// Composite guard that releases its members in reverse insertion order
///
/// Mirrors stack unwind: the last guard added is the first released,
/// so later resources may depend on earlier ones. Release keeps going
/// past individual failures and collects the errors.
///
/// # Example
///
/// ```ignore
/// let composite = CompositeGuard::new()
///     .add(FdGuard::new(fd))
///     .add(ScopeGuard::new(|| rollback(&path)));
/// // rollback runs before the fd closes
/// ```
pub struct CompositeGuard {
    guards: Vec<Box<dyn Guard>>,
    metadata: GuardMetadata,
    active: bool,
}

impl CompositeGuard {
    /// Create an empty composite guard
    pub fn new() -> Self {
        Self {
            guards: Vec::new(),
            metadata: GuardMetadata::new("composite"),
            active: true,
        }
    }

    /// Add a guard; it will release before every guard added earlier
    pub fn add<G: Guard + 'static>(mut self, guard: G) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// Number of member guards
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Release all members in reverse insertion order, collecting errors
    ///
    /// Members that were already released individually are skipped.
    pub fn release_all(&mut self) -> Vec<GuardError> {
        let mut errors = Vec::new();

        for guard in self.guards.iter_mut().rev() {
            if !guard.is_active() {
                continue;
            }
            if let Err(e) = guard.release() {
                errors.push(e);
            }
        }

        self.active = false;
        errors
    }
}

impl Default for CompositeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Guard for CompositeGuard {
    fn resource_type(&self) -> &'static str {
        "composite"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    fn is_active(&self) -> bool {
        self.active && self.guards.iter().any(|g| g.is_active())
    }

    fn release(&mut self) -> GuardResult<()> {
        if !self.active {
            return Err(GuardError::AlreadyReleased);
        }

        let mut errors = self.release_all();

        if errors.is_empty() {
            Ok(())
        } else {
            // Return the first error, log the rest
            for err in errors.iter().skip(1) {
                log::error!("Composite guard release error: {}", err);
            }
            Err(errors.swap_remove(0))
        }
    }
}

impl GuardDrop for CompositeGuard {
    fn on_drop(&mut self) {
        if self.active {
            let errors = self.release_all();
            for err in &errors {
                log::error!("Composite guard drop error: {}", err);
            }
        }
    }
}

impl Drop for CompositeGuard {
    fn drop(&mut self) {
        self.on_drop();
    }
}
