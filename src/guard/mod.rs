/*!
 * RAII Resource Guards
 *
 * Movable-only guards with automatic cleanup on scope exit.
 *
 * ## Design Principles
 *
 * 1. **Exclusive Ownership**: every resource has exactly one live owner;
 *    moves transfer ownership and statically empty the source
 * 2. **Runs Once**: cleanup fires at most once per guard, on every exit
 *    path including early return and panic unwind
 * 3. **Deterministic Ordering**: guards in one scope release in reverse
 *    declaration order, mirroring stack unwind
 * 4. **Zero-Cost**: compiles to manual management
 *
 * ## Guard Types
 *
 * - **ScopeGuard**: deferred action, disarmable on the commit path
 * - **FdGuard**: owned raw file descriptor, closed on drop
 * - **CompositeGuard**: multiple guards released as one, LIFO
 *
 * ## Example
 *
 * ```ignore
 * let file = FdGuard::new(raw_fd);
 * let mut rollback = ScopeGuard::new(|| remove_artifact(&path));
 * write_payload(file.fd())?; // early return: rollback runs, fd closes
 * rollback.disarm();         // commit: artifact survives, fd still closes
 * ```
 */

mod composite;
mod fd;
mod scope;
mod traits;

pub use composite::CompositeGuard;
pub use fd::FdGuard;
pub use scope::ScopeGuard;
pub use traits::{Guard, GuardDrop};

use nix::errno::Errno;

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors that can occur during guard operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum GuardError {
    #[error("Resource already released")]
    AlreadyReleased,

    #[error("Close failed: {0}")]
    CloseFailed(Errno),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Guard metadata for drop-path diagnostics
#[derive(Debug, Clone)]
pub struct GuardMetadata {
    pub resource_type: &'static str,
    pub creation_time: std::time::Instant,
}

impl GuardMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            creation_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
