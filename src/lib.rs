/*!
 * Resource Guards
 * RAII ownership of raw file descriptors and deferred cleanup actions
 */

pub mod guard;

// Re-exports
pub use guard::{
    CompositeGuard, FdGuard, Guard, GuardDrop, GuardError, GuardMetadata, GuardResult, ScopeGuard,
};
