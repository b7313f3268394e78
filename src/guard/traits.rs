/*!
 * Guard Traits
 *
 * Core abstractions for RAII resource guards
 */

use super::{GuardMetadata, GuardResult};

/// Core guard trait
///
/// All guards implement this to provide:
/// - Resource type identification
/// - Metadata access
/// - Manual release capability
pub trait Guard: Send {
    /// Resource type name for logging/debugging
    fn resource_type(&self) -> &'static str;

    /// Get guard metadata
    fn metadata(&self) -> &GuardMetadata;

    /// Check if guard still holds a pending resource or action
    fn is_active(&self) -> bool;

    /// Run the guard's cleanup now instead of at scope exit
    ///
    /// Returns `Err(AlreadyReleased)` if the guard has nothing left to do
    fn release(&mut self) -> GuardResult<()>;
}

/// Guards with custom drop-path cleanup
///
/// Separated from `Drop` for testability
pub trait GuardDrop: Guard {
    /// Perform cleanup on drop
    ///
    /// Must NOT panic. Log failures instead.
    fn on_drop(&mut self);
}
