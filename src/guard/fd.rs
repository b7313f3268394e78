/*!
 * File Descriptor Guards
 *
 * Exclusive ownership of raw file descriptors with close-on-drop
 */

use super::traits::{Guard, GuardDrop};
use super::{GuardError, GuardMetadata, GuardResult};
use nix::unistd;
use std::mem;
use std::os::unix::io::{AsRawFd, IntoRawFd, RawFd};

/// Sentinel raw value meaning "no descriptor owned"
const SENTINEL: RawFd = -1;

/// Owned file descriptor, closed exactly once on drop
///
/// Adopts a raw descriptor as given without validating it; callers
/// check acquisition failure (negative fd) before wrapping, or probe
/// with `is_open`. At most one `FdGuard` owns a given live descriptor:
/// moves transfer ownership and the source binding is statically dead.
///
/// # Example
///
/// ```ignore
/// let fd = open(path, OFlag::O_RDONLY, Mode::empty())?;
/// let file = FdGuard::new(fd);
/// read_header(file.fd())?;
/// // closed on drop
/// ```
pub struct FdGuard {
    fd: RawFd,
    metadata: GuardMetadata,
}

impl FdGuard {
    /// Adopt `fd` as owned. No validation is performed.
    pub fn new(fd: RawFd) -> Self {
        Self {
            fd,
            metadata: GuardMetadata::new("fd"),
        }
    }

    /// Create a guard that owns nothing
    pub fn empty() -> Self {
        Self::new(SENTINEL)
    }

    /// Get the raw descriptor without transferring ownership
    #[inline]
    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// Check whether a descriptor is owned
    ///
    /// Any negative value counts as unowned, so wrapping a failed
    /// acquisition's error return never leads to a close attempt. Does
    /// not verify the descriptor is valid at the OS level.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.fd >= 0
    }

    /// Detach the descriptor without closing it
    ///
    /// The guard becomes empty and the caller takes over responsibility
    /// for eventually closing the returned descriptor.
    pub fn into_raw(mut self) -> RawFd {
        mem::replace(&mut self.fd, SENTINEL)
    }

    /// Close the currently owned descriptor (if any), then adopt `new_fd`
    ///
    /// A failing close is logged and swallowed so `reset` stays
    /// infallible; use `release` first when the errno matters.
    pub fn reset(&mut self, new_fd: RawFd) {
        if self.is_open() {
            if let Err(errno) = unistd::close(self.fd) {
                log::error!("FD guard reset: close({}) failed: {}", self.fd, errno);
            }
        }
        self.fd = new_fd;
    }

    /// Close the descriptor now, consuming the guard
    pub fn close_early(mut self) -> GuardResult<()> {
        self.release()
    }
}

impl Default for FdGuard {
    fn default() -> Self {
        Self::empty()
    }
}

impl AsRawFd for FdGuard {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl IntoRawFd for FdGuard {
    fn into_raw_fd(self) -> RawFd {
        self.into_raw()
    }
}

impl Guard for FdGuard {
    fn resource_type(&self) -> &'static str {
        "fd"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    fn is_active(&self) -> bool {
        self.is_open()
    }

    fn release(&mut self) -> GuardResult<()> {
        if !self.is_open() {
            return Err(GuardError::AlreadyReleased);
        }

        let fd = mem::replace(&mut self.fd, SENTINEL);
        unistd::close(fd).map_err(GuardError::CloseFailed)
    }
}

impl GuardDrop for FdGuard {
    fn on_drop(&mut self) {
        if self.is_open() {
            if let Err(e) = self.release() {
                log::error!(
                    "FD guard drop failed after {}us: {}",
                    self.metadata.lifetime_micros(),
                    e
                );
            }
        }
    }
}

impl Drop for FdGuard {
    fn drop(&mut self) {
        self.on_drop();
    }
}
