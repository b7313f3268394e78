/*!
 * Shared helpers for guard tests
 */

use nix::errno::Errno;
use nix::fcntl::{fcntl, open, FcntlArg, OFlag};
use nix::sys::stat::Mode;
use std::os::unix::io::RawFd;
use std::path::Path;

/// Probe a descriptor at the OS level without disturbing it
pub fn is_valid_fd(fd: RawFd) -> bool {
    match fcntl(fd, FcntlArg::F_GETFD) {
        Ok(_) => true,
        Err(errno) => errno != Errno::EBADF,
    }
}

/// Open an existing file read-only, returning the raw descriptor
pub fn open_rdonly(path: &Path) -> nix::Result<RawFd> {
    open(path, OFlag::O_RDONLY, Mode::empty())
}

/// Create a fresh file write-only, failing if it already exists
pub fn create_wronly(path: &Path) -> nix::Result<RawFd> {
    open(
        path,
        OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_EXCL,
        Mode::from_bits_truncate(0o600),
    )
}
