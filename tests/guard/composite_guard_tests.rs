/*!
 * CompositeGuard release ordering across resource types
 */

use crate::common::is_valid_fd;
use resguard::{CompositeGuard, FdGuard, Guard, ScopeGuard};
use serial_test::serial;
use std::os::unix::io::IntoRawFd;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
#[serial(fd)]
fn test_later_guards_release_before_earlier_resources() {
    let raw = tempfile::tempfile().unwrap().into_raw_fd();

    let fd_open_during_rollback = Arc::new(AtomicBool::new(false));
    let probe = fd_open_during_rollback.clone();

    {
        let _composite = CompositeGuard::new()
            .add(FdGuard::new(raw))
            .add(ScopeGuard::new(move || {
                // LIFO: the fd added earlier must still be open here
                probe.store(is_valid_fd(raw), Ordering::SeqCst);
            }));
    }

    assert!(fd_open_during_rollback.load(Ordering::SeqCst));
    assert!(!is_valid_fd(raw));
}

#[test]
#[serial(fd)]
fn test_manual_release_covers_all_members() {
    let raw = tempfile::tempfile().unwrap().into_raw_fd();
    let ran = Arc::new(AtomicBool::new(false));
    let ran_clone = ran.clone();

    let mut composite = CompositeGuard::new()
        .add(FdGuard::new(raw))
        .add(ScopeGuard::new(move || {
            ran_clone.store(true, Ordering::SeqCst);
        }));

    composite.release().unwrap();

    assert!(ran.load(Ordering::SeqCst));
    assert!(!is_valid_fd(raw));
    assert!(!composite.is_active());
}

#[test]
fn test_individually_released_member_is_skipped() {
    let ran = Arc::new(AtomicBool::new(false));
    let ran_clone = ran.clone();

    let mut member = ScopeGuard::new(move || {
        ran_clone.store(true, Ordering::SeqCst);
    });
    member.release().unwrap();
    assert!(ran.load(Ordering::SeqCst));

    let mut composite = CompositeGuard::new().add(member);
    let errors = composite.release_all();

    // Spent members do not surface AlreadyReleased
    assert!(errors.is_empty());
}
