// Tick guard
//
// A single flag held for the whole drain-compose-present sequence. A tick
// that finds it held does nothing. Handles are cheap clones of the same flag
// so a palette loader or an outer driver can hold it as well.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared non-blocking guard flag
#[derive(Debug, Clone, Default)]
pub struct VideoLock {
    held: Arc<AtomicBool>,
}

impl VideoLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the guard if nobody holds it
    ///
    /// Released when the returned guard is dropped.
    pub fn try_acquire(&self) -> Option<LockGuard<'_>> {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| LockGuard { lock: self })
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// Held guard; dropping it releases the flag
#[derive(Debug)]
pub struct LockGuard<'a> {
    lock: &'a VideoLock,
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.lock.held.store(false, Ordering::Release);
    }
}
