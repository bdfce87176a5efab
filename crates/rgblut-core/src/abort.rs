//! Cooperative cancellation.
//!
//! A host may ask a render to stop at any time. Workers poll an
//! [`AbortSignal`] at row boundaries and stop starting new rows once it is
//! raised; rows already written stay written.
//!
//! ```rust
//! use rgblut_core::{AbortFlag, AbortSignal};
//!
//! let flag = AbortFlag::new();
//! let handle = flag.clone();
//! assert!(!flag.is_aborted());
//! handle.abort();
//! assert!(flag.is_aborted());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A poll-able "abort requested" signal.
pub trait AbortSignal: Sync {
    /// Returns `true` once cancellation has been requested.
    fn is_aborted(&self) -> bool;
}

impl AbortSignal for AtomicBool {
    #[inline]
    fn is_aborted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F: Fn() -> bool + Sync> AbortSignal for F {
    #[inline]
    fn is_aborted(&self) -> bool {
        self()
    }
}

/// Signal that is never raised.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverAbort;

impl AbortSignal for NeverAbort {
    #[inline]
    fn is_aborted(&self) -> bool {
        false
    }
}

/// Shareable abort flag.
///
/// Clones share the same underlying flag, so a host can keep one handle and
/// pass another into the render.
#[derive(Debug, Clone, Default)]
pub struct AbortFlag {
    flag: Arc<AtomicBool>,
}

impl AbortFlag {
    /// Creates a flag in the not-aborted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    #[inline]
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clears a previous request so the flag can be reused.
    #[inline]
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation has been requested.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl AbortSignal for AbortFlag {
    #[inline]
    fn is_aborted(&self) -> bool {
        AbortFlag::is_aborted(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_shared_between_clones() {
        let flag = AbortFlag::new();
        let other = flag.clone();
        other.abort();
        assert!(flag.is_aborted());
        flag.reset();
        assert!(!other.is_aborted());
    }

    #[test]
    fn test_atomic_bool_signal() {
        let raw = AtomicBool::new(false);
        assert!(!AbortSignal::is_aborted(&raw));
        raw.store(true, Ordering::Relaxed);
        assert!(AbortSignal::is_aborted(&raw));
    }

    #[test]
    fn test_closure_signal() {
        let signal = || true;
        assert!(signal.is_aborted());
        assert!(!NeverAbort.is_aborted());
    }

    #[test]
    fn test_flag_across_threads() {
        let flag = AbortFlag::new();
        let handle = flag.clone();
        std::thread::spawn(move || handle.abort()).join().unwrap();
        assert!(flag.is_aborted());
    }
}
