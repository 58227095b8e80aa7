//! Helpers for changing the process-wide name separator in tests.
//!
//! The separator read by `BindOptions::default()` is process-global state,
//! so tests that change it must not interleave. [`set`] acquires a global
//! mutex, installs the new separator, and returns a guard that restores the
//! previous value and releases the mutex when dropped.
//!
//! # Examples
//!
//! ```
//! use flagbind_test_helpers::separator;
//!
//! let guard = separator::set("_");
//! assert_eq!(flagbind::separator(), "_");
//! drop(guard);
//! ```

use std::sync::LazyLock;

use parking_lot::{Mutex, MutexGuard};

static SEPARATOR_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard that restores the previous separator on drop.
#[must_use = "dropping restores the prior separator"]
pub struct SeparatorGuard {
    original: String,
    _lock: MutexGuard<'static, ()>,
}

impl SeparatorGuard {
    /// Separator that will be restored.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }
}

impl Drop for SeparatorGuard {
    fn drop(&mut self) {
        flagbind::set_separator(std::mem::take(&mut self.original));
    }
}

/// Installs `sep` as the process-wide separator until the guard is dropped.
pub fn set(sep: &str) -> SeparatorGuard {
    let lock = SEPARATOR_MUTEX.lock();
    let original = flagbind::separator();
    flagbind::set_separator(sep.to_owned());
    SeparatorGuard {
        original,
        _lock: lock,
    }
}

/// Holds the separator mutex without changing the value, for tests that
/// rely on the default separator while others may change it.
pub fn lock() -> SeparatorGuard {
    let lock = SEPARATOR_MUTEX.lock();
    SeparatorGuard {
        original: flagbind::separator(),
        _lock: lock,
    }
}
