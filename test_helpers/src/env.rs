//! Helpers for safely mutating environment variables in tests.
//!
//! Every mutation happens under a global re-entrant mutex and returns an
//! RAII guard that restores the previous value (or removes the variable)
//! when dropped. Tests that touch several related keys, such as the home
//! directory variables, should hold an [`EnvScope`] so no other test can
//! interleave.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _scope = env::EnvScope::new_with(|lock| {
//!     vec![lock.remove_var("HOMEPATH"), lock.set_var("HOME", "/home/tester")]
//! });
//! assert_eq!(std::env::var("HOME").as_deref(), Ok("/home/tester"));
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            Some(value) => unsafe { std::env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}

/// Holds the global environment lock for its lifetime.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets `key` while the lock is held.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        let key = key.into();
        let original = std::env::var_os(&key);
        // SAFETY: the caller holds `ENV_MUTEX` through `self`.
        unsafe { std::env::set_var(&key, value.as_ref()) };
        EnvVarGuard { key, original }
    }

    /// Removes `key` while the lock is held.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        let key = key.into();
        let original = std::env::var_os(&key);
        // SAFETY: the caller holds `ENV_MUTEX` through `self`.
        unsafe { std::env::remove_var(&key) };
        EnvVarGuard { key, original }
    }
}

/// Holds the environment lock together with the guards created under it.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl EnvScope {
    /// Runs `builder` under the lock and keeps both for the scope's lifetime.
    pub fn new_with<F>(builder: F) -> Self
    where
        F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
    {
        let lock = lock();
        let guards = builder(&lock);
        Self {
            guards,
            _lock: lock,
        }
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        // Restore newest first while the lock is still held.
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Acquires the global environment lock.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
/// ```
/// use test_helpers::env;
/// let _g = env::set_var("CONFIG_FINDER_DOC", "bar");
/// assert_eq!(std::env::var("CONFIG_FINDER_DOC").as_deref(), Ok("bar"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes an environment variable and returns a guard restoring its prior value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    lock().remove_var(key)
}
