//! Process-wide configuration instance
//!
//! Code that cannot have a [`Config`] passed down reaches the shared one
//! through [`with_config`]. The instance is created on first access and lives
//! until [`replace`] or [`reset`] swaps it out, which is how tests get a
//! fresh configuration.
//!
//! The closure passed to [`with_config`] runs while the instance is locked;
//! calling back into this module from inside it deadlocks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Config, Result};

static INSTANCE: Mutex<Option<Config>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<Config>> {
    INSTANCE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` against the shared configuration, loading it from the process
/// environment on first access.
pub fn with_config<R>(f: impl FnOnce(&mut Config) -> R) -> Result<R> {
    with_config_or_else(Config::load, f)
}

/// Like [`with_config`], but builds a missing instance with `init`.
///
/// `init` only runs when no instance exists. If it fails, nothing is stored
/// and the error is returned.
pub fn with_config_or_else<R>(
    init: impl FnOnce() -> Result<Config>,
    f: impl FnOnce(&mut Config) -> R,
) -> Result<R> {
    let mut guard = lock();
    let config = match guard.take() {
        Some(config) => config,
        None => {
            tracing::debug!("Initializing shared configuration");
            init()?
        }
    };
    Ok(f(guard.insert(config)))
}

/// Swap in `config` (or clear with `None`), returning the previous instance.
pub fn replace(config: Option<Config>) -> Option<Config> {
    std::mem::replace(&mut *lock(), config)
}

/// Drop the shared instance; the next access recreates it.
pub fn reset() {
    replace(None);
}

/// Whether an instance currently exists.
pub fn is_initialized() -> bool {
    lock().is_some()
}
