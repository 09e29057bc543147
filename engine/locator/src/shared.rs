//! Process-wide locator instance with an explicit lifecycle.
//!
//! Prefer passing a [`LocatorService`] by reference. Hosts that cannot thread
//! one through every collaborator install a single instance here at startup
//! and uninstall it at shutdown or between tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::LocatorService;

/// Global locator slot
static SHARED: Mutex<Option<LocatorService>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<LocatorService>> {
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Install `service`, returning the one it replaces.
pub fn install(service: LocatorService) -> Option<LocatorService> { slot().replace(service) }

/// Remove and return the installed service.
pub fn uninstall() -> Option<LocatorService> { slot().take() }

/// Whether a service is installed.
pub fn is_installed() -> bool { slot().is_some() }

/// Run `f` against the installed service.
///
/// Returns `None` when nothing is installed. `f` must not call back into
/// this module.
pub fn with<R>(f: impl FnOnce(&LocatorService) -> R) -> Option<R> { slot().as_ref().map(f) }

/// Run `f` against the installed service mutably.
pub fn with_mut<R>(f: impl FnOnce(&mut LocatorService) -> R) -> Option<R> { slot().as_mut().map(f) }
