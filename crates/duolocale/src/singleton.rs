//! A process-wide applier behind free functions.
//!
//! Hosts that want the constructed [`LocaleApplier`] to be reachable from
//! anywhere install it once with [`init`] and call the free functions
//! afterwards. The explicitly constructed applier remains the primary API;
//! this module only parks one instance behind a lock.

use std::sync::{Arc, OnceLock, RwLock};

use tracing::{error, warn};

use crate::applier::LocaleApplier;
use crate::locale::Locale;

static APPLIER: OnceLock<Arc<RwLock<LocaleApplier>>> = OnceLock::new();

/// Installs the process-wide applier.
///
/// This function should be called once at the beginning of your
/// application's lifecycle. Later calls are ignored and keep the first
/// applier.
pub fn init(applier: LocaleApplier) {
    if APPLIER.set(Arc::new(RwLock::new(applier))).is_err() {
        warn!("Locale applier already initialized.");
    }
}

/// Resolves the effective locale on the process-wide applier.
///
/// Returns [`Locale::default`] when [`init`] has not run.
pub fn effective_locale() -> Locale {
    if let Some(applier_arc) = APPLIER.get() {
        let applier = applier_arc.read().expect("lock poisoned");
        applier.effective_locale()
    } else {
        error!("Locale applier not initialized. Call init() first.");
        Locale::default()
    }
}

/// Applies `locale` on the process-wide applier.
pub fn apply(locale: Locale) {
    if let Some(applier_arc) = APPLIER.get() {
        let mut applier = applier_arc.write().expect("lock poisoned");
        applier.apply(locale);
    } else {
        error!("Locale applier not initialized. Call init() first.");
    }
}

/// Toggles the process-wide applier and returns the new locale.
///
/// Returns [`Locale::default`] when [`init`] has not run.
pub fn toggle() -> Locale {
    if let Some(applier_arc) = APPLIER.get() {
        let mut applier = applier_arc.write().expect("lock poisoned");
        applier.toggle()
    } else {
        error!("Locale applier not initialized. Call init() first.");
        Locale::default()
    }
}
