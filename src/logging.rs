//! Tracing subscriber setup.
//!
//! On Android, events go to logcat tagged with the crate name. Elsewhere they
//! are formatted to stderr. `log` records (the `jni` crate logs through `log`)
//! are forwarded into the same subscriber.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_ENV_FILTER: &str = "info";

/// Installs the global subscriber. Safe to call more than once; if another
/// subscriber is already installed this does nothing.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::new(DEFAULT_ENV_FILTER);

        cfg_if::cfg_if! {
            if #[cfg(target_os = "android")] {
                use tracing_subscriber::prelude::*;

                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(paranoid_android::layer(env!("CARGO_PKG_NAME")))
                    .try_init();
            } else {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
        }
    });
}
