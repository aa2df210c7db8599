// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! `AGENCY_DESK_LOG` takes an `EnvFilter` directive (e.g. `agency_desk=trace`).
//! Without it, the level is `info`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "AGENCY_DESK_LOG";

/// Builds the filter used by [`init`].
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("agency_desk=debug,info")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Installs the global stderr subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "tracing initialized");
    }
}
