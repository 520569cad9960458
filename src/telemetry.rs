//! Tracing subscriber bootstrap for binaries and tests embedding mediaref.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "mediaref=info,mediaref_router=info,mediaref_ids=warn";

/// Filter used in verbose mode when `RUST_LOG` is unset.
pub const VERBOSE_FILTER: &str = "mediaref=debug,mediaref_router=trace,mediaref_ids=trace";

/// The filter directives to install: `RUST_LOG` if set, else a default.
pub fn filter_directives(verbose: bool) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            VERBOSE_FILTER.to_string()
        } else {
            DEFAULT_FILTER.to_string()
        }
    })
}

/// Install a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already set; calling this more
/// than once is harmless.
pub fn init_tracing(verbose: bool) -> bool {
    let env_filter = filter_directives(verbose);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter.as_str())
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(filter = %env_filter, "tracing initialized");
    }
    installed
}
