#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature the usual macros are re-exported from
//! [`tracing`]. Without it they expand to nothing, so call sites stay free of
//! `#[cfg]` noise and the wasm bundle carries no logging code.
//!
//! The `tracing-json` feature adds [`init_json_subscriber`] for hosts that
//! want newline-delimited JSON records (native harnesses, CI replays).

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

// Only the levels core actually emits get a no-op twin. A `macro_rules!`
// named `warn` would clash with the built-in `#[warn]` lint attribute.
#[cfg(not(feature = "tracing"))]
mod noop {
    macro_rules! noop_debug {
        ($($arg:tt)*) => {};
    }
    macro_rules! noop_trace {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {noop_debug as debug, noop_trace as trace};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace};

/// Install a global JSON subscriber filtered by `filter` (`RUST_LOG` syntax).
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber(filter: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::{debug, trace};

    // Built by plain `cargo test -p folio-core`, which leaves `tracing` off,
    // and by `--features tracing`. Both spellings must accept the field
    // syntax the tracker and router use.
    #[test]
    fn macros_accept_structured_fields() {
        let id = "skills";
        let scroll = 740.0_f64;
        debug!(from = %id, to = %id, trigger = "click", "active section changed");
        trace!(scroll, probe = scroll + 65.0, active = %id, "recomputed active section");
        debug!(target_id = id, "navigated to section");
        let _ = (id, scroll);
    }
}
