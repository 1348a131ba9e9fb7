//! Internal logging helpers.
//!
//! Every chain transition reports through [`chain_event!`]. With the
//! `tracing` feature the event is forwarded to the matching `tracing`
//! macro under the `catcher` target; without it the call expands to nothing.

/// Emits a `tracing` event at the given level when the `tracing` feature is on.
///
/// Must be used in statement position.
macro_rules! chain_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!(target: "catcher", $($arg)+);
        }
    };
}
