//! Conditional logging macros.
//!
//! With the `tracing` feature this is the `tracing` macro; without it the
//! macro expands to nothing.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
