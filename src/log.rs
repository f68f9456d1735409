//! Fold-step logging for `merge_all`.
//!
//! Each accepted merge is reported at debug level with the step index, the
//! axis, and the accumulated rectangle; the step that stops the fold is
//! reported at warn level. Build with the `tracing` feature to route these
//! through `tracing`. Without it, `debug!` and `warn!` compile to nothing
//! and their arguments are never evaluated.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
