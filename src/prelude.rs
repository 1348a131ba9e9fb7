//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use catcher::prelude::*;
//!
//! let total = "7".parse::<i32>()
//!     .into_chain()
//!     .apply(|n| Ok(n * 6))
//!     .or_else(0);
//!
//! assert_eq!(total, 42);
//!
//! let fallback = with(|| "seven".parse::<i32>()).or_else_with(|| -1);
//! assert_eq!(fallback, -1);
//! ```

// Facade
pub use crate::catch::{call, call_handled, run, with};

// Core types
pub use crate::types::{CatcherError, Chain, ErrorHandler};

// Traits
pub use crate::traits::IntoChain;
