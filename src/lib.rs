//! Turn fallible computations into values and thread them through a chain of
//! fallible steps.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `catcher::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## One-Shot Fallback
//!
//! ```
//! let timeout = catcher::call(|| "30s".parse::<u64>(), |_| 10);
//! assert_eq!(timeout, 10);
//! ```
//!
//! ## Chain With a Handler
//!
//! ```
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//! let port = catcher::with(|| Ok::<_, String>("8080"))
//!     .handle(|e| log.borrow_mut().push(e))
//!     .apply(|s| s.parse::<u16>().map_err(|e| e.to_string()))
//!     .apply(|p| if p < 1024 { Err(format!("privileged port {p}")) } else { Ok(p) })
//!     .or_else(80);
//!
//! assert_eq!(port, 8080);
//! assert!(log.borrow().is_empty());
//! ```
//!
//! ## Deferred Error
//!
//! ```
//! use catcher::CatcherError;
//!
//! let chain = catcher::with(|| Ok::<_, &str>(5))
//!     .apply(|_| Err::<i32, _>("step failed"))
//!     .apply(|y| Ok(y + 1));
//!
//! assert_eq!(chain.deferred_error(), Some(&"step failed"));
//! assert_eq!(chain.get(), Err(CatcherError::EmptyChain));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

/// One-shot `call`/`run` helpers and the `with` chain factory
pub mod catch;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for starting chains
pub mod traits;
/// Chain snapshot and library error types
pub mod types;

pub use catch::{call, call_handled, run, with};
pub use traits::*;
pub use types::{CatcherError, Chain, ErrorHandler};
