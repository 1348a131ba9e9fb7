//! Chain snapshot and library error types.
//!
//! # Examples
//!
//! ```
//! use catcher::Chain;
//!
//! let doubled = Chain::<i32, &str>::with(|| Ok(10))
//!     .apply(|x| Ok(x * 2))
//!     .get();
//!
//! assert_eq!(doubled, Ok(20));
//! ```
pub(crate) mod alloc_type;
pub mod catcher_error;
pub mod chain;

pub use catcher_error::*;
pub use chain::*;
