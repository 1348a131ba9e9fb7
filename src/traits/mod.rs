//! Extension traits.
//!
//! - [`IntoChain`]: start a [`Chain`](crate::Chain) from a `Result`

pub mod into_chain;

pub use into_chain::IntoChain;
