//! Extension trait for starting a [`Chain`] from an existing `Result`.
//!
//! # Examples
//!
//! ```
//! use catcher::traits::IntoChain;
//!
//! let parsed: Result<i32, std::num::ParseIntError> = "21".parse();
//! let doubled = parsed.into_chain().apply(|n| Ok(n * 2)).get();
//!
//! assert_eq!(doubled, Ok(42));
//! ```

use crate::types::Chain;

/// Conversion of an already computed outcome into the first chain snapshot.
///
/// Equivalent to [`Chain::from_result`]; provided so that a chain can be
/// started at the end of an ordinary `Result` expression.
pub trait IntoChain<'a, T, E> {
    /// Wraps `self` as a chain: `Ok` becomes the value, `Err` the deferred error.
    fn into_chain(self) -> Chain<'a, T, E>;
}

impl<'a, T, E> IntoChain<'a, T, E> for Result<T, E> {
    #[inline]
    fn into_chain(self) -> Chain<'a, T, E> {
        Chain::from_result(self)
    }
}
