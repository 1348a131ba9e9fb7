use core::fmt::{self, Display};

/// Failures raised by the library itself, as opposed to errors produced by
/// caller-supplied computations.
///
/// Errors coming out of user closures never take this shape: they are either
/// handed to a handler or carried by the [`Chain`](crate::Chain) as a deferred
/// error.
///
/// # Examples
///
/// ```
/// use catcher::{CatcherError, Chain};
///
/// let chain: Chain<i32, &str> = Chain::from_result(Err("lost"));
/// assert_eq!(chain.get(), Err(CatcherError::EmptyChain));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CatcherError {
    /// A value was requested from a chain that holds none.
    ///
    /// Any deferred error the chain carried is dropped, not attached here.
    EmptyChain,
}

impl Display for CatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatcherError::EmptyChain => f.write_str("get attempted on an empty chain"),
        }
    }
}

impl core::error::Error for CatcherError {}
