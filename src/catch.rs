//! One-shot entry points.
//!
//! These functions run a single fallible computation and resolve it on the
//! spot, or start a [`Chain`] for a longer pipeline. They are re-exported at
//! the crate root, so `catcher::call(..)` and `catcher::with(..)` read as
//! intended.
//!
//! Every handler and fallback parameter is a required, non-optional generic,
//! so a missing argument is rejected at compile time before any computation
//! runs.
//!
//! # Examples
//!
//! ```
//! let port = catcher::call(|| "80a".parse::<u16>(), |_| 8080);
//! assert_eq!(port, 8080);
//! ```

use crate::types::Chain;

/// Runs `supplier`; on failure returns `fallback` applied to the error.
///
/// # Examples
///
/// ```
/// let n = catcher::call(|| Err::<usize, _>("missing"), |e: &str| e.len());
/// assert_eq!(n, 7);
/// ```
#[inline]
pub fn call<R, E, S, F>(supplier: S, fallback: F) -> R
where
    S: FnOnce() -> Result<R, E>,
    F: FnOnce(E) -> R,
{
    supplier().unwrap_or_else(|error| {
        chain_event!(debug, "call failed; fallback applied");
        fallback(error)
    })
}

/// Runs `supplier`; on failure passes the error to `handler`, then returns
/// the result of `fallback`.
///
/// Neither `handler` nor `fallback` is invoked when `supplier` succeeds.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let name = catcher::call_handled(
///     || Err::<String, _>("no such user"),
///     |e| log.borrow_mut().push(e),
///     || "anonymous".to_string(),
/// );
///
/// assert_eq!(name, "anonymous");
/// assert_eq!(log.into_inner(), vec!["no such user"]);
/// ```
#[inline]
pub fn call_handled<R, E, S, H, F>(supplier: S, handler: H, fallback: F) -> R
where
    S: FnOnce() -> Result<R, E>,
    H: FnOnce(E),
    F: FnOnce() -> R,
{
    match supplier() {
        Ok(value) => value,
        Err(error) => {
            chain_event!(debug, "call failed; handler invoked before fallback");
            handler(error);
            fallback()
        },
    }
}

/// Runs `action`; on failure passes the error to `handler`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
///
/// let failures = Cell::new(0);
/// catcher::run(|| Err("disk full"), |_: &str| failures.set(failures.get() + 1));
/// catcher::run(|| Ok::<(), &str>(()), |_| failures.set(failures.get() + 1));
///
/// assert_eq!(failures.get(), 1);
/// ```
#[inline]
pub fn run<E, A, H>(action: A, handler: H)
where
    A: FnOnce() -> Result<(), E>,
    H: FnOnce(E),
{
    if let Err(error) = action() {
        chain_event!(debug, "action failed; handler invoked");
        handler(error);
    }
}

/// Starts a [`Chain`] from a fallible computation.
///
/// `supplier` is invoked exactly once. See [`Chain::with`].
///
/// # Examples
///
/// ```
/// let doubled = catcher::with(|| Ok::<_, &str>(10))
///     .apply(|x| Ok(x * 2))
///     .get();
///
/// assert_eq!(doubled, Ok(20));
/// ```
#[inline]
pub fn with<'a, T, E, S>(supplier: S) -> Chain<'a, T, E>
where
    S: FnOnce() -> Result<T, E>,
{
    Chain::with(supplier)
}
