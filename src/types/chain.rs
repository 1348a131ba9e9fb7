use core::fmt;

use crate::types::alloc_type::Box;
use crate::types::CatcherError;

/// Side-effect callback invoked with an error captured by a chain step.
///
/// A handler fires at most once: either immediately, when attached to a
/// chain that already carries a deferred error, or on the next failing
/// [`apply`](Chain::apply) step.
pub type ErrorHandler<'a, E> = Box<dyn FnOnce(E) + 'a>;

/// An immutable snapshot of a staged computation.
///
/// A chain holds three independent parts:
///
/// - the current value, present while the last step succeeded,
/// - a pending [`ErrorHandler`] waiting for the next failure,
/// - a deferred error, captured by a step that failed with no handler attached.
///
/// Every operation consumes the snapshot and returns a new one. Building a
/// chain never surfaces the errors of its steps; only the terminal accessors
/// ([`get`](Chain::get), [`or_else_throw`](Chain::or_else_throw)) can fail.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the captured environment of the pending handler
/// * `T` - The current value type
/// * `E` - The error type shared by every step of the chain
///
/// # Examples
///
/// ```
/// use catcher::Chain;
///
/// let chain = Chain::<i32, &str>::with(|| Ok(5))
///     .apply(|_| Err::<i32, _>("bad step"))
///     .apply(|y| Ok(y + 1));
///
/// assert!(chain.is_empty());
/// assert_eq!(chain.deferred_error(), Some(&"bad step"));
/// ```
#[must_use]
pub struct Chain<'a, T, E> {
    value: Option<T>,
    handler: Option<ErrorHandler<'a, E>>,
    error: Option<E>,
}

impl<'a, T, E> Chain<'a, T, E> {
    /// Assembles a snapshot from its three parts.
    ///
    /// The parts are independent: nothing stops a caller from pairing a
    /// value with a deferred error, or a pending handler with a deferred
    /// error. The transition rules of [`apply`](Chain::apply) and
    /// [`handle`](Chain::handle) apply to such snapshots unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use catcher::Chain;
    ///
    /// let chain: Chain<i32, &str> = Chain::from_parts(Some(1), None, None);
    /// assert_eq!(chain.get(), Ok(1));
    /// ```
    #[inline]
    pub fn from_parts(
        value: Option<T>,
        handler: Option<ErrorHandler<'a, E>>,
        error: Option<E>,
    ) -> Self {
        Self { value, handler, error }
    }

    /// The fully resolved state: no value, no handler, no deferred error.
    #[inline]
    fn cleared() -> Self {
        Self::from_parts(None, None, None)
    }

    /// Runs `supplier` once and captures its outcome as the first snapshot.
    ///
    /// On `Ok` the chain holds the value. On `Err` the chain is empty and the
    /// error is deferred until a [`handle`](Chain::handle) call or a terminal
    /// inspection.
    ///
    /// # Examples
    ///
    /// ```
    /// use catcher::Chain;
    ///
    /// let ok = Chain::<_, &str>::with(|| Ok("value"));
    /// assert!(ok.is_present());
    ///
    /// let failed = Chain::<&str, _>::with(|| Err("boom"));
    /// assert!(failed.is_empty());
    /// ```
    #[inline]
    pub fn with<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        Self::from_result(supplier())
    }

    /// Builds the first snapshot from an already computed `Result`.
    ///
    /// Follows the same rules as [`with`](Chain::with).
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_parts(Some(value), None, None),
            Err(error) => {
                chain_event!(debug, "initial computation failed; error deferred");
                Self::from_parts(None, None, Some(error))
            },
        }
    }

    /// Threads the current value through a fallible step.
    ///
    /// - Empty chain: `step` is not invoked. The pending handler and the
    ///   deferred error are both carried forward unchanged.
    /// - Step succeeds: the result becomes the new value and the pending
    ///   handler is kept.
    /// - Step fails with a handler attached: the handler is invoked with the
    ///   error and the returned chain is fully cleared.
    /// - Step fails with no handler: the returned chain is empty and defers
    ///   the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use catcher::Chain;
    ///
    /// let len = Chain::<_, &str>::with(|| Ok("four"))
    ///     .apply(|s| Ok(s.len()))
    ///     .get();
    ///
    /// assert_eq!(len, Ok(4));
    /// ```
    pub fn apply<U, F>(self, step: F) -> Chain<'a, U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let Chain { value, handler, error } = self;

        let Some(value) = value else {
            chain_event!(trace, "apply on empty chain; step skipped");
            return Chain::from_parts(None, handler, error);
        };

        match step(value) {
            Ok(next) => Chain::from_parts(Some(next), handler, None),
            Err(failure) => match handler {
                Some(handler) => {
                    chain_event!(debug, "step failed; pending handler invoked");
                    handler(failure);
                    Chain::cleared()
                },
                None => {
                    chain_event!(debug, "step failed; error deferred");
                    Chain::from_parts(None, None, Some(failure))
                },
            },
        }
    }

    /// Attaches an error handler, or discharges the deferred error into it.
    ///
    /// If the chain carries a deferred error, `handler` is invoked with it
    /// right away and the returned chain is fully cleared. Otherwise the
    /// value is kept and `handler` replaces any previously attached handler,
    /// which is dropped without being called.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use catcher::Chain;
    ///
    /// let seen = Cell::new(None);
    /// let chain = Chain::<i32, _>::with(|| Err("boom"))
    ///     .handle(|e| seen.set(Some(e)));
    ///
    /// assert!(chain.is_empty());
    /// assert_eq!(seen.get(), Some("boom"));
    /// ```
    pub fn handle<H>(self, handler: H) -> Self
    where
        H: FnOnce(E) + 'a,
    {
        let Chain { value, handler: _replaced, error } = self;

        match error {
            Some(error) => {
                chain_event!(debug, "handler attached to failed chain; invoked immediately");
                handler(error);
                Self::cleared()
            },
            None => Self::from_parts(value, Some(Box::new(handler)), None),
        }
    }

    /// Returns `true` if the chain holds no value.
    ///
    /// Covers both a deferred error and a handled, fully cleared chain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if the chain holds a value.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Borrows the current value, if any.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts the chain into its current value, if any.
    ///
    /// The pending handler and the deferred error are dropped.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Returns the error deferred by a failed step, if any.
    #[inline]
    pub fn deferred_error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Returns `true` if a handler is waiting for the next failure.
    #[inline]
    pub fn has_pending_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Extracts the current value.
    ///
    /// # Errors
    ///
    /// Returns [`CatcherError::EmptyChain`] when there is no value. A
    /// deferred error is not reported through this error; it is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use catcher::{CatcherError, Chain};
    ///
    /// let chain = Chain::<i32, &str>::with(|| Ok(5))
    ///     .apply(|_| Err::<i32, _>("bad"))
    ///     .apply(|y| Ok(y + 1));
    ///
    /// assert_eq!(chain.get(), Err(CatcherError::EmptyChain));
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, CatcherError> {
        self.value.ok_or(CatcherError::EmptyChain)
    }

    /// Returns the current value, or `alternative` when the chain is empty.
    #[inline]
    pub fn or_else(self, alternative: T) -> T {
        self.value.unwrap_or(alternative)
    }

    /// Returns the current value, or the result of `supplier` when the chain
    /// is empty. `supplier` is not called when a value is present.
    #[inline]
    pub fn or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// Always fails with the error produced by `supplier`.
    ///
    /// The supplier is called whether or not a value is present, and a
    /// present value is dropped. Use [`get`](Chain::get) or
    /// [`as_option`](Chain::as_option) to branch on presence.
    ///
    /// # Errors
    ///
    /// Always returns `Err(supplier())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use catcher::Chain;
    ///
    /// let chain = Chain::<i32, &str>::with(|| Ok(1));
    /// assert_eq!(chain.or_else_throw(|| "always"), Err("always"));
    /// ```
    pub fn or_else_throw<X, F>(self, supplier: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        if self.value.is_some() {
            chain_event!(warn, "or_else_throw called on a chain holding a value; value dropped");
        }
        Err(supplier())
    }
}

impl<'a, T, E> From<Result<T, E>> for Chain<'a, T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> fmt::Debug for Chain<'_, T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("value", &self.value)
            .field("pending_handler", &self.handler.is_some())
            .field("deferred_error", &self.error)
            .finish()
    }
}
