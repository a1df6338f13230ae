//! The typed success/failure value and its construction rules.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::ErrorCode;
use crate::diagnostic::{BoxedDiagnostic, Chain, Diagnostic};

/// Message stored by every success.
pub(crate) const SUCCESS_MESSAGE: &str = "Success";

/// A success/failure record typed by a caller-defined error-code enumeration.
///
/// A verdict is either the one success of its enumeration `E` (code
/// [`ErrorCode::SUCCESS`], message `"Success"`, no inner error) or a failure
/// carrying a non-success code, a message, and optionally the failure that
/// caused it. Causes are captured by value: the chaining factories duplicate
/// the given record, so a verdict owns its whole chain and stays valid after
/// the original cause is gone.
///
/// Cloning a verdict deep-copies the chain. The clone and the original share
/// no state.
///
/// # Examples
///
/// ```
/// use verdict::{ErrorCode, Verdict};
///
/// #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
/// enum StoreCode {
///     Success = 0,
///     NotFound = 1000,
/// }
///
/// #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
/// enum QueryCode {
///     Success = 0,
///     Unanswerable = 2000,
/// }
///
/// let store = Verdict::failure(StoreCode::NotFound, "segment 12 not on disk");
/// let query = Verdict::failure_from(&store, QueryCode::Unanswerable, "cannot scan range");
/// drop(store);
///
/// assert!(query.failed());
/// assert_eq!(query.code(), QueryCode::Unanswerable);
/// let cause = query.inner().unwrap();
/// assert!(cause.is::<StoreCode>());
/// assert_eq!(cause.code_value(), 1000);
/// ```
#[derive(Debug, Clone)]
#[must_use = "a verdict reports success or failure and should be inspected"]
pub struct Verdict<E: ErrorCode> {
    code: E,
    message: Cow<'static, str>,
    inner: Option<BoxedDiagnostic>,
}

impl<E: ErrorCode> Verdict<E> {
    /// The success verdict of the enumeration `E`.
    pub fn success() -> Self {
        Self {
            code: E::SUCCESS,
            message: Cow::Borrowed(SUCCESS_MESSAGE),
            inner: None,
        }
    }

    /// A failure with the given code and message.
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`ErrorCode::SUCCESS`]. Constructing a failure
    /// with the success code is a programming error, not a reportable
    /// condition.
    #[track_caller]
    pub fn failure(code: E, message: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(code, message.into(), None)
    }

    /// A failure with the given code and a formatted message.
    ///
    /// Accepts the output of [`format_args!`], so the message renders without
    /// an intermediate allocation when the arguments are a plain literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{ErrorCode, Verdict};
    ///
    /// #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
    /// enum StoreCode {
    ///     Success = 0,
    ///     NotFound = 1000,
    /// }
    ///
    /// let verdict = Verdict::failure_format(
    ///     StoreCode::NotFound,
    ///     format_args!("segment {} not on disk", 12),
    /// );
    /// assert_eq!(verdict.message(), "segment 12 not on disk");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`ErrorCode::SUCCESS`].
    #[track_caller]
    pub fn failure_format(code: E, args: fmt::Arguments<'_>) -> Self {
        Self::fail_with(code, render(args), None)
    }

    /// A failure recording `cause` as its inner error.
    ///
    /// The cause is duplicated into the new verdict, concrete type and chain
    /// included. It may come from any error-code enumeration, not just `E`.
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`ErrorCode::SUCCESS`].
    #[track_caller]
    pub fn failure_from(
        cause: &dyn Diagnostic,
        code: E,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::fail_with(code, message.into(), Some(cause.clone_boxed()))
    }

    /// A failure recording `cause` as its inner error, with a formatted
    /// message.
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`ErrorCode::SUCCESS`].
    #[track_caller]
    pub fn failure_format_from(
        cause: &dyn Diagnostic,
        code: E,
        args: fmt::Arguments<'_>,
    ) -> Self {
        Self::fail_with(code, render(args), Some(cause.clone_boxed()))
    }

    #[track_caller]
    fn fail_with(code: E, message: Cow<'static, str>, inner: Option<BoxedDiagnostic>) -> Self {
        assert!(
            code != E::SUCCESS,
            "failure requires an error code other than {:?}",
            E::SUCCESS,
        );
        tracing::trace!(code = ?code, chained = inner.is_some(), "failure verdict recorded");
        Self {
            code,
            message,
            inner,
        }
    }

    /// Whether this verdict represents success.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.code == E::SUCCESS
    }

    /// Whether this verdict represents failure.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// The stored error code.
    #[must_use]
    pub fn code(&self) -> E {
        self.code
    }

    /// Integer projection of the stored code.
    #[must_use]
    pub fn code_value(&self) -> i32 {
        self.code.raw()
    }

    /// Runtime identity of the error-code enumeration `E`.
    #[must_use]
    pub fn code_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    /// Name of the error-code enumeration `E`, for logs and messages.
    #[must_use]
    pub fn code_type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    /// The stored message, verbatim.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The recorded inner error, if any.
    #[must_use]
    pub fn inner(&self) -> Option<&dyn Diagnostic> {
        self.inner.as_deref()
    }

    /// Iterates over this verdict and its transitive causes, outermost
    /// first.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Bridges into [`Result`], mapping success to `Ok(())` and failure to
    /// `Err` carrying the verdict.
    ///
    /// # Errors
    ///
    /// Returns `Err` with `self` when this verdict represents failure.
    pub fn into_result(self) -> Result<(), Self> {
        if self.succeeded() { Ok(()) } else { Err(self) }
    }
}

impl<E: ErrorCode> Diagnostic for Verdict<E> {
    fn succeeded(&self) -> bool {
        self.code == E::SUCCESS
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn inner(&self) -> Option<&dyn Diagnostic> {
        self.inner.as_deref()
    }

    fn code_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    fn code_type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    fn code_value(&self) -> i32 {
        self.code.raw()
    }

    fn clone_boxed(&self) -> BoxedDiagnostic {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<E: ErrorCode> fmt::Display for Verdict<E> {
    /// Writes the message; the alternate form (`{:#}`) appends the messages
    /// of the cause chain, separated by `: `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() {
            let mut link = self.inner();
            while let Some(cause) = link {
                write!(f, ": {}", cause.message())?;
                link = cause.inner();
            }
        }
        Ok(())
    }
}

impl<E: ErrorCode> Error for Verdict<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause = self.inner.as_deref()?;
        Some(cause)
    }
}

fn render(args: fmt::Arguments<'_>) -> Cow<'static, str> {
    // Argument-free patterns borrow the literal instead of allocating.
    match args.as_str() {
        Some(literal) => Cow::Borrowed(literal),
        None => Cow::Owned(fmt::format(args)),
    }
}

#[cfg(test)]
mod tests;
