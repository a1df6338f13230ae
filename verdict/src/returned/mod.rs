//! Payload-carrying verdicts and the four payload ownership policies.
//!
//! [`Returned`] pairs a [`Verdict`] with a success payload. The storage type
//! chosen for the payload is the ownership policy, and one alias per policy
//! names the conventional choices:
//!
//! * [`ValueReturn`] stores `T` and snapshots the payload at construction.
//! * [`RefReturn`] stores `&T` and aliases data the caller keeps owning.
//! * [`BoxedReturn`] stores [`Exclusive<T>`] and transfers ownership; the
//!   carrier cannot be cloned.
//! * [`SharedReturn`] stores [`Arc<T>`] and shares ownership; clones alias
//!   the same payload.
//!
//! Copy semantics follow from the storage type: cloning a carrier deep-copies
//! the verdict chain and clones the storage, so a [`ValueReturn`] clone gets
//! an independent payload, a [`SharedReturn`] clone gets another handle on
//! the same payload, and a [`BoxedReturn`] does not clone at all.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::diagnostic::{Chain, Diagnostic};
use crate::{ErrorCode, Verdict};

/// Success payload snapshotted by value at construction.
pub type ValueReturn<E, T> = Returned<E, T>;

/// Success payload borrowed from data the caller keeps owning.
///
/// The carrier observes later changes to the referent rather than freezing a
/// copy, and it cannot outlive the referent.
pub type RefReturn<'a, E, T> = Returned<E, &'a T>;

/// Success payload under transferred, exclusive ownership.
///
/// The carrier is move-only. Cloning it is rejected at compile time:
///
/// ```compile_fail
/// use verdict::{BoxedReturn, ErrorCode};
///
/// #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
/// enum StoreCode {
///     Success = 0,
///     NotFound = 1000,
/// }
///
/// let carrier = BoxedReturn::<StoreCode, String>::success_value("payload".into());
/// let copy = carrier.clone();
/// ```
pub type BoxedReturn<E, T> = Returned<E, Exclusive<T>>;

/// Success payload under shared ownership.
///
/// Clones alias the same payload; a change made through one handle is
/// visible through all of them.
pub type SharedReturn<E, T> = Returned<E, Arc<T>>;

/// A verdict that also carries a success payload in storage `S`.
///
/// Successes always hold a payload and failures never do, so payload access
/// on a success cannot fail and payload access on a failure panics. Use
/// [`try_payload`](Self::try_payload) or [`into_result`](Self::into_result)
/// where failure is expected.
///
/// # Examples
///
/// ```
/// use verdict::{ErrorCode, ValueReturn};
///
/// #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
/// enum StoreCode {
///     Success = 0,
///     NotFound = 1000,
/// }
///
/// fn read_block(id: u32) -> ValueReturn<StoreCode, Vec<u8>> {
///     if id == 0 {
///         return ValueReturn::failure_format(StoreCode::NotFound, format_args!("no block {id}"));
///     }
///     ValueReturn::success(vec![0x42; 16])
/// }
///
/// let found = read_block(7);
/// assert!(found.succeeded());
/// assert_eq!(found.payload().len(), 16);
///
/// let missing = read_block(0);
/// assert!(missing.failed());
/// assert!(missing.try_payload().is_none());
/// ```
#[derive(Debug, Clone)]
#[must_use = "a verdict reports success or failure and should be inspected"]
pub struct Returned<E: ErrorCode, S> {
    verdict: Verdict<E>,
    payload: Option<S>,
}

impl<E: ErrorCode, S> Returned<E, S> {
    /// A success carrying `payload`.
    pub fn success(payload: S) -> Self {
        Self {
            verdict: Verdict::success(),
            payload: Some(payload),
        }
    }

    /// A failure with the given code and message, carrying no payload.
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`ErrorCode::SUCCESS`].
    #[track_caller]
    pub fn failure(code: E, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            verdict: Verdict::failure(code, message),
            payload: None,
        }
    }

    /// A failure with a formatted message, carrying no payload.
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`ErrorCode::SUCCESS`].
    #[track_caller]
    pub fn failure_format(code: E, args: fmt::Arguments<'_>) -> Self {
        Self {
            verdict: Verdict::failure_format(code, args),
            payload: None,
        }
    }

    /// A failure recording `cause` as its inner error, carrying no payload.
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
        Self {
            verdict: Verdict::failure_from(cause, code, message),
            payload: None,
        }
    }

    /// A failure recording `cause` as its inner error, with a formatted
    /// message and no payload.
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
        Self {
            verdict: Verdict::failure_format_from(cause, code, args),
            payload: None,
        }
    }

    /// Whether this verdict represents success.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.verdict.succeeded()
    }

    /// Whether this verdict represents failure.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.verdict.failed()
    }

    /// The stored error code.
    #[must_use]
    pub fn code(&self) -> E {
        self.verdict.code()
    }

    /// Integer projection of the stored code.
    #[must_use]
    pub fn code_value(&self) -> i32 {
        self.verdict.code_value()
    }

    /// The stored message, verbatim.
    #[must_use]
    pub fn message(&self) -> &str {
        self.verdict.message()
    }

    /// The recorded inner error, if any.
    #[must_use]
    pub fn inner(&self) -> Option<&dyn Diagnostic> {
        self.verdict.inner()
    }

    /// Iterates over this verdict and its transitive causes, outermost
    /// first.
    pub fn chain(&self) -> Chain<'_> {
        self.verdict.chain()
    }

    /// The payload-less verdict underneath this carrier.
    ///
    /// Dropping down to [`Verdict`] is how a carrier participates in cause
    /// chains and erased [`Diagnostic`] handling.
    #[must_use]
    pub fn as_verdict(&self) -> &Verdict<E> {
        &self.verdict
    }

    /// Discards the payload and keeps the verdict.
    pub fn into_verdict(self) -> Verdict<E> {
        self.verdict
    }

    /// Borrows the payload.
    ///
    /// # Panics
    ///
    /// Panics if this verdict represents failure.
    #[must_use]
    #[track_caller]
    pub fn payload(&self) -> &S {
        match &self.payload {
            Some(payload) => payload,
            None => panic!("payload accessed on a failed verdict: {}", self.verdict.message()),
        }
    }

    /// Mutably borrows the payload.
    ///
    /// # Panics
    ///
    /// Panics if this verdict represents failure.
    #[must_use]
    #[track_caller]
    pub fn payload_mut(&mut self) -> &mut S {
        match &mut self.payload {
            Some(payload) => payload,
            None => panic!("payload accessed on a failed verdict: {}", self.verdict.message()),
        }
    }

    /// Takes the payload, consuming the carrier.
    ///
    /// # Panics
    ///
    /// Panics if this verdict represents failure.
    #[must_use]
    #[track_caller]
    pub fn into_payload(self) -> S {
        match self.payload {
            Some(payload) => payload,
            None => panic!("payload accessed on a failed verdict: {}", self.verdict.message()),
        }
    }

    /// Borrows the payload, or `None` on failure.
    #[must_use]
    pub fn try_payload(&self) -> Option<&S> {
        self.payload.as_ref()
    }

    /// Bridges into [`Result`], mapping success to `Ok` carrying the payload
    /// and failure to `Err` carrying the payload-less verdict.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the underlying [`Verdict`] when this verdict
    /// represents failure.
    pub fn into_result(self) -> Result<S, Verdict<E>> {
        match self.payload {
            Some(payload) => Ok(payload),
            None => Err(self.verdict),
        }
    }
}

impl<E: ErrorCode, T> Returned<E, Exclusive<T>> {
    /// A success taking exclusive ownership of `value`.
    pub fn success_value(value: T) -> Self {
        Self::success(Exclusive::new(value))
    }
}

impl<E: ErrorCode, T> Returned<E, Arc<T>> {
    /// A success wrapping `value` in fresh shared ownership.
    ///
    /// Use [`success`](Self::success) with an existing [`Arc`] to alias a
    /// payload the caller also keeps a handle on.
    pub fn success_value(value: T) -> Self {
        Self::success(Arc::new(value))
    }
}

impl<E: ErrorCode, S> fmt::Display for Returned<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.verdict, f)
    }
}

/// Exclusively owned payload storage.
///
/// The storage behind [`BoxedReturn`]. It deliberately does not implement
/// [`Clone`], which keeps the whole carrier move-only. Access the payload
/// through [`Deref`] or take it back with [`into_inner`](Self::into_inner).
#[derive(Debug)]
pub struct Exclusive<T>(Box<T>);

impl<T> Exclusive<T> {
    /// Takes exclusive ownership of `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Returns the owned value.
    #[must_use]
    pub fn into_inner(self) -> T {
        *self.0
    }

    /// Returns the owning box.
    #[must_use]
    pub fn into_box(self) -> Box<T> {
        self.0
    }
}

impl<T> From<T> for Exclusive<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Box<T>> for Exclusive<T> {
    fn from(boxed: Box<T>) -> Self {
        Self(boxed)
    }
}

impl<T> Deref for Exclusive<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Exclusive<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
