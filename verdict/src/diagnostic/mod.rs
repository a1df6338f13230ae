//! Type-erased view of verdicts, used for heterogeneous cause chains.
//!
//! A failure in one subsystem is often wrapped by a failure in another, and
//! the two subsystems rarely share an error-code enumeration. [`Diagnostic`]
//! erases the enumeration so that any verdict can record any other as its
//! cause, while `downcast_ref` recovers the concrete type when a consumer
//! knows what to look for.

use std::any::{Any, TypeId};
use std::error::Error;
use std::iter::FusedIterator;

use crate::{ErrorCode, Verdict};

mod sealed {
    /// Restricts [`Diagnostic`](super::Diagnostic) implementations to this
    /// crate.
    pub trait Sealed {}
}

impl<E: ErrorCode> sealed::Sealed for Verdict<E> {}

/// A success/failure record with its error-code enumeration erased.
///
/// Every [`Verdict`] implements this trait. Erased records still expose their
/// status, message, cause link, and the runtime identity of the enumeration
/// they were built from, so generic code can log or walk a chain without
/// knowing the concrete types involved.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Diagnostic: Error + Send + Sync + sealed::Sealed + 'static {
    /// Whether this record represents success.
    #[must_use]
    fn succeeded(&self) -> bool;

    /// Whether this record represents failure.
    #[must_use]
    fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// The stored message, verbatim.
    #[must_use]
    fn message(&self) -> &str;

    /// The recorded inner error, if any.
    #[must_use]
    fn inner(&self) -> Option<&dyn Diagnostic>;

    /// Runtime identity of the concrete error-code enumeration.
    #[must_use]
    fn code_type(&self) -> TypeId;

    /// Name of the concrete error-code enumeration, for logs and messages.
    #[must_use]
    fn code_type_name(&self) -> &'static str;

    /// Integer projection of the stored code.
    #[must_use]
    fn code_value(&self) -> i32;

    /// Duplicates this record behind a fresh owning box.
    ///
    /// The duplicate preserves the concrete type and deep-copies the cause
    /// chain. Chaining factories use this to capture causes by value.
    fn clone_boxed(&self) -> BoxedDiagnostic;

    /// Upcast supporting concrete-type recovery.
    fn as_any(&self) -> &dyn Any;
}

/// An owned, type-erased success/failure record.
pub type BoxedDiagnostic = Box<dyn Diagnostic>;

impl Clone for BoxedDiagnostic {
    fn clone(&self) -> Self {
        self.as_ref().clone_boxed()
    }
}

impl dyn Diagnostic {
    /// Returns `true` if this record was built from the error-code
    /// enumeration `E`.
    #[must_use]
    pub fn is<E: ErrorCode>(&self) -> bool {
        self.code_type() == TypeId::of::<E>()
    }

    /// Recovers the concretely typed verdict, if this record was built from
    /// the error-code enumeration `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{Diagnostic, ErrorCode, Verdict};
    ///
    /// #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
    /// enum StoreCode {
    ///     Success = 0,
    ///     NotFound = 1000,
    /// }
    ///
    /// let verdict = Verdict::failure(StoreCode::NotFound, "missing shard");
    /// let erased: &dyn Diagnostic = &verdict;
    ///
    /// let typed = erased.downcast_ref::<StoreCode>();
    /// assert_eq!(typed.map(Verdict::code), Some(StoreCode::NotFound));
    /// ```
    #[must_use]
    pub fn downcast_ref<E: ErrorCode>(&self) -> Option<&Verdict<E>> {
        self.as_any().downcast_ref::<Verdict<E>>()
    }

    /// Iterates over this record and its transitive causes, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }
}

/// Iterator over a record and its transitive causes, outermost first.
///
/// Returned by [`Verdict::chain`] and by `chain` on erased records.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a dyn Diagnostic>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(head: &'a dyn Diagnostic) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a dyn Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.inner();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
