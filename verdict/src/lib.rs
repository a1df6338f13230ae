//! Typed success/failure values with deep-copied cause chains and four
//! payload ownership policies.
//!
//! A [`Verdict`] reports the outcome of an operation against a caller-defined
//! error-code enumeration: the reserved zero member means success, every
//! other member names a failure category. Failures carry a message and may
//! record the failure that caused them, including one from a different
//! enumeration entirely. Causes are captured by value through the type-erased
//! [`Diagnostic`] trait, so a verdict owns its whole chain and can cross
//! layer boundaries without lifetime entanglement.
//!
//! [`Returned`] adds a success payload to a verdict. The payload's storage
//! type fixes its ownership policy; [`ValueReturn`], [`RefReturn`],
//! [`BoxedReturn`], and [`SharedReturn`] name the four conventional choices.
//!
//! # Examples
//!
//! Layered failure reporting across two subsystems:
//!
//! ```
//! use verdict::{ErrorCode, Verdict};
//!
//! #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
//! enum IndexCode {
//!     Success = 0,
//!     MissingSegment = 1100,
//! }
//!
//! #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
//! enum QueryCode {
//!     Success = 0,
//!     Unanswerable = 2100,
//! }
//!
//! fn open_segment(id: u32) -> Verdict<IndexCode> {
//!     Verdict::failure_format(IndexCode::MissingSegment, format_args!("segment {id} not on disk"))
//! }
//!
//! let index = open_segment(12);
//! let query = Verdict::failure_from(&index, QueryCode::Unanswerable, "query needs segment 12");
//! drop(index);
//!
//! assert!(query.failed());
//! assert_eq!(query.code(), QueryCode::Unanswerable);
//!
//! let cause = query.inner().unwrap();
//! assert!(cause.is::<IndexCode>());
//! assert_eq!(cause.code_value(), 1100);
//! assert_eq!(format!("{query:#}"), "query needs segment 12: segment 12 not on disk");
//! ```

mod code;
mod diagnostic;
mod returned;
mod verdict;

pub use code::ErrorCode;
pub use diagnostic::{BoxedDiagnostic, Chain, Diagnostic};
pub use returned::{BoxedReturn, Exclusive, RefReturn, Returned, SharedReturn, ValueReturn};
pub use verdict::Verdict;

/// Derives [`ErrorCode`](trait@ErrorCode) for a fieldless enum with a
/// zero-valued success member.
pub use verdict_macros::ErrorCode;
