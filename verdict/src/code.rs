//! Trait marking caller-defined enumerations as error-code types.

use std::fmt::Debug;

/// An enumerated error-code type usable with [`Verdict`](crate::Verdict).
///
/// Implementors are fieldless enums in which exactly one member carries the
/// reserved value zero and means "no error"; every other member identifies a
/// failure category. The integer values are the stable identity a consumer
/// sees through a type-erased [`Diagnostic`](crate::Diagnostic) link, so they
/// should be chosen deliberately (layered systems conventionally give each
/// layer its own range).
///
/// The [`ErrorCode`](derive@crate::ErrorCode) derive implements this trait
/// for any qualifying enum and rejects enums without a zero-valued member at
/// compile time.
///
/// # Examples
///
/// ```
/// use verdict::ErrorCode;
///
/// #[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
/// enum StoreCode {
///     Success = 0,
///     NotFound = 1000,
///     Corrupt = 1001,
/// }
///
/// assert_eq!(StoreCode::SUCCESS, StoreCode::Success);
/// assert_eq!(StoreCode::Corrupt.raw(), 1001);
/// assert!(!StoreCode::NotFound.is_success());
/// ```
pub trait ErrorCode: Copy + Eq + Debug + Send + Sync + 'static {
    /// The reserved zero-valued member meaning "no error".
    const SUCCESS: Self;

    /// Integer projection of this code.
    ///
    /// Equal to the enum discriminant; [`SUCCESS`](Self::SUCCESS) projects
    /// to zero.
    #[must_use]
    fn raw(self) -> i32;

    /// Whether this code is the reserved "no error" member.
    #[must_use]
    fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}
