//! Chains derived codes across two enumerations in a standalone consumer.

use verdict::{Diagnostic, ErrorCode, SharedReturn, Verdict};

#[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
enum InnerCode {
    Success = 0,
    Failed = 1000,
}

#[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
enum OuterCode {
    Success = 0,
    Wrapped = 2000,
}

fn main() {
    let inner = Verdict::failure(InnerCode::Failed, "inner failure");
    let outer = Verdict::failure_from(&inner, OuterCode::Wrapped, "outer failure");
    drop(inner);

    assert_eq!(outer.chain().count(), 2);
    let cause = outer.inner().expect("cause was recorded");
    assert!(cause.is::<InnerCode>());
    assert_eq!(cause.code_value(), 1000);

    let shared = SharedReturn::<OuterCode, u64>::success_value(99);
    let alias = shared.clone();
    drop(shared);
    assert_eq!(*alias.payload().as_ref(), 99);
}
