//! Unit tests for verdict construction, chaining, and clone semantics.

use std::any::TypeId;
use std::error::Error;

use rstest::rstest;

use super::SUCCESS_MESSAGE;
use crate::{Diagnostic, ErrorCode, Verdict};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum StoreCode {
    Success = 0,
    NotFound = 1000,
    Corrupt = 1001,
    Locked = 1002,
}

impl ErrorCode for StoreCode {
    const SUCCESS: Self = Self::Success;

    fn raw(self) -> i32 {
        self as i32
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum WireCode {
    Success = 0,
    Refused = 2000,
    TimedOut = 2001,
}

impl ErrorCode for WireCode {
    const SUCCESS: Self = Self::Success;

    fn raw(self) -> i32 {
        self as i32
    }
}

#[rstest]
fn success_reports_success() {
    let verdict = Verdict::<StoreCode>::success();

    assert!(verdict.succeeded());
    assert!(!verdict.failed());
    assert_eq!(verdict.code(), StoreCode::Success);
    assert_eq!(verdict.code_value(), 0);
    assert_eq!(verdict.message(), SUCCESS_MESSAGE);
    assert!(verdict.inner().is_none());
}

#[rstest]
#[case(StoreCode::NotFound, "missing shard", 1000)]
#[case(StoreCode::Corrupt, "checksum mismatch", 1001)]
#[case(StoreCode::Locked, "held by compactor", 1002)]
fn failure_reports_code_and_message(
    #[case] code: StoreCode,
    #[case] message: &'static str,
    #[case] value: i32,
) {
    let verdict = Verdict::failure(code, message);

    assert!(verdict.failed());
    assert!(!verdict.succeeded());
    assert_eq!(verdict.code(), code);
    assert_eq!(verdict.code_value(), value);
    assert_eq!(verdict.message(), message);
    assert!(verdict.inner().is_none());
}

#[rstest]
fn failure_format_renders_arguments() {
    let verdict = Verdict::failure_format(
        StoreCode::NotFound,
        format_args!("message {} {}", "test 3", 35),
    );

    assert_eq!(verdict.message(), "message test 3 35");
}

#[rstest]
#[should_panic(expected = "requires an error code other than")]
fn failure_with_success_code_panics() {
    let verdict = Verdict::failure(StoreCode::Success, "not a failure");
    drop(verdict);
}

#[rstest]
#[should_panic(expected = "requires an error code other than")]
fn failure_format_with_success_code_panics() {
    let verdict = Verdict::failure_format(StoreCode::Success, format_args!("not a failure"));
    drop(verdict);
}

#[rstest]
fn chained_failure_owns_its_cause() {
    let root = Verdict::failure(StoreCode::Corrupt, "checksum mismatch");
    let outer = Verdict::failure_from(&root, StoreCode::Locked, "cannot repair");
    drop(root);

    let cause = match outer.inner() {
        Some(cause) => cause,
        None => panic!("chained failure lost its cause"),
    };
    assert!(cause.failed());
    assert_eq!(cause.message(), "checksum mismatch");
    assert_eq!(cause.code_value(), 1001);
}

#[rstest]
fn chain_preserves_order_and_depth() {
    let root = Verdict::failure(StoreCode::NotFound, "root");
    let middle = Verdict::failure_from(&root, StoreCode::Corrupt, "middle");
    let outer = Verdict::failure_from(&middle, StoreCode::Locked, "outer");

    let messages: Vec<&str> = outer.chain().map(|link| link.message()).collect();
    assert_eq!(messages, ["outer", "middle", "root"]);

    let values: Vec<i32> = outer.chain().map(|link| link.code_value()).collect();
    assert_eq!(values, [1002, 1001, 1000]);
}

#[rstest]
fn chain_crosses_enumerations() {
    let store = Verdict::failure(StoreCode::NotFound, "missing shard");
    let wire = Verdict::failure_from(&store, WireCode::Refused, "cannot serve read");

    assert_eq!(wire.code_type(), TypeId::of::<WireCode>());
    let cause = match wire.inner() {
        Some(cause) => cause,
        None => panic!("wrapped failure lost its cause"),
    };
    assert_eq!(cause.code_type(), TypeId::of::<StoreCode>());
    assert!(cause.is::<StoreCode>());
    assert!(!cause.is::<WireCode>());

    let typed = match cause.downcast_ref::<StoreCode>() {
        Some(typed) => typed,
        None => panic!("downcast to the recorded enumeration failed"),
    };
    assert_eq!(typed.code(), StoreCode::NotFound);
}

#[rstest]
fn clone_is_independent_of_the_original() {
    let root = Verdict::failure(StoreCode::NotFound, "root");
    let mut original = Verdict::failure_from(&root, StoreCode::Locked, "outer");
    let copy = original.clone();

    original = Verdict::success();

    assert!(original.succeeded());
    assert!(copy.failed());
    assert_eq!(copy.message(), "outer");
    let cause = match copy.inner() {
        Some(cause) => cause,
        None => panic!("clone lost the cause chain"),
    };
    assert_eq!(cause.message(), "root");
}

#[rstest]
fn formatted_chained_failure_combines_both() {
    let root = Verdict::failure(StoreCode::Corrupt, "checksum mismatch");
    let outer = Verdict::failure_format_from(
        &root,
        WireCode::TimedOut,
        format_args!("retry {} abandoned", 3),
    );

    assert_eq!(outer.message(), "retry 3 abandoned");
    assert_eq!(outer.chain().count(), 2);
}

#[rstest]
fn display_plain_and_alternate() {
    let root = Verdict::failure(StoreCode::NotFound, "root");
    let middle = Verdict::failure_from(&root, StoreCode::Corrupt, "middle");
    let outer = Verdict::failure_from(&middle, WireCode::Refused, "outer");

    assert_eq!(outer.to_string(), "outer");
    assert_eq!(format!("{outer:#}"), "outer: middle: root");
}

#[rstest]
fn error_source_walks_the_chain() {
    let root = Verdict::failure(StoreCode::NotFound, "root");
    let outer = Verdict::failure_from(&root, WireCode::Refused, "outer");

    let source = match outer.source() {
        Some(source) => source,
        None => panic!("chained failure has no error source"),
    };
    assert_eq!(source.to_string(), "root");
    assert!(source.source().is_none());
}

#[rstest]
fn into_result_bridges_both_outcomes() {
    assert!(Verdict::<StoreCode>::success().into_result().is_ok());

    let failed = Verdict::failure(StoreCode::Locked, "held by compactor").into_result();
    match failed {
        Ok(()) => panic!("failure bridged to Ok"),
        Err(verdict) => assert_eq!(verdict.code(), StoreCode::Locked),
    }
}

#[rstest]
fn code_type_name_names_the_enumeration() {
    let verdict = Verdict::failure(StoreCode::NotFound, "missing shard");
    assert!(verdict.code_type_name().contains("StoreCode"));
}
