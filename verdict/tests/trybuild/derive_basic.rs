//! Derives error codes in a standalone consumer and exercises them.

use verdict::{ErrorCode, Verdict};

#[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
enum FixtureCode {
    Success = 0,
    Failed = 1000,
}

fn main() {
    assert_eq!(FixtureCode::SUCCESS, FixtureCode::Success);
    assert_eq!(FixtureCode::Failed.raw(), 1000);

    let verdict = Verdict::failure(FixtureCode::Failed, "fixture failure");
    assert!(verdict.failed());
    assert_eq!(verdict.code_value(), 1000);

    let ok = Verdict::<FixtureCode>::success();
    assert!(ok.succeeded());
}
