//! Demonstrates layered failure reporting across subsystem boundaries.
//!
//! A catalog lookup fails, a query planner wraps that failure in its own
//! terms, and the caller renders the whole chain without knowing either
//! enumeration in advance.

use verdict::{Diagnostic, ErrorCode, ValueReturn, Verdict};

#[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
enum CatalogCode {
    Success = 0,
    MissingTable = 1200,
}

#[derive(ErrorCode, Clone, Copy, PartialEq, Eq, Debug)]
enum PlanCode {
    Success = 0,
    Unplannable = 2200,
}

fn load_table(name: &str) -> ValueReturn<CatalogCode, Vec<String>> {
    if name == "events" {
        return ValueReturn::success(vec![String::from("id"), String::from("at")]);
    }
    ValueReturn::failure_format(
        CatalogCode::MissingTable,
        format_args!("table {name} is not in the catalog"),
    )
}

fn plan_scan(name: &str) -> Verdict<PlanCode> {
    let table = load_table(name);
    if table.failed() {
        return Verdict::failure_format_from(
            table.as_verdict(),
            PlanCode::Unplannable,
            format_args!("cannot plan a scan of {name}"),
        );
    }
    if table.payload().is_empty() {
        return Verdict::failure(PlanCode::Unplannable, "table has no columns");
    }
    Verdict::success()
}

#[expect(clippy::print_stdout, reason = "command line demonstration")]
fn main() {
    let ok = plan_scan("events");
    println!("events: {ok}");

    let failed = plan_scan("sessions");
    println!("sessions: {failed:#}");

    for (depth, link) in failed.chain().enumerate() {
        println!("  [{depth}] {} ({})", link.message(), link.code_value());
    }
}
