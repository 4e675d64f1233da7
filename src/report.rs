// src/report.rs
// Stdout reporting for probe runs

use crate::models::{RunSummary, TestCase, TestResult};

pub fn print_banner(base_url: &str, suite: &str, total: usize) {
    println!("🚀 Starting probe run");
    println!("Base URL: {}", base_url);
    println!("Suite: {} ({} cases)", suite, total);
}

pub fn print_case_line(result: &TestResult) {
    println!("{}", case_line(result));
}

/// One line per case: marker, name, elapsed time, verdict message.
pub fn case_line(result: &TestResult) -> String {
    let marker = if result.passed { "✅" } else { "❌" };
    format!(
        "{} {} ({:.2}s) - {}",
        marker, result.test_name, result.elapsed_seconds, result.message
    )
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "=".repeat(50));
    println!("📊 TEST RESULTS SUMMARY");
    println!("{}", "=".repeat(50));

    for result in &summary.results {
        let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
        println!("{}: {}", display_name(&result.test_name), status);
    }

    println!();
    println!(
        "Overall: {}/{} tests passed ({:.1}%)",
        summary.passed,
        summary.total,
        summary.success_rate()
    );

    if summary.failed == 0 {
        println!("🎉 All tests passed!");
    } else {
        println!("Failing: {}", summary.failing_names().join(", "));
        println!("⚠️ Some tests failed - check logs above");
    }
}

/// Exit status of the run: 1 when any critical case failed, else 0.
/// Relies on results being in case order.
pub fn exit_code(cases: &[TestCase], summary: &RunSummary) -> i32 {
    let critical_failure = summary
        .results
        .iter()
        .zip(cases)
        .any(|(result, case)| case.critical && !result.passed);
    if critical_failure {
        1
    } else {
        0
    }
}

/// "api_health" renders as "Api Health" in the summary block.
fn display_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
