// src/runner.rs
// Ordered execution of probe cases

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use futures::{stream, FutureExt, StreamExt};
use tracing::{debug, warn};

use crate::client::ProbeClient;
use crate::config::Config;
use crate::error::CaseFailure;
use crate::models::{ProbeResponse, RunSummary, TestCase, TestResult};
use crate::report;
use crate::validator;

// the interface for dispatching one case's request
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn execute(&self, case: &TestCase) -> Result<ProbeResponse, CaseFailure>;
}

#[async_trait]
impl Dispatch for ProbeClient {
    async fn execute(&self, case: &TestCase) -> Result<ProbeResponse, CaseFailure> {
        ProbeClient::execute(self, case).await
    }
}

/// Drives a sequence of cases and turns each one into exactly one
/// `TestResult`, pass or fail, in the order the cases were given.
pub struct Runner {
    max_in_flight: usize,
    body_preview_len: usize,
    live: bool,
}

impl Runner {
    pub fn new(max_in_flight: usize, body_preview_len: usize) -> Self {
        Self {
            max_in_flight: max_in_flight.max(1),
            body_preview_len,
            live: false,
        }
    }

    /// Live per-case lines are only printed in sequential mode, where
    /// completion order matches case order.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.runner.max_in_flight, config.report.body_preview_len)
            .with_live(config.runner.max_in_flight <= 1)
    }

    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub async fn run<D: Dispatch>(&self, cases: &[TestCase], dispatch: &D) -> RunSummary {
        let results = if self.max_in_flight <= 1 {
            self.run_sequential(cases, dispatch).await
        } else {
            self.run_bounded(cases, dispatch).await
        };
        RunSummary::from_results(results)
    }

    async fn run_sequential<D: Dispatch>(&self, cases: &[TestCase], dispatch: &D) -> Vec<TestResult> {
        let mut results = Vec::with_capacity(cases.len());
        for case in cases {
            let result = self.run_case(case, dispatch).await;
            if self.live {
                report::print_case_line(&result);
            }
            results.push(result);
        }
        results
    }

    /// Up to `max_in_flight` cases run at once; `buffered` yields the
    /// outputs in input order, so the report order never changes.
    async fn run_bounded<D: Dispatch>(&self, cases: &[TestCase], dispatch: &D) -> Vec<TestResult> {
        stream::iter(cases)
            .map(|case| self.run_case(case, dispatch))
            .buffered(self.max_in_flight)
            .collect()
            .await
    }

    async fn run_case<D: Dispatch>(&self, case: &TestCase, dispatch: &D) -> TestResult {
        debug!(name = %case.name, timeout = ?case.request.timeout, "running case");
        let started = Instant::now();

        // Catch panics so one broken case cannot take down the run
        let verdict = std::panic::AssertUnwindSafe(async {
            let response = dispatch.execute(case).await?;
            validator::validate(&case.expect, &response, self.body_preview_len)?;
            Ok::<u16, CaseFailure>(response.status)
        })
        .catch_unwind()
        .await
        .unwrap_or(Err(CaseFailure::Panicked));

        let elapsed_seconds = started.elapsed().as_secs_f64();
        match verdict {
            Ok(status) => TestResult {
                test_name: case.name.clone(),
                passed: true,
                message: format!("ok: status {}", status),
                elapsed_seconds,
                time_created: unix_now(),
            },
            Err(failure) => {
                warn!(name = %case.name, %failure, "case failed");
                TestResult {
                    test_name: case.name.clone(),
                    passed: false,
                    message: failure.to_string(),
                    elapsed_seconds,
                    time_created: unix_now(),
                }
            }
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
