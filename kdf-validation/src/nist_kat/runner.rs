#![deny(unsafe_code)]
#![allow(missing_docs)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![allow(clippy::print_stdout)]

//! KAT Test Runner
//!
//! Runs vectors one at a time, timing each, and keeps going after a failure
//! so a single report lists every broken vector.

use std::collections::BTreeMap;
use std::time::Instant;

use super::{KatTestResult, NistKatError};

/// Pass/fail counts for one algorithm group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlgorithmTally {
    pub passed: usize,
    pub total: usize,
    pub time_us: u128,
}

/// Summary of KAT test execution
#[derive(Debug, Clone, Default)]
pub struct KatSummary {
    /// Total number of tests run
    pub total: usize,
    /// Number of tests passed
    pub passed: usize,
    /// Number of tests failed
    pub failed: usize,
    /// Individual test results, in run order
    pub results: Vec<KatTestResult>,
    /// Summed execution time in microseconds
    pub total_time_us: u128,
}

impl KatSummary {
    /// Create a new empty summary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a test result
    pub fn add_result(&mut self, result: KatTestResult) {
        self.total = self.total.saturating_add(1);
        if result.passed {
            self.passed = self.passed.saturating_add(1);
        } else {
            self.failed = self.failed.saturating_add(1);
        }
        self.total_time_us = self.total_time_us.saturating_add(result.execution_time_us);
        self.results.push(result);
    }

    /// Check if all tests passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get pass rate as percentage
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { (self.passed as f64 / self.total as f64) * 100.0 }
    }

    /// Failed results, in run order
    pub fn failures(&self) -> impl Iterator<Item = &KatTestResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Results grouped by algorithm name, sorted by name
    #[must_use]
    pub fn by_algorithm(&self) -> BTreeMap<&str, AlgorithmTally> {
        let mut groups: BTreeMap<&str, AlgorithmTally> = BTreeMap::new();
        for result in &self.results {
            let tally = groups.entry(result.algorithm.as_str()).or_default();
            tally.total = tally.total.saturating_add(1);
            if result.passed {
                tally.passed = tally.passed.saturating_add(1);
            }
            tally.time_us = tally.time_us.saturating_add(result.execution_time_us);
        }
        groups
    }

    /// Print summary to stdout
    pub fn print(&self) {
        println!("\n========================================");
        println!("KDF KAT Test Summary");
        println!("========================================");
        println!("Total Tests:  {}", self.total);
        println!("Passed:       {} ({:.1}%)", self.passed, self.pass_rate());
        println!("Failed:       {}", self.failed);
        println!("Total Time:   {} us", self.total_time_us);

        let groups = self.by_algorithm();
        if !groups.is_empty() {
            println!("\nPer-Algorithm Breakdown:");
            println!("----------------------------------------");
            for (algorithm, tally) in groups {
                println!(
                    "  {:<20} {}/{} passed  ({} us)",
                    algorithm, tally.passed, tally.total, tally.time_us
                );
            }
        }

        if !self.all_passed() {
            println!("\nFailed Tests:");
            println!("----------------------------------------");
            for result in self.failures() {
                println!("  {} - {}", result.algorithm, result.test_case);
                if let Some(err) = &result.error_message {
                    println!("    Error: {err}");
                }
            }
        }

        println!("========================================\n");
    }
}

/// KAT test runner
#[derive(Debug, Default)]
pub struct KatRunner {
    summary: KatSummary,
}

impl KatRunner {
    /// Create a new runner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a test and record the result
    pub fn run_test<F>(&mut self, test_case: &str, algorithm: &str, test_fn: F)
    where
        F: FnOnce() -> Result<(), NistKatError>,
    {
        let start = Instant::now();
        let result = test_fn();
        let elapsed = start.elapsed().as_micros();

        let test_result = match result {
            Ok(()) => KatTestResult::passed(test_case.to_string(), algorithm.to_string(), elapsed),
            Err(e) => {
                tracing::warn!(test_case, algorithm, error = %e, "known-answer test failed");
                KatTestResult::failed(
                    test_case.to_string(),
                    algorithm.to_string(),
                    e.to_string(),
                    elapsed,
                )
            }
        };

        self.summary.add_result(test_result);
    }

    /// Get the summary
    #[must_use]
    pub fn summary(&self) -> &KatSummary {
        &self.summary
    }

    /// Consume the runner and return the summary
    #[must_use]
    pub fn finish(self) -> KatSummary {
        self.summary
    }
}
