//! Soft assertions: collect failures, report them together at test end.

use std::fmt::Debug;

/// An explicit assertion accumulator.
///
/// Unlike a bare `assert_eq!`, a failed check here does not stop the test;
/// it is recorded and reported when `verify` runs, so one test can surface
/// several mismatches at once. `verify` consumes the collector; call it as
/// the test's last statement.
#[derive(Debug, Default)]
pub struct SoftAssertions {
    failures: Vec<String>,
}

impl SoftAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure when `actual != expected`.
    pub fn assert_eq<T: PartialEq + Debug>(&mut self, actual: &T, expected: &T, context: &str) {
        if actual != expected {
            self.failures
                .push(format!("{context}: expected {expected:?}, got {actual:?}"));
        }
    }

    /// Record a failure when `haystack` does not contain `needle`.
    pub fn assert_contains(&mut self, haystack: &str, needle: &str, context: &str) {
        if !haystack.contains(needle) {
            self.failures.push(format!(
                "{context}: expected {needle:?} within {haystack:?}"
            ));
        }
    }

    /// Record a failure when `condition` is false.
    pub fn check(&mut self, condition: bool, context: &str) {
        if !condition {
            self.failures.push(context.to_string());
        }
    }

    /// Flush the collector.
    ///
    /// # Panics
    /// Panics listing every recorded failure if any check failed.
    pub fn verify(self) {
        if !self.failures.is_empty() {
            panic!(
                "{count} soft assertion(s) failed:\n{details}",
                count = self.failures.len(),
                details = self.failures.join("\n")
            );
        }
    }
}
