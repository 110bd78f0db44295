//! Per-test registry of generated test-data bundles.

use crate::{generator, model::TestData};

/// Accumulates every bundle a test asks for, in creation order.
///
/// One instance per test; nothing is shared across tests and nothing
/// persists past the test's lifetime. There is no removal operation:
/// server-side cleanup belongs to whoever enumerates `entries` at test end.
#[derive(Debug, Default)]
pub struct TestDataStorage {
    entries: Vec<TestData>,
}

impl TestDataStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh bundle, record it, and return it for immediate use.
    ///
    /// The registry keeps its own copy; the returned value is the test's to
    /// mutate (assigning roles, blanking names) before issuing requests.
    pub fn add_test_data(&mut self) -> TestData {
        let data = generator::generate();
        self.entries.push(data.clone());
        data
    }

    /// Every bundle recorded so far, in creation order.
    pub fn entries(&self) -> impl Iterator<Item = &TestData> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
