//! Side-channel step counter threaded through the MST algorithms.

/// Accumulates discrete algorithmic steps for benchmarking comparisons.
///
/// The count never feeds back into control flow.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct OperationCounter(u64);

impl OperationCounter {
    /// Records a single step.
    pub(crate) fn tick(&mut self) {
        self.add(1);
    }

    /// Records `steps` steps at once.
    pub(crate) fn add(&mut self, steps: u64) {
        self.0 = self.0.saturating_add(steps);
    }

    pub(crate) fn get(self) -> u64 {
        self.0
    }
}
