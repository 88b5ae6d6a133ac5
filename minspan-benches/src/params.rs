//! Benchmark parameter labels.

use std::fmt;

/// Size of one MST benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra edges per vertex beyond the spanning backbone.
    pub extra_degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},d={}", self.vertex_count, self.extra_degree)
    }
}
