//! Benchmark support crate for minspan.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks comparing Prim and Kruskal.

pub mod error;
pub mod params;
pub mod source;
