//! Property-based tests for the Prim and Kruskal implementations.
//!
//! Cross-checks both algorithms against each other and against a brute-force
//! oracle, validates structural invariants (acyclicity, spanning, edge count,
//! verification) and checks that repeated runs are reproducible across graph
//! topologies with varied weight distributions.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
