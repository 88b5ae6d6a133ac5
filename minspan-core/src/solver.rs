//! Runs both MST algorithms over one graph and cross-validates the results.
//!
//! The two algorithms are independent, so agreement on the total weight is a
//! cheap end-to-end consistency check. Disagreement is reported, not raised.

use tracing::{instrument, warn};

use crate::{
    error::SolverError,
    graph::Graph,
    mst::{SpanningTree, kruskal, prim},
};

/// Tolerance applied when comparing the Prim and Kruskal totals.
pub const DEFAULT_COST_TOLERANCE: f64 = 1.0e-2;

/// Configures and constructs [`Solver`] instances.
///
/// # Examples
/// ```
/// use minspan_core::SolverBuilder;
///
/// let solver = SolverBuilder::new()
///     .with_cost_tolerance(0.5)
///     .build()
///     .expect("tolerance is valid");
/// assert_eq!(solver.cost_tolerance(), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct SolverBuilder {
    cost_tolerance: f64,
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self {
            cost_tolerance: DEFAULT_COST_TOLERANCE,
        }
    }
}

impl SolverBuilder {
    /// Creates a builder with the default cost tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the tolerance used by [`Comparison::costs_match`].
    #[must_use]
    pub fn with_cost_tolerance(mut self, tolerance: f64) -> Self {
        self.cost_tolerance = tolerance;
        self
    }

    /// Returns the configured tolerance.
    #[must_use]
    pub fn cost_tolerance(&self) -> f64 {
        self.cost_tolerance
    }

    /// Validates the configuration and constructs a [`Solver`].
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidTolerance`] when the tolerance is
    /// negative, infinite, or NaN.
    ///
    /// # Examples
    /// ```
    /// use minspan_core::{SolverBuilder, SolverErrorCode};
    ///
    /// let err = SolverBuilder::new()
    ///     .with_cost_tolerance(f64::NAN)
    ///     .build()
    ///     .expect_err("NaN is rejected");
    /// assert_eq!(err.code(), SolverErrorCode::InvalidTolerance);
    /// ```
    pub fn build(self) -> Result<Solver, SolverError> {
        if !self.cost_tolerance.is_finite() || self.cost_tolerance < 0.0 {
            return Err(SolverError::InvalidTolerance {
                got: self.cost_tolerance,
            });
        }
        Ok(Solver {
            cost_tolerance: self.cost_tolerance,
        })
    }
}

/// Computes and compares Prim and Kruskal trees.
#[derive(Clone, Debug)]
pub struct Solver {
    cost_tolerance: f64,
}

impl Solver {
    /// Returns the tolerance used when comparing totals.
    #[must_use]
    pub fn cost_tolerance(&self) -> f64 {
        self.cost_tolerance
    }

    /// Runs Prim then Kruskal on `graph`.
    ///
    /// # Examples
    /// ```
    /// use minspan_core::{Edge, Graph, SolverBuilder};
    ///
    /// let graph = Graph::from_parts(
    ///     ["A", "B", "C"],
    ///     [
    ///         Edge::new("A", "B", 1.0),
    ///         Edge::new("B", "C", 2.0),
    ///         Edge::new("A", "C", 3.0),
    ///     ],
    /// )?;
    /// let solver = SolverBuilder::new().build()?;
    /// let comparison = solver.solve(&graph);
    /// assert!(comparison.costs_match());
    /// assert!(comparison.both_valid());
    /// assert_eq!(comparison.kruskal().total_weight(), 3.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "solver.solve",
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn solve(&self, graph: &Graph) -> Comparison {
        let prim = prim(graph);
        let kruskal = kruskal(graph);
        let prim_valid = prim.check(graph);
        let kruskal_valid = kruskal.check(graph);
        let comparison = Comparison {
            prim,
            kruskal,
            prim_valid,
            kruskal_valid,
            cost_tolerance: self.cost_tolerance,
        };

        if !comparison.costs_match() {
            warn!(
                prim = comparison.prim.total_weight(),
                kruskal = comparison.kruskal.total_weight(),
                delta = comparison.cost_delta(),
                tolerance = self.cost_tolerance,
                "prim and kruskal totals differ"
            );
        }
        for (tree, valid) in [
            (&comparison.prim, prim_valid),
            (&comparison.kruskal, kruskal_valid),
        ] {
            if !valid {
                warn!(algorithm = %tree.algorithm(), "spanning tree failed verification");
            }
        }
        comparison
    }
}

/// Both trees computed for one graph, with their verification outcomes.
#[derive(Clone, Debug)]
pub struct Comparison {
    prim: SpanningTree,
    kruskal: SpanningTree,
    prim_valid: bool,
    kruskal_valid: bool,
    cost_tolerance: f64,
}

impl Comparison {
    /// Returns the Prim result.
    #[must_use]
    pub fn prim(&self) -> &SpanningTree {
        &self.prim
    }

    /// Returns the Kruskal result.
    #[must_use]
    pub fn kruskal(&self) -> &SpanningTree {
        &self.kruskal
    }

    /// Absolute difference between the two totals.
    #[must_use]
    pub fn cost_delta(&self) -> f64 {
        (self.prim.total_weight() - self.kruskal.total_weight()).abs()
    }

    /// Returns `true` when the totals differ by less than the tolerance.
    #[must_use]
    pub fn costs_match(&self) -> bool {
        self.cost_delta() < self.cost_tolerance
    }

    /// Returns `true` when both trees pass [`SpanningTree::check`].
    #[must_use]
    pub fn both_valid(&self) -> bool {
        self.prim_valid && self.kruskal_valid
    }

    /// Returns whether the graph was connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.prim.is_connected() && self.kruskal.is_connected()
    }
}
