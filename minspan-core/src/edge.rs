//! Weighted undirected edges between named vertices.

use std::{cmp::Ordering, fmt, sync::Arc};

use crate::error::{GraphError, Result};

/// An immutable weighted connection between two named endpoints.
///
/// The endpoint passed first at construction is the one reported by
/// [`Edge::either`]; it is never canonicalised.
///
/// # Examples
/// ```
/// use minspan_core::Edge;
///
/// let edge = Edge::new("A", "B", 4.0);
/// assert_eq!(edge.either(), "A");
/// assert_eq!(edge.other("A")?, "B");
/// assert_eq!(edge.weight(), 4.0);
/// # Ok::<(), minspan_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    from: Arc<str>,
    to: Arc<str>,
    weight: f64,
}

impl Edge {
    /// Creates an edge. Weight and endpoint validation happens when the edge
    /// is added to a [`crate::GraphBuilder`].
    #[must_use]
    pub fn new(from: impl Into<Arc<str>>, to: impl Into<Arc<str>>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns the endpoint given first at construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn either(&self) -> &str { &self.from }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::NotAnEndpoint`] when `vertex` is neither endpoint.
    pub fn other(&self, vertex: &str) -> Result<&str> {
        if *self.from == *vertex {
            Ok(&self.to)
        } else if *self.to == *vertex {
            Ok(&self.from)
        } else {
            Err(GraphError::NotAnEndpoint {
                vertex: Arc::from(vertex),
                from: Arc::clone(&self.from),
                to: Arc::clone(&self.to),
            })
        }
    }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    pub(crate) fn from_name(&self) -> &Arc<str> {
        &self.from
    }

    pub(crate) fn to_name(&self) -> &Arc<str> {
        &self.to
    }

    /// Orders two edges by weight alone.
    ///
    /// Equal weights compare as equal, so a stable sort keeps their relative
    /// order.
    ///
    /// # Examples
    /// ```
    /// use minspan_core::Edge;
    ///
    /// let mut edges = vec![
    ///     Edge::new("A", "B", 2.0),
    ///     Edge::new("B", "C", 1.0),
    ///     Edge::new("C", "D", 2.0),
    /// ];
    /// edges.sort_by(Edge::cmp_weight);
    /// assert_eq!(edges[0].either(), "B");
    /// assert_eq!(edges[1].either(), "A");
    /// assert_eq!(edges[2].either(), "C");
    /// ```
    #[must_use]
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.from, self.to, self.weight)
    }
}
