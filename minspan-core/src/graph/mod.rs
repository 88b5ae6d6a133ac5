//! Undirected weighted graph over a fixed, named vertex set.
//!
//! Vertices receive dense zero-based indices in the order they are supplied.
//! A [`GraphBuilder`] validates every edge as it is added and freezes into a
//! [`Graph`], which exposes read accessors only. Because a `Graph` cannot be
//! mutated after construction it may be shared between threads and handed to
//! several MST computations at once.

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
};

/// Incrementally assembles a [`Graph`].
///
/// # Examples
/// ```
/// use minspan_core::{Edge, GraphBuilder};
///
/// let mut builder = GraphBuilder::new(["A", "B", "C"])?;
/// builder.add_edge(Edge::new("A", "B", 1.0))?;
/// builder.add_edge(Edge::new("B", "C", 2.0))?;
/// let graph = builder.build();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.is_connected());
/// # Ok::<(), minspan_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    names: Vec<Arc<str>>,
    index: HashMap<Arc<str>, usize>,
    edges: Vec<Edge>,
    endpoints: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl GraphBuilder {
    /// Registers the vertex set, assigning indices `0..V` in iteration order.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when a name repeats.
    pub fn new<I, S>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let mut names: Vec<Arc<str>> = Vec::new();
        let mut index = HashMap::new();
        for (position, vertex) in vertices.into_iter().enumerate() {
            let name: Arc<str> = vertex.into();
            if let Some(&first) = index.get(&name) {
                return Err(GraphError::DuplicateVertex {
                    name,
                    first,
                    second: position,
                });
            }
            index.insert(Arc::clone(&name), position);
            names.push(name);
        }

        let adjacency = vec![Vec::new(); names.len()];
        Ok(Self {
            names,
            index,
            edges: Vec::new(),
            endpoints: Vec::new(),
            adjacency,
        })
    }

    /// Adds `edge` to both endpoints' adjacency lists.
    ///
    /// Parallel edges are accepted. The builder is left untouched when the
    /// edge is rejected.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when an endpoint is not in the
    /// vertex set, [`GraphError::SelfLoop`] when both endpoints are the same
    /// vertex, and [`GraphError::InvalidWeight`] when the weight is negative,
    /// infinite, or NaN.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let from = resolve(&self.index, edge.from_name())?;
        let to = resolve(&self.index, edge.to_name())?;
        if from == to {
            return Err(GraphError::SelfLoop {
                vertex: Arc::clone(edge.from_name()),
            });
        }
        let weight = edge.weight();
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: Arc::clone(edge.from_name()),
                to: Arc::clone(edge.to_name()),
                weight,
            });
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.endpoints.push((from, to));
        self.adjacency[from].push(id);
        self.adjacency[to].push(id);
        Ok(())
    }

    /// Returns the number of edges accepted so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Freezes the builder into an immutable [`Graph`].
    #[must_use]
    pub fn build(self) -> Graph {
        let Self {
            names,
            index,
            edges,
            endpoints,
            adjacency,
        } = self;
        Graph {
            names,
            index,
            edges,
            endpoints,
            adjacency,
        }
    }
}

fn resolve(index: &HashMap<Arc<str>, usize>, name: &Arc<str>) -> Result<usize> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| GraphError::UnknownVertex {
            name: Arc::clone(name),
        })
}

/// An immutable undirected graph with a named, densely indexed vertex set.
#[derive(Clone, Debug)]
pub struct Graph {
    names: Vec<Arc<str>>,
    index: HashMap<Arc<str>, usize>,
    edges: Vec<Edge>,
    endpoints: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from a vertex list and an edge list in one call.
    ///
    /// # Errors
    /// Propagates the first [`GraphError`] raised by [`GraphBuilder::new`] or
    /// [`GraphBuilder::add_edge`]; no partial graph is returned.
    ///
    /// # Examples
    /// ```
    /// use minspan_core::{Edge, Graph, GraphErrorCode};
    ///
    /// let err = Graph::from_parts(["A", "B"], [Edge::new("A", "Z", 1.0)])
    ///     .expect_err("Z is not a vertex");
    /// assert_eq!(err.code(), GraphErrorCode::UnknownVertex);
    /// ```
    #[instrument(name = "graph.build", level = "debug", skip_all, err)]
    pub fn from_parts<V, S, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
        E: IntoIterator<Item = Edge>,
    {
        let mut builder = GraphBuilder::new(vertices)?;
        for edge in edges {
            builder.add_edge(edge)?;
        }
        let graph = builder.build();
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Returns the number of vertices, `V`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of edges added, `E`.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertex names in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Returns the name of the vertex at `index`, if it exists.
    #[must_use]
    pub fn vertex_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(AsRef::as_ref)
    }

    /// Resolves a vertex name to its dense index.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `name` is not a vertex.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                name: Arc::from(name),
            })
    }

    /// Returns the edges incident to the vertex called `name`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `name` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use minspan_core::{Edge, Graph};
    ///
    /// let graph = Graph::from_parts(
    ///     ["A", "B", "C"],
    ///     [Edge::new("A", "B", 1.0), Edge::new("C", "A", 3.0)],
    /// )?;
    /// let weights: Vec<f64> = graph.adjacency("A")?.map(Edge::weight).collect();
    /// assert_eq!(weights, vec![1.0, 3.0]);
    /// # Ok::<(), minspan_core::GraphError>(())
    /// ```
    pub fn adjacency(&self, name: &str) -> Result<impl ExactSizeIterator<Item = &Edge> + '_> {
        let vertex = self.index_of(name)?;
        Ok(self.adjacency[vertex].iter().map(|&id| &self.edges[id]))
    }

    /// Iterates the neighbours of the vertex at `vertex` as
    /// `(neighbour_index, edge)` pairs, in insertion order.
    ///
    /// # Panics
    /// Panics when `vertex >= self.vertex_count()`.
    pub fn incident(&self, vertex: usize) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.adjacency[vertex].iter().map(move |&id| {
            let (from, to) = self.endpoints[id];
            let neighbour = if from == vertex { to } else { from };
            (neighbour, &self.edges[id])
        })
    }

    /// Returns each undirected edge exactly once.
    ///
    /// Vertices are scanned in index order and an edge is reported from the
    /// adjacency list of its lower-indexed endpoint, i.e. when the opposite
    /// endpoint has the higher index.
    #[must_use]
    pub fn edges(&self) -> Vec<&Edge> {
        self.indexed_edges()
            .into_iter()
            .map(|(_, _, edge)| edge)
            .collect()
    }

    /// Same order as [`Self::edges`], paired with the endpoint indices
    /// `(lower, higher)`.
    pub(crate) fn indexed_edges(&self) -> Vec<(usize, usize, &Edge)> {
        let mut list = Vec::with_capacity(self.edges.len());
        for vertex in 0..self.vertex_count() {
            for (neighbour, edge) in self.incident(vertex) {
                if neighbour > vertex {
                    list.push((vertex, neighbour, edge));
                }
            }
        }
        list
    }

    /// Returns `true` when a breadth-first traversal from index 0 reaches
    /// every vertex. A graph without vertices is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let vertex_count = self.vertex_count();
        if vertex_count == 0 {
            return true;
        }

        let mut visited = vec![false; vertex_count];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(vertex) = queue.pop_front() {
            for (neighbour, _) in self.incident(vertex) {
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    reached += 1;
                    queue.push_back(neighbour);
                }
            }
        }

        reached == vertex_count
    }
}
