//! Error types for the minspan core library.
//!
//! Graph construction and solver configuration fail fast with typed errors.
//! Disconnected input and failed verification are not errors; they surface as
//! observable outcomes on the computed [`crate::SpanningTree`].

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex name was not part of the graph's vertex set.
    #[error("vertex `{name}` is not in the graph")]
    UnknownVertex {
        /// The name that failed to resolve.
        name: Arc<str>,
    },
    /// The vertex list named the same vertex more than once.
    #[error("vertex `{name}` appears more than once (first at index {first}, again at {second})")]
    DuplicateVertex {
        /// The repeated vertex name.
        name: Arc<str>,
        /// Index assigned at the first occurrence.
        first: usize,
        /// Position of the repeated occurrence in the input list.
        second: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("edge on `{vertex}` is a self-loop")]
    SelfLoop {
        /// The vertex named at both endpoints.
        vertex: Arc<str>,
    },
    /// An edge weight was negative, infinite, or NaN.
    #[error("edge ({from}, {to}) has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidWeight {
        /// The first endpoint as given.
        from: Arc<str>,
        /// The second endpoint as given.
        to: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// [`crate::Edge::other`] was asked about a vertex the edge does not touch.
    #[error("vertex `{vertex}` is not an endpoint of edge ({from}, {to})")]
    NotAnEndpoint {
        /// The vertex supplied by the caller.
        vertex: Arc<str>,
        /// The edge's first endpoint.
        from: Arc<str>,
        /// The edge's second endpoint.
        to: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex name was not part of the graph's vertex set.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// The vertex list named the same vertex more than once.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge weight was negative, infinite, or NaN.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
        /// A vertex was not an endpoint of the queried edge.
        NotAnEndpoint => NotAnEndpoint { .. } => "GRAPH_NOT_AN_ENDPOINT",
    }
}

/// Error type produced when configuring a [`crate::Solver`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SolverError {
    /// The cost tolerance was negative, infinite, or NaN.
    #[error("cost tolerance must be finite and non-negative (got {got})")]
    InvalidTolerance {
        /// The rejected tolerance.
        got: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`SolverError`] variants.
    enum SolverErrorCode for SolverError {
        /// The cost tolerance was negative, infinite, or NaN.
        InvalidTolerance => InvalidTolerance { .. } => "SOLVER_INVALID_TOLERANCE",
    }
}

/// Convenient alias for results returned by graph construction and queries.
pub type Result<T> = core::result::Result<T, GraphError>;
