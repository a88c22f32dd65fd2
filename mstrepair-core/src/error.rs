//! Error types for the MST repair core.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::edge::Edge;

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

/// Error type produced by [`crate::Graph`] construction and queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A self-loop was inserted while the graph rejects them.
    #[error("self-loop on vertex {vertex} rejected by the configured policy")]
    SelfLoop {
        /// The vertex both endpoints referred to.
        vertex: usize,
    },
    /// The edge passed to a repair query is not a member of the supplied tree.
    #[error("edge {edge} is not part of the supplied spanning tree")]
    EdgeNotInTree {
        /// The edge that could not be found.
        edge: Edge,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index fell outside `[0, vertex_count)`.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// A self-loop was inserted while the graph rejects them.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The edge passed to a repair query is not a member of the tree.
        EdgeNotInTree => EdgeNotInTree { .. } => "GRAPH_EDGE_NOT_IN_TREE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Returns an error when `vertex` is not a valid index for `vertex_count`.
pub(crate) const fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::InvalidVertex {
            vertex,
            vertex_count,
        })
    }
}
