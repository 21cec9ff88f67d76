//! # semiring-graph: Graph Analytics as Sparse Linear Algebra
//!
//! Classic graph algorithms written as sequences of GraphBLAS-style
//! operations over sparse matrices and vectors, instead of explicit
//! traversal with adjacency lists and queues.
//!
//! ## The Core Insight
//!
//! A graph *is* its adjacency matrix, and one step of "follow every edge
//! out of a set of vertices" is one vector-matrix multiply. Changing the
//! semiring changes the algorithm:
//!
//! ```text
//! Algorithm            Semiring (⊕, ⊗)      Loop
//! ───────────────────  ───────────────────  ─────────────────────────────
//! BFS levels           (OR, AND)            frontier⟨¬visited⟩ = frontier ⊕.⊗ A
//! Shortest paths       (MIN, PLUS)          d = d min (d min.+ A), ≤ n times
//! Triangle counting    (PLUS, AND→count)    P⟨G⟩ = G plus.and G, rowsum / 2
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`graphblas`] | typed sparse matrix/vector, semirings, masks, descriptors, `grb_*` ops |
//! | [`bfs`] | single- and multi-source BFS levels |
//! | [`shortest_paths`] | single- and multi-source shortest paths (Bellman-Ford) |
//! | [`triangle_count`] | per-vertex triangle participation |
//! | [`weights`] | integer vs. floating weight-domain policy for shortest paths |
//!
//! ## Example
//!
//! ```rust
//! use semiring_graph::{bfs, AnyMatrix, GrBMatrix};
//!
//! // 0 -> 1 -> 2
//! let graph = GrBMatrix::from_triples(3, 3, &[0, 1], &[1, 2], &[true, true])?;
//! let levels = bfs(&AnyMatrix::from(graph), 0)?;
//! assert_eq!(levels, vec![0, 1, 2]);
//! # Ok::<(), semiring_graph::GraphError>(())
//! ```

// === Algebra core ===
pub mod graphblas;

// === Algorithms ===
pub mod bfs;
pub mod shortest_paths;
pub mod triangle_count;
pub mod weights;

mod validate;

// ========================================================================
// Re-exports
// ========================================================================

pub use graphblas::{
    AnyMatrix, BinaryOp, Descriptor, Element, GrBDesc, GrBIndex, GrBMatrix, GrBType, GrBVector,
    Indices, LorLand, MinPlus, Monoid, PlusLand, Semiring,
};
pub use bfs::{bfs, multi_source_bfs, UNREACHED};
pub use shortest_paths::{mssp, mssp_with_config, sssp, sssp_with_config, Distances};
pub use triangle_count::triangle_count;
pub use weights::{select_weight_domain, WeightDomain};

// ========================================================================
// Error types
// ========================================================================

/// Error types for sparse algebra and graph algorithms
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Index {index} out of bounds (size {bound})")]
    InvalidIndex { index: usize, bound: usize },

    #[error("Adjacency matrix of the graph must be square, got {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    #[error("No vertex with number {vertex} (graph has {order} vertices)")]
    InvalidVertex { vertex: usize, order: usize },

    #[error("Unsupported graph type: {found}. Expected type: {expected}")]
    InvalidType { found: GrBType, expected: &'static str },

    #[error("Edge ({row}, {col}) has a weight no path domain can represent")]
    InvalidWeight { row: usize, col: usize },

    #[error("There is a negative cycle reachable from vertex {start_vertex}")]
    NegativeCycle { start_vertex: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;

// ========================================================================
// Configuration
// ========================================================================

/// Configuration for the shortest-path weight domain
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// "Infinity" for the integer domain; integer weights are only used
    /// while `order * max|w|` stays strictly below it (default: `i64::MAX`)
    pub integer_sentinel: i64,
    /// Always relax in `f64` with `+∞` as the sentinel
    pub force_float: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            integer_sentinel: i64::MAX,
            force_float: false,
        }
    }
}
