//! Adjacency tables for small undirected graphs (order ≤ 63).
//!
//! The table is built once per solver invocation from the caller's adjacency
//! predicate and is the only place the `N <= 63` capacity bound is enforced.
//! Everything downstream works on indices that are already proven in range,
//! so no arithmetic narrowing can silently wrap.

use rand::Rng;

use crate::solver::SolveError;
use crate::vset::{VertexSet, MAX_VERTICES};

// ============================================================================
// AdjacencyTable
// ============================================================================

/// Neighbor sets of an undirected graph on vertices `0..order`.
///
/// Irreflexive by construction: the `i == j` pair is never evaluated, so no
/// vertex is ever its own neighbor. Symmetry of the caller's predicate is a
/// contract, not something the table validates; each unordered pair is
/// evaluated once and mirrored, so the table itself is always symmetric.
#[derive(Clone, Debug)]
pub struct AdjacencyTable {
    adj: Vec<VertexSet>,
}

impl AdjacencyTable {
    /// Builds the table by evaluating `adjacent` on every unordered pair of
    /// elements, `n * (n - 1) / 2` predicate calls in total, so the
    /// predicate should be cheap.
    ///
    /// # Errors
    /// Returns [`SolveError::TooManyVertices`] if `elements.len() > 63`,
    /// before any predicate evaluation.
    pub fn from_predicate<T, F>(elements: &[T], mut adjacent: F) -> Result<Self, SolveError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let n = elements.len();
        if n > MAX_VERTICES {
            return Err(SolveError::TooManyVertices { n });
        }

        let mut adj = vec![VertexSet::EMPTY; n];
        for i in 0..n {
            for j in (i + 1)..n {
                if adjacent(&elements[i], &elements[j]) {
                    adj[i] = adj[i].insert(j);
                    adj[j] = adj[j].insert(i);
                }
            }
        }
        Ok(Self { adj })
    }

    /// Builds a table from an explicit undirected edge list.
    ///
    /// # Errors
    /// Returns [`SolveError::TooManyVertices`] if `n > 63`.
    ///
    /// # Panics
    /// Panics in debug builds on an out-of-range endpoint or a self-loop.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, SolveError> {
        if n > MAX_VERTICES {
            return Err(SolveError::TooManyVertices { n });
        }

        let mut adj = vec![VertexSet::EMPTY; n];
        for &(u, v) in edges {
            debug_assert!(u < n && v < n, "edge ({u}, {v}) out of range for n={n}");
            debug_assert!(u != v, "self-loop at vertex {u}");
            adj[u] = adj[u].insert(v);
            adj[v] = adj[v].insert(u);
        }
        Ok(Self { adj })
    }

    /// Builds a random graph where each unordered pair is an edge with
    /// probability `p`.
    ///
    /// # Errors
    /// Returns [`SolveError::TooManyVertices`] if `n > 63`.
    pub fn random<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<Self, SolveError> {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        if n > MAX_VERTICES {
            return Err(SolveError::TooManyVertices { n });
        }

        let mut adj = vec![VertexSet::EMPTY; n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    adj[i] = adj[i].insert(j);
                    adj[j] = adj[j].insert(i);
                }
            }
        }
        Ok(Self { adj })
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.adj.len()
    }

    /// Returns the neighbor set of `v`.
    #[inline(always)]
    pub fn neighbors(&self, v: usize) -> VertexSet {
        debug_assert!(v < self.order());
        self.adj[v]
    }

    /// Returns whether the edge `(u, v)` exists.
    #[inline(always)]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.order() && v < self.order());
        self.adj[u].contains(v)
    }

    /// Returns the degree of vertex `v`.
    #[inline(always)]
    pub fn degree(&self, v: usize) -> usize {
        debug_assert!(v < self.order());
        self.adj[v].len()
    }

    /// Returns the smallest degree in the graph, or 0 for the empty graph.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.adj.iter().map(|s| s.len()).min().unwrap_or(0)
    }

    /// Returns the total number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|s| s.len()).sum::<usize>() / 2
    }

    /// Returns the average degree, `2E / N` (0.0 for the empty graph).
    #[inline]
    pub fn average_degree(&self) -> f64 {
        if self.adj.is_empty() {
            return 0.0;
        }
        (2 * self.edge_count()) as f64 / self.adj.len() as f64
    }

    /// Returns the set of all vertices of this graph.
    #[inline(always)]
    pub fn full_set(&self) -> VertexSet {
        VertexSet::full(self.order())
    }
}

// ============================================================================
// Tests
// ============================================================================
