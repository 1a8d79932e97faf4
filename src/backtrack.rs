//! Exhaustive depth-first search for a Hamiltonian cycle.
//!
//! Every Hamiltonian cycle passes through every vertex, so the walk is
//! anchored at vertex 0 without loss of generality. Auxiliary space is O(N):
//! one seen-set and the partial order. That makes this the better strategy
//! on dense graphs, where the compressed path search's dictionary would
//! balloon.

use crate::graph::AdjacencyTable;
use crate::solver::{Deadline, SolveError};
use crate::vset::VertexSet;

/// Runs the backtracking search. The caller guarantees `order >= 3`.
///
/// # Errors
/// Returns [`SolveError::DeadlineExpired`] if the deadline runs out.
pub(crate) fn search(
    table: &AdjacencyTable,
    deadline: &mut Deadline,
) -> Result<Option<Vec<u8>>, SolveError> {
    debug_assert!(table.order() >= 3);

    let mut walk = Walk {
        table,
        seen: VertexSet::singleton(0),
        order: Vec::with_capacity(table.order()),
    };
    walk.order.push(0);

    if walk.extend(deadline)? {
        Ok(Some(walk.order))
    } else {
        Ok(None)
    }
}

/// In-progress walk state; recursion depth is bounded by the graph order.
struct Walk<'a> {
    table: &'a AdjacencyTable,
    seen: VertexSet,
    order: Vec<u8>,
}

impl Walk<'_> {
    fn extend(&mut self, deadline: &mut Deadline) -> Result<bool, SolveError> {
        deadline.check()?;

        let here = self.order[self.order.len() - 1] as usize;
        if self.order.len() == self.table.order() {
            // Every vertex placed; the walk is a cycle iff it can close.
            return Ok(self.table.has_edge(here, 0));
        }

        for next in self.table.neighbors(here).iter() {
            if self.seen.contains(next) {
                continue;
            }
            self.seen = self.seen.insert(next);
            self.order.push(next as u8);
            if self.extend(deadline)? {
                return Ok(true);
            }
            self.order.pop();
            self.seen = self.seen.remove(next);
        }
        Ok(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
