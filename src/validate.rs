//! Deterministic validation of witness cycles.
//!
//! The solver never returns a partial result, so a witness can be checked in
//! one linear pass: right length, all vertices distinct, and an edge under
//! every consecutive pair including the closing one.

use crate::graph::AdjacencyTable;
use crate::vset::VertexSet;

/// Checks that `cycle` is a Hamiltonian cycle of the graph.
///
/// # Errors
/// Returns a description of the first violated condition.
pub fn validate_cycle(table: &AdjacencyTable, cycle: &[usize]) -> Result<(), String> {
    let n = table.order();
    if cycle.len() != n {
        return Err(format!(
            "cycle visits {} vertices, graph has {n}",
            cycle.len()
        ));
    }
    if n < 3 {
        return Err(format!("no graph of order {n} has a cycle"));
    }

    let mut visited = VertexSet::EMPTY;
    for &v in cycle {
        if v >= n {
            return Err(format!("vertex {v} is out of range for order {n}"));
        }
        if visited.contains(v) {
            return Err(format!("vertex {v} appears more than once"));
        }
        visited = visited.insert(v);
    }

    for i in 0..n {
        let u = cycle[i];
        let v = cycle[(i + 1) % n];
        if !table.has_edge(u, v) {
            return Err(format!("consecutive vertices {u} and {v} are not adjacent"));
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
