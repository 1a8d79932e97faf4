//! Combines two complementary half-length path layers into a full cycle.
//!
//! Two half-paths close a Hamiltonian cycle exactly when they share both
//! endpoints, overlap nowhere else, and together cover every vertex. With
//! bitmask signatures those three conditions collapse into two word
//! comparisons: `v1 | v2 == full` and `v1 & v2 == endpoints`.

use log::debug;

use crate::paths::PathDictionary;
use crate::solver::{Deadline, SolveError};
use crate::vset::VertexSet;

/// Searches layers `T` and `(n + 2) - T` for a pair of half-paths that close
/// a cycle, returning the spliced index sequence of the first match.
///
/// The two lengths sum to `n + 2` because the half-paths share both
/// endpoints. Missing or empty layers simply mean no witness of that
/// signature exists.
///
/// # Errors
/// Returns [`SolveError::DeadlineExpired`] if the deadline runs out.
pub(crate) fn stitch(
    dict: &PathDictionary,
    n: usize,
    threshold: usize,
    deadline: &mut Deadline,
) -> Result<Option<Vec<u8>>, SolveError> {
    let l1 = threshold;
    let l2 = (n + 2) - l1;
    let full = VertexSet::full(n);

    let (Some(long_layer), Some(short_layer)) = (dict.layer(l1), dict.layer(l2)) else {
        return Ok(None);
    };

    for (&ends, long_group) in long_layer.iter() {
        let Some(short_group) = short_layer.get(ends) else {
            continue;
        };
        for (&v1, long_path) in long_group {
            for (&v2, short_path) in short_group {
                deadline.check()?;
                if v1.union(v2) == full && v1.intersection(v2) == ends {
                    debug!("stitched lengths {l1} and {l2} at endpoints {ends:?}");
                    return Ok(Some(splice(long_path, short_path, n)));
                }
            }
        }
    }

    Ok(None)
}

/// Splices the short path's interior into the long path, oriented so the
/// shared endpoints line up. The short path's own endpoints are dropped;
/// they already sit at the long path's ends.
fn splice(long: &[u8], short: &[u8], n: usize) -> Vec<u8> {
    debug_assert!(short.len() >= 2);
    debug_assert_eq!(long.len() + short.len(), n + 2);

    let mut cycle = Vec::with_capacity(n);
    cycle.extend_from_slice(long);

    let interior = &short[1..short.len() - 1];
    if long[long.len() - 1] == short[0] {
        // Short path runs from the long path's tail back to its head.
        cycle.extend_from_slice(interior);
    } else {
        // Short path runs head-to-tail; walk its interior backwards.
        cycle.extend(interior.iter().rev().copied());
    }

    debug_assert_eq!(cycle.len(), n);
    cycle
}

// ============================================================================
// Tests
// ============================================================================
