//! Builds the path dictionary one length at a time.
//!
//! Layer 2 holds the trivial two-vertex path of every edge. Each growth step
//! extends every stored path of the longest length at either endpoint with
//! each neighbor not already visited, and files the result under its new
//! (endpoints, visited) signature. In dense graphs the dictionary approaches
//! `C(N, N/2)` entries at the half-length threshold (the meet-in-the-middle
//! trade), so layers that neither growth nor stitching will read again are
//! dropped as soon as they are passed.

use log::debug;

use crate::graph::AdjacencyTable;
use crate::paths::{Layer, Path, PathDictionary};
use crate::solver::{Deadline, SolveError};
use crate::vset::VertexSet;

/// Builds all layers up to `threshold`, keeping the layer of length `keep`
/// alive for the stitcher even once growth has moved past it.
///
/// Stops early when a grown layer comes out empty: no simple path of that
/// length exists, so no longer one can either.
///
/// # Errors
/// Returns [`SolveError::DeadlineExpired`] if the deadline runs out.
pub(crate) fn build_dictionary(
    table: &AdjacencyTable,
    threshold: usize,
    keep: usize,
    deadline: &mut Deadline,
) -> Result<PathDictionary, SolveError> {
    let mut dict = PathDictionary::new(seed_layer(table));

    while dict.longest() < threshold {
        let grown_len = dict.longest() + 1;
        let next = match dict.layer(dict.longest()) {
            Some(layer) => grow_layer(layer, table, deadline)?,
            // Already discarded or never seeded; nothing left to extend.
            None => Layer::default(),
        };
        debug!(
            "layer {grown_len}: {} endpoint pairs, {} stored paths",
            next.pair_count(),
            next.path_count(),
        );

        let exhausted = next.is_empty();
        let passed = dict.longest();
        dict.install(grown_len, next);
        if passed != keep {
            dict.discard(passed);
        }
        if exhausted {
            debug!("no simple paths of length {grown_len}; expansion stopped early");
            break;
        }
    }

    Ok(dict)
}

/// Builds layer 2: the trivial path `[a, b]` for every edge `{a, b}`.
fn seed_layer(table: &AdjacencyTable) -> Layer {
    let mut layer = Layer::default();
    for a in 0..table.order() {
        for b in table.neighbors(a).iter() {
            if b > a {
                let ends = VertexSet::pair(a, b);
                layer.insert_if_absent(ends, ends, Box::new([a as u8, b as u8]));
            }
        }
    }
    layer
}

/// Extends every path of `layer` at both of its endpoints, producing the
/// layer one length up.
fn grow_layer(
    layer: &Layer,
    table: &AdjacencyTable,
    deadline: &mut Deadline,
) -> Result<Layer, SolveError> {
    let mut next = Layer::default();

    for (_, group) in layer.iter() {
        for (&visited, path) in group {
            deadline.check()?;

            let first = path[0] as usize;
            let last = path[path.len() - 1] as usize;
            extend_at(&mut next, table, visited, path, first, last, true);
            extend_at(&mut next, table, visited, path, last, first, false);
        }
    }

    Ok(next)
}

/// Extends `path` at the `end` endpoint with every unvisited neighbor; the
/// new endpoint pair is (`other`, neighbor).
fn extend_at(
    next: &mut Layer,
    table: &AdjacencyTable,
    visited: VertexSet,
    path: &Path,
    end: usize,
    other: usize,
    prepend: bool,
) {
    for w in table.neighbors(end).iter() {
        if visited.contains(w) {
            continue;
        }
        next.insert_if_absent(
            VertexSet::pair(other, w),
            visited.insert(w),
            extended(path, w as u8, prepend),
        );
    }
}

/// Returns a copy of `path` with `w` added at the chosen side.
fn extended(path: &[u8], w: u8, prepend: bool) -> Path {
    let mut out = Vec::with_capacity(path.len() + 1);
    if prepend {
        out.push(w);
        out.extend_from_slice(path);
    } else {
        out.extend_from_slice(path);
        out.push(w);
    }
    out.into_boxed_slice()
}

// ============================================================================
// Tests
// ============================================================================
