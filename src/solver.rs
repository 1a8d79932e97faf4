//! Solver facade: strategy selection, configuration, and the public
//! find-cycle entry points.
//!
//! "No cycle exists" is a successful outcome, never an error. The only error
//! conditions are the explicit 63-vertex capacity bound and an armed
//! deadline running out.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;

use crate::graph::AdjacencyTable;
use crate::{backtrack, expand, stitch, validate};

// ============================================================================
// Strategy
// ============================================================================

/// The two interchangeable search strategies.
///
/// Both honor the identical contract; they differ only in their time/space
/// trade-off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Meet-in-the-middle dynamic programming over bitmask-compressed path
    /// signatures. Memory grows toward `C(N, N/2)` dictionary entries on
    /// dense graphs; strongest on sparse ones.
    CompressedPathSearch,
    /// Exhaustive depth-first search anchored at vertex 0. O(N) auxiliary
    /// space, exponential worst-case time; the better fit for dense graphs.
    Backtracking,
}

impl Strategy {
    /// Average degree above which the dictionary's growth usually makes
    /// backtracking the better choice.
    pub const DENSE_CUTOFF: f64 = 3.5;

    /// Returns the strategy's wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::CompressedPathSearch => "compressed-path-search",
            Strategy::Backtracking => "backtracking",
        }
    }

    /// Picks the strategy better suited to the graph's density. Advisory
    /// only; both strategies remain directly selectable.
    pub fn preferred_for(table: &AdjacencyTable) -> Strategy {
        if table.average_degree() > Self::DENSE_CUTOFF {
            Strategy::Backtracking
        } else {
            Strategy::CompressedPathSearch
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "compressed-path-search" => Ok(Strategy::CompressedPathSearch),
            "backtracking" => Ok(Strategy::Backtracking),
            other => Err(format!(
                "unknown strategy {other:?} (expected \"compressed-path-search\" or \"backtracking\")"
            )),
        }
    }
}

// ============================================================================
// Errors and deadline
// ============================================================================

/// Failure modes of a solver invocation.
///
/// "No Hamiltonian cycle exists" is not among them; that is the `Ok(None)`
/// outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The graph exceeds the 63-vertex capacity of the bitset
    /// representation. Reported explicitly; indices are never truncated.
    TooManyVertices {
        /// The offending graph order.
        n: usize,
    },
    /// The configured deadline ran out before the search finished.
    DeadlineExpired,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::TooManyVertices { n } => write!(
                f,
                "graph has {n} vertices; the bitset path index supports at most 63"
            ),
            SolveError::DeadlineExpired => {
                write!(f, "deadline expired before the search could finish")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Amortized deadline checker threaded through the expander, stitcher, and
/// backtracking walk.
#[derive(Debug)]
pub(crate) struct Deadline {
    at: Option<Instant>,
    ticks: u32,
}

impl Deadline {
    /// The clock is read once per this many units of work.
    const STRIDE: u32 = 1024;

    pub(crate) fn new(limit: Option<Duration>) -> Self {
        Self {
            // A limit too large to represent is no limit at all.
            at: limit.and_then(|d| Instant::now().checked_add(d)),
            ticks: 0,
        }
    }

    /// Counts one unit of work.
    ///
    /// # Errors
    /// Returns [`SolveError::DeadlineExpired`] once the deadline has passed.
    #[inline]
    pub(crate) fn check(&mut self) -> Result<(), SolveError> {
        let Some(at) = self.at else {
            return Ok(());
        };
        if self.ticks % Self::STRIDE == 0 && Instant::now() >= at {
            return Err(SolveError::DeadlineExpired);
        }
        self.ticks = self.ticks.wrapping_add(1);
        Ok(())
    }
}

// ============================================================================
// Solver
// ============================================================================

/// A configured solver. The zero-config entry point is [`find_cycle`].
#[derive(Clone, Debug)]
pub struct Solver {
    strategy: Strategy,
    deadline: Option<Duration>,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            strategy: Strategy::CompressedPathSearch,
            deadline: None,
        }
    }
}

impl Solver {
    /// Creates a solver using the given strategy and no deadline.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            deadline: None,
        }
    }

    /// Arms a deadline. Worst-case time and memory are exponential in the
    /// graph order, so long-running searches can be bounded; expiry yields
    /// [`SolveError::DeadlineExpired`] rather than a wrong answer.
    pub fn with_deadline(mut self, limit: Duration) -> Self {
        self.deadline = Some(limit);
        self
    }

    /// Returns the configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Searches for a Hamiltonian cycle through the caller's elements.
    ///
    /// `adjacent` must be symmetric and irreflexive; violations are the
    /// caller's undefined behavior, not validated here. The predicate is
    /// evaluated O(N²) times, so it should be cheap.
    ///
    /// On success the returned ordering contains every element exactly once,
    /// and every consecutive pair (including last back to first) is
    /// adjacent. `Ok(None)` means no Hamiltonian cycle exists.
    ///
    /// # Errors
    /// [`SolveError::TooManyVertices`] for more than 63 elements;
    /// [`SolveError::DeadlineExpired`] if an armed deadline runs out.
    pub fn find_cycle<T, F>(
        &self,
        elements: Vec<T>,
        adjacent: F,
    ) -> Result<Option<Vec<T>>, SolveError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let table = AdjacencyTable::from_predicate(&elements, adjacent)?;
        match self.find_cycle_indices(&table)? {
            Some(order) => Ok(Some(reorder(elements, &order))),
            None => Ok(None),
        }
    }

    /// Index-level entry point: searches a prebuilt adjacency table and
    /// returns the cycle as vertex indices. Callers whose vertices already
    /// are indices `0..n` can skip the value translation entirely.
    ///
    /// # Errors
    /// [`SolveError::DeadlineExpired`] if an armed deadline runs out.
    pub fn find_cycle_indices(
        &self,
        table: &AdjacencyTable,
    ) -> Result<Option<Vec<usize>>, SolveError> {
        let n = table.order();
        if n < 3 {
            return Ok(None);
        }
        if table.min_degree() < 2 {
            debug!("degree pre-check: a vertex with degree < 2 rules out any cycle");
            return Ok(None);
        }

        debug!("searching {n}-vertex graph with {}", self.strategy);
        let mut deadline = Deadline::new(self.deadline);
        let raw = match self.strategy {
            Strategy::Backtracking => backtrack::search(table, &mut deadline)?,
            Strategy::CompressedPathSearch => {
                let threshold = (n + 2).div_ceil(2);
                let keep = (n + 2) - threshold;
                let dict = expand::build_dictionary(table, threshold, keep, &mut deadline)?;
                stitch::stitch(&dict, n, threshold, &mut deadline)?
            }
        };

        let result = raw.map(|cycle| cycle.iter().map(|&v| v as usize).collect::<Vec<_>>());
        if let Some(cycle) = &result {
            debug_assert!(
                validate::validate_cycle(table, cycle).is_ok(),
                "solver produced an invalid witness"
            );
        }
        Ok(result)
    }
}

/// Searches with the default configuration (compressed path search, no
/// deadline). See [`Solver::find_cycle`].
///
/// # Errors
/// [`SolveError::TooManyVertices`] for more than 63 elements.
pub fn find_cycle<T, F>(elements: Vec<T>, adjacent: F) -> Result<Option<Vec<T>>, SolveError>
where
    F: FnMut(&T, &T) -> bool,
{
    Solver::default().find_cycle(elements, adjacent)
}

/// Reorders the owned elements along the witness index sequence.
fn reorder<T>(elements: Vec<T>, order: &[usize]) -> Vec<T> {
    debug_assert_eq!(elements.len(), order.len());
    let mut slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(order.len());
    for &i in order {
        if let Some(value) = slots[i].take() {
            out.push(value);
        }
    }
    debug_assert_eq!(out.len(), slots.len(), "witness must be a permutation");
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_cycle;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    const STRATEGIES: [Strategy; 2] = [Strategy::CompressedPathSearch, Strategy::Backtracking];

    fn ring_edges(n: usize) -> Vec<(usize, usize)> {
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }

    fn complete_edges(n: usize) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                edges.push((u, v));
            }
        }
        edges
    }

    fn table(n: usize, edges: &[(usize, usize)]) -> AdjacencyTable {
        AdjacencyTable::from_edges(n, edges).unwrap()
    }

    /// Runs one strategy and validates any witness before reporting
    /// existence.
    fn exists(strategy: Strategy, table: &AdjacencyTable) -> bool {
        match Solver::new(strategy).find_cycle_indices(table).unwrap() {
            Some(cycle) => {
                validate_cycle(table, &cycle).unwrap();
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Concrete scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn four_ring_has_a_cycle() {
        let t = table(4, &ring_edges(4));
        for s in STRATEGIES {
            assert!(exists(s, &t), "{s} missed the 4-ring cycle");
        }
    }

    #[test]
    fn two_disjoint_edges_have_no_cycle() {
        let t = table(4, &[(0, 1), (2, 3)]);
        for s in STRATEGIES {
            assert!(!exists(s, &t));
        }
    }

    #[test]
    fn triangle_with_isolated_vertex_has_no_cycle() {
        let t = table(4, &[(0, 1), (1, 2), (2, 0)]);
        for s in STRATEGIES {
            assert!(!exists(s, &t));
        }
    }

    #[test]
    fn complete_graph_on_five_has_a_cycle() {
        let t = table(5, &complete_edges(5));
        for s in STRATEGIES {
            assert!(exists(s, &t));
        }
    }

    #[test]
    fn ring_at_capacity_boundary() {
        let t = table(63, &ring_edges(63));
        for s in STRATEGIES {
            assert!(exists(s, &t), "{s} failed on the 63-vertex ring");
        }
    }

    #[test]
    fn oversized_ring_is_a_capacity_failure_not_a_wrong_answer() {
        let elements: Vec<usize> = (0..64).collect();
        let result = find_cycle(elements, |&a, &b| {
            a.abs_diff(b) == 1 || a.abs_diff(b) == 63
        });
        assert_eq!(result, Err(SolveError::TooManyVertices { n: 64 }));
    }

    #[test]
    fn degenerate_orders_have_no_cycle() {
        for n in 0..3 {
            let t = table(n, &[]);
            for s in STRATEGIES {
                assert!(!exists(s, &t), "{s} must reject order {n} before searching");
            }
        }
    }

    #[test]
    fn degree_pre_check_rejects_star() {
        let t = table(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        for s in STRATEGIES {
            assert!(!exists(s, &t));
        }
    }

    #[test]
    fn petersen_graph_is_not_hamiltonian() {
        let edges = [
            (0, 1), (1, 2), (2, 3), (3, 4), (4, 0), // outer ring
            (0, 5), (1, 6), (2, 7), (3, 8), (4, 9), // spokes
            (5, 7), (7, 9), (9, 6), (6, 8), (8, 5), // inner star
        ];
        let t = table(10, &edges);
        for s in STRATEGIES {
            assert!(!exists(s, &t), "{s} found a cycle in the Petersen graph");
        }
    }

    #[test]
    fn petersen_plus_one_edge_is_hamiltonian() {
        let edges = [
            (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
            (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
            (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
            (0, 6), // the extra chord
        ];
        let t = table(10, &edges);
        for s in STRATEGIES {
            assert!(exists(s, &t));
        }
    }

    #[test]
    fn three_regular_example_is_hamiltonian() {
        // 0-1-5-3-2-4-7-6-0 is one witness.
        let edges = [
            (0, 1), (0, 5), (0, 6), (1, 2), (1, 5), (2, 3), (2, 4),
            (3, 4), (3, 5), (4, 7), (5, 6), (6, 7),
        ];
        let t = table(8, &edges);
        for s in STRATEGIES {
            assert!(exists(s, &t));
        }
    }

    #[test]
    fn well_connected_graph_without_a_cycle() {
        // Every degree is >= 2, so only the search itself can answer.
        let edges = [
            (0, 1), (0, 4), (1, 2), (1, 3), (1, 5), (1, 6), (2, 4),
            (2, 5), (2, 6), (3, 4), (4, 5), (5, 6),
        ];
        let t = table(7, &edges);
        assert!(t.min_degree() >= 2);
        for s in STRATEGIES {
            assert!(!exists(s, &t));
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    #[test]
    fn strategies_agree_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0xDEADBEEF);
        for _ in 0..60 {
            let n = rng.random_range(4..=14);
            let p = rng.random_range(0.15..0.6);
            let t = AdjacencyTable::random(n, p, &mut rng).unwrap();

            let compressed = exists(Strategy::CompressedPathSearch, &t);
            let backtracked = exists(Strategy::Backtracking, &t);
            assert_eq!(
                compressed, backtracked,
                "strategies disagree on a {n}-vertex graph with {} edges",
                t.edge_count()
            );
        }
    }

    #[test]
    fn existence_is_deterministic_and_witness_reproducible() {
        let mut rng = XorShiftRng::seed_from_u64(0xFACE);
        let t = AdjacencyTable::random(12, 0.45, &mut rng).unwrap();
        let solver = Solver::default();

        let first = solver.find_cycle_indices(&t).unwrap();
        for _ in 0..5 {
            assert_eq!(solver.find_cycle_indices(&t).unwrap(), first);
        }
    }

    #[test]
    fn witnesses_are_valid_cycles() {
        let mut rng = XorShiftRng::seed_from_u64(0x1234);
        for _ in 0..40 {
            let n = rng.random_range(5..=12);
            let t = AdjacencyTable::random(n, 0.5, &mut rng).unwrap();
            for s in STRATEGIES {
                if let Some(cycle) = Solver::new(s).find_cycle_indices(&t).unwrap() {
                    validate_cycle(&t, &cycle).unwrap();
                }
            }
        }
    }

    #[test]
    fn deadline_expiry_is_distinguished() {
        let t = table(12, &complete_edges(12));
        for s in STRATEGIES {
            let solver = Solver::new(s).with_deadline(Duration::ZERO);
            assert_eq!(
                solver.find_cycle_indices(&t).unwrap_err(),
                SolveError::DeadlineExpired
            );
        }
    }

    #[test]
    fn unarmed_solver_has_no_deadline() {
        let t = table(6, &ring_edges(6));
        let solver = Solver::new(Strategy::CompressedPathSearch);
        assert!(solver.find_cycle_indices(&t).unwrap().is_some());
    }

    // -------------------------------------------------------------------------
    // Value translation
    // -------------------------------------------------------------------------

    #[test]
    fn witness_is_expressed_in_caller_values() {
        let stations = vec!["north", "east", "south", "west"];
        let connected = [
            ("north", "east"),
            ("east", "south"),
            ("south", "west"),
            ("west", "north"),
        ];
        let adjacent = |a: &&str, b: &&str| {
            connected
                .iter()
                .any(|&(u, v)| (u, v) == (*a, *b) || (v, u) == (*a, *b))
        };

        let cycle = find_cycle(stations.clone(), adjacent).unwrap().unwrap();
        assert_eq!(cycle.len(), 4);
        let mut sorted = cycle.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, {
            let mut s = stations;
            s.sort_unstable();
            s
        });
        for i in 0..cycle.len() {
            let next = cycle[(i + 1) % cycle.len()];
            assert!(adjacent(&cycle[i], &next), "consecutive stations must connect");
        }
    }

    // -------------------------------------------------------------------------
    // Strategy naming and selection
    // -------------------------------------------------------------------------

    #[test]
    fn strategy_names_round_trip() {
        for s in STRATEGIES {
            assert_eq!(s.name().parse::<Strategy>().unwrap(), s);
            assert_eq!(s.to_string(), s.name());
        }
    }

    #[test]
    fn unknown_strategy_name_is_rejected() {
        let err = "simulated-annealing".parse::<Strategy>().unwrap_err();
        assert!(err.contains("unknown strategy"));
        assert!(err.contains("compressed-path-search"));
    }

    #[test]
    fn density_heuristic_picks_by_average_degree() {
        let sparse = table(8, &ring_edges(8)); // average degree 2
        assert_eq!(
            Strategy::preferred_for(&sparse),
            Strategy::CompressedPathSearch
        );

        let dense = table(8, &complete_edges(8)); // average degree 7
        assert_eq!(Strategy::preferred_for(&dense), Strategy::Backtracking);
    }

    #[test]
    fn solve_error_messages_name_the_condition() {
        let capacity = SolveError::TooManyVertices { n: 64 };
        assert!(capacity.to_string().contains("64"));
        assert!(capacity.to_string().contains("63"));
        assert!(SolveError::DeadlineExpired.to_string().contains("deadline"));
    }
}
