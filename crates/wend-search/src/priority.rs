//! Priority-first (uniform-cost / A*) search over generic states.

use indexmap::IndexSet;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use wend_core::SearchError;

/// Bounds on a priority search.
///
/// The search itself has no timeout mechanism; if the state space is
/// not known to be finite, impose an expansion cap and treat its
/// exhaustion as unreachability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states to expand before giving up, or `None`
    /// for no bound.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No bound: the search runs until the goal is found or the
    /// frontier empties.
    pub const UNBOUNDED: SearchLimits = SearchLimits {
        max_expansions: None,
    };

    /// Cap the search at `max` expanded states.
    pub const fn expansions(max: usize) -> SearchLimits {
        SearchLimits {
            max_expansions: Some(max),
        }
    }
}

/// Frontier entry ordered by priority (estimated total cost).
///
/// `Ord` is reversed so `BinaryHeap` pops the cheapest entry first,
/// and compares only priority and cost — the state itself need not be
/// ordered.
struct Node<S> {
    priority: u64,
    cost: u64,
    state: S,
}

impl<S> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.cost == other.cost
    }
}

impl<S> Eq for Node<S> {}

impl<S> PartialOrd for Node<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Node<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then(other.cost.cmp(&self.cost))
    }
}

/// Find the minimum total cost from `start` to any state satisfying
/// `goal`.
///
/// `expand` yields `(neighbour, incremental cost)` pairs. `heuristic`
/// is a lower bound on the remaining cost and must be *admissible*
/// (never overestimate); pass `|_| 0` for plain uniform-cost search
/// (Dijkstra). The heuristic affects exploration order, never the
/// returned cost.
///
/// A state is expanded at most once: the explored set uses lazy
/// deletion, skipping stale frontier entries on pop instead of
/// decreasing keys in place. With an admissible heuristic the first
/// goal state popped is optimal.
///
/// Fails with [`SearchError::Unreachable`] when the frontier empties
/// or the expansion budget in `limits` runs out.
///
/// # Examples
///
/// Shortest path on an unobstructed line:
///
/// ```
/// use smallvec::smallvec;
/// use wend_search::{min_cost, SearchLimits};
///
/// let cost = min_cost(
///     0i64,
///     |&s| s == 5,
///     |&s| smallvec![(s - 1, 1), (s + 1, 1)],
///     |&s| s.abs_diff(5),
///     SearchLimits::expansions(1_000),
/// )
/// .unwrap();
/// assert_eq!(cost, 5);
/// ```
pub fn min_cost<S, G, E, H>(
    start: S,
    goal: G,
    expand: E,
    heuristic: H,
    limits: SearchLimits,
) -> Result<u64, SearchError>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    E: Fn(&S) -> SmallVec<[(S, u64); 8]>,
    H: Fn(&S) -> u64,
{
    let mut frontier = BinaryHeap::new();
    let mut explored: IndexSet<S> = IndexSet::new();
    let mut expanded = 0usize;

    frontier.push(Node {
        priority: heuristic(&start),
        cost: 0,
        state: start,
    });

    while let Some(Node { cost, state, .. }) = frontier.pop() {
        if goal(&state) {
            return Ok(cost);
        }
        if !explored.insert(state.clone()) {
            continue; // already expanded via a cheaper path
        }
        if limits.max_expansions.is_some_and(|max| expanded >= max) {
            return Err(SearchError::Unreachable { expanded });
        }
        expanded += 1;
        for (next, step) in expand(&state) {
            if explored.contains(&next) {
                continue;
            }
            let next_cost = cost + step;
            frontier.push(Node {
                priority: next_cost + heuristic(&next),
                cost: next_cost,
                state: next,
            });
        }
    }

    Err(SearchError::Unreachable { expanded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;
    use wend_core::{Bounds, Point};
    use wend_grid::DenseGrid;

    fn grid_expand(grid: &DenseGrid<u8>) -> impl Fn(&Point) -> SmallVec<[(Point, u64); 8]> + '_ {
        |&p| {
            p.orthogonal()
                .into_iter()
                .filter(|&n| grid.get(n).map_or(false, |c| *c == b'.'))
                .map(|n| (n, 1))
                .collect()
        }
    }

    #[test]
    fn straight_line_cost() {
        let grid = DenseGrid::new(Bounds::sized(5, 1), b'.').unwrap();
        let goal = Point::new(4, 0);
        let cost = min_cost(
            Point::new(0, 0),
            |&p| p == goal,
            grid_expand(&grid),
            |_| 0,
            SearchLimits::UNBOUNDED,
        )
        .unwrap();
        assert_eq!(cost, 4);
    }

    #[test]
    fn unreachable_goal_reports_expansion_count() {
        let mut grid = DenseGrid::new(Bounds::sized(5, 1), b'.').unwrap();
        grid.set(Point::new(2, 0), b'#').unwrap();
        let err = min_cost(
            Point::new(0, 0),
            |&p| p == Point::new(4, 0),
            grid_expand(&grid),
            |_| 0,
            SearchLimits::UNBOUNDED,
        )
        .unwrap_err();
        // Cells (0,0) and (1,0) are the whole reachable component.
        assert_eq!(err, SearchError::Unreachable { expanded: 2 });
    }

    #[test]
    fn expansion_budget_exhaustion_is_unreachable() {
        // Unbounded state space; an unguarded search would never stop.
        let err = min_cost(
            0i64,
            |&s| s == -1, // only negatives, expansion only goes up
            |&s| smallvec![(s + 1, 1u64)],
            |_| 0,
            SearchLimits::expansions(50),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::Unreachable { expanded: 50 });
    }

    #[test]
    fn goal_at_start_costs_nothing() {
        let cost = min_cost(
            7u32,
            |&s| s == 7,
            |_| smallvec![],
            |_| 0,
            SearchLimits::UNBOUNDED,
        )
        .unwrap();
        assert_eq!(cost, 0);
    }

    #[test]
    fn weighted_edges_prefer_cheap_detour() {
        // 0 -> 9 directly costs 100; stepping through 1..=9 costs 9.
        let cost = min_cost(
            0u32,
            |&s| s == 9,
            |&s| {
                let mut out: SmallVec<[(u32, u64); 8]> = smallvec![];
                if s == 0 {
                    out.push((9, 100));
                }
                if s < 9 {
                    out.push((s + 1, 1));
                }
                out
            },
            |_| 0,
            SearchLimits::UNBOUNDED,
        )
        .unwrap();
        assert_eq!(cost, 9);
    }

    proptest! {
        /// An admissible heuristic changes exploration order only;
        /// the minimum cost must match plain Dijkstra's.
        #[test]
        fn heuristic_does_not_change_cost(
            walls in proptest::collection::vec((0i64..6, 0i64..6), 0..10),
            gx in 0i64..6, gy in 0i64..6,
        ) {
            let mut grid = DenseGrid::new(Bounds::sized(6, 6), b'.').unwrap();
            for &(x, y) in &walls {
                grid.set(Point::new(x, y), b'#').unwrap();
            }
            let start = Point::new(0, 0);
            let goal = Point::new(gx, gy);
            prop_assume!(*grid.get(start).unwrap() == b'.');
            prop_assume!(*grid.get(goal).unwrap() == b'.');

            let plain = min_cost(
                start,
                |&p| p == goal,
                grid_expand(&grid),
                |_| 0,
                SearchLimits::UNBOUNDED,
            );
            let guided = min_cost(
                start,
                |&p| p == goal,
                grid_expand(&grid),
                |&p| p.manhattan(goal),
                SearchLimits::UNBOUNDED,
            );
            match (plain, guided) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                (a, b) => prop_assert!(false, "disagreement: {:?} vs {:?}", a, b),
            }
        }

        /// Unit-cost priority search agrees with the BFS flood.
        #[test]
        fn agrees_with_bfs_on_unit_grids(
            walls in proptest::collection::vec((0i64..6, 0i64..6), 0..10),
            gx in 0i64..6, gy in 0i64..6,
        ) {
            let mut grid = DenseGrid::new(Bounds::sized(6, 6), b'.').unwrap();
            for &(x, y) in &walls {
                grid.set(Point::new(x, y), b'#').unwrap();
            }
            let start = Point::new(0, 0);
            let goal = Point::new(gx, gy);
            prop_assume!(*grid.get(start).unwrap() == b'.');
            prop_assume!(*grid.get(goal).unwrap() == b'.');

            let map = crate::flood_distances(&grid, &[start], |_, c| *c == b'.').unwrap();
            let flood = *map.get(goal).unwrap();
            let searched = min_cost(
                start,
                |&p| p == goal,
                grid_expand(&grid),
                |&p| p.manhattan(goal),
                SearchLimits::UNBOUNDED,
            );
            match searched {
                Ok(cost) => prop_assert_eq!(cost, u64::from(flood)),
                Err(_) => prop_assert_eq!(flood, crate::UNREACHED),
            }
        }
    }
}
