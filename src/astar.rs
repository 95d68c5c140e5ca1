//! Generic observed A* search.
//!
//! This module implements a variant of the classic priority search in which
//! every bookkeeping step is visible to the caller: an observer closure
//! receives an event whenever a node enters the open set or finishes
//! expanding, and an interrupt closure is polled once per iteration so a
//! cooperative caller can stop a long search.
//!
//! Ordering is fully deterministic. The priority key is `(f, serial)` where
//! `serial` is a strictly increasing counter assigned at enqueue time, so
//! nodes with equal f score leave the open set in FIFO order and no ordering
//! between the nodes themselves is ever needed.

use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Bookkeeping step reported to the observer while a search runs.
#[derive(Debug)]
pub enum SearchEvent<'a, N> {
    /// The node entered the open set.
    Queued(&'a N),
    /// The node left the open set and all its successors have been relaxed.
    /// Fired once per outer iteration.
    Expanded(&'a N),
}

/// Terminal state of an observed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchRun<N, C> {
    /// The success predicate held for a popped node; holds the start-to-goal
    /// node sequence and its cost.
    Found(Vec<N>, C),
    /// The open set ran dry without the success predicate ever holding.
    Exhausted,
    /// The interrupt closure reported a stop request.
    Interrupted,
}

/// Open set entry. The node itself lives in the parents map; the entry
/// carries its insertion index.
struct OpenEntry<K> {
    estimate: K,
    serial: u64,
    index: usize,
}

impl<K: PartialEq> PartialEq for OpenEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimate.eq(&other.estimate) && self.serial == other.serial
    }
}

impl<K: PartialEq> Eq for OpenEntry<K> {}

impl<K: Ord> PartialOrd for OpenEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for OpenEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: order by smallest estimate first, then by
        // earliest enqueue serial for FIFO behaviour among equal estimates.
        match other.estimate.cmp(&self.estimate) {
            Ordering::Equal => other.serial.cmp(&self.serial),
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, goal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(goal, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Runs an observed A* search from `start`.
///
/// `successors` yields `(node, edge cost)` pairs, `heuristic` the estimated
/// remaining cost (must not overestimate for the result to be optimal), and
/// `success` is evaluated when a node is popped. `observer` receives a
/// [SearchEvent] per bookkeeping step; `interrupted` is polled once per
/// iteration and ends the search with [SearchRun::Interrupted] when it
/// returns `true`.
///
/// g scores only ever decrease during a run. A node already in the open set
/// whose score improves is not re-pushed; it keeps its original heap
/// priority and is expanded with its up-to-date score.
pub fn astar_observed<N, C, FN, IN, FH, FS, FO, FI>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    mut observer: FO,
    mut interrupted: FI,
) -> SearchRun<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
    FO: FnMut(SearchEvent<'_, N>),
    FI: FnMut() -> bool,
{
    let mut open = BinaryHeap::new();
    let mut serial: u64 = 0;
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    let mut queued: FxHashSet<usize> = FxHashSet::default();

    parents.insert(start.clone(), (usize::MAX, C::zero()));
    queued.insert(0);
    open.push(OpenEntry {
        estimate: heuristic(start),
        serial,
        index: 0,
    });

    loop {
        if interrupted() {
            return SearchRun::Interrupted;
        }
        let Some(OpenEntry { index, .. }) = open.pop() else {
            break;
        };
        queued.remove(&index);
        let (node_successors, cost) = {
            let (node, &(_, cost)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return SearchRun::Found(path, cost);
            }
            (successors(node), cost)
        };
        for (successor, move_cost) in node_successors {
            let new_cost = cost + move_cost;
            match parents.entry(successor) {
                Vacant(e) => {
                    let estimate = new_cost + heuristic(e.key());
                    let n = e.index();
                    observer(SearchEvent::Queued(e.key()));
                    e.insert((index, new_cost));
                    serial += 1;
                    queued.insert(n);
                    open.push(OpenEntry {
                        estimate,
                        serial,
                        index: n,
                    });
                }
                Occupied(mut e) => {
                    // Strict improvement: record the better parent and score.
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        let n = e.index();
                        if !queued.contains(&n) {
                            let estimate = new_cost + heuristic(e.key());
                            observer(SearchEvent::Queued(e.key()));
                            serial += 1;
                            queued.insert(n);
                            open.push(OpenEntry {
                                estimate,
                                serial,
                                index: n,
                            });
                        }
                    }
                }
            }
        }
        let (node, _) = parents.get_index(index).unwrap();
        observer(SearchEvent::Expanded(node));
    }
    SearchRun::Exhausted
}
