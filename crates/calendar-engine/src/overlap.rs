//! Group a day's events into clusters of time-overlapping events.
//!
//! Two events overlap when `a.start < b.end && a.end > b.start`. Events that
//! merely touch (one ends exactly when the other starts) do not overlap.
//!
//! [`group_overlapping`] is the single forward sweep that existing week-view
//! layouts are built on. For input sorted by start it yields the connected
//! components of the overlap graph. For unsorted input it can under-merge:
//! an event skipped early in the sweep is never reconsidered, even if a member
//! added later overlaps it. [`group_connected`] computes the components
//! regardless of input order.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Which clustering algorithm a layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    /// One forward sweep per cluster; see [`group_overlapping`].
    #[default]
    Chained,
    /// Full connected components; see [`group_connected`].
    Connected,
}

impl GroupingStrategy {
    pub fn group(self, events: &[Event]) -> Vec<Vec<Event>> {
        match self {
            GroupingStrategy::Chained => group_overlapping(events),
            GroupingStrategy::Connected => group_connected(events),
        }
    }
}

/// Half-open interval overlap between two events.
pub fn events_overlap(a: &Event, b: &Event) -> bool {
    a.start < b.end && a.end > b.start
}

/// Sort events by start time. Equal starts keep their input order.
pub fn sort_by_start(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start);
    sorted
}

/// Partition `events` into clusters by chained overlap.
///
/// Expects `events` sorted by start (see [`sort_by_start`]). Each unclaimed
/// event opens a cluster; the remaining unclaimed events are then scanned
/// once, in order, and any that overlaps a current member of the cluster
/// joins it. A member that joins mid-scan can pull in events later in the
/// scan, but the scan never restarts. Clusters come out in the order they
/// were opened and members in the order they joined.
pub fn group_overlapping(events: &[Event]) -> Vec<Vec<Event>> {
    let mut claimed = vec![false; events.len()];
    let mut clusters = Vec::new();

    for (i, seed) in events.iter().enumerate() {
        if claimed[i] {
            continue;
        }
        claimed[i] = true;
        let mut cluster = vec![seed.clone()];

        for (j, other) in events.iter().enumerate() {
            if claimed[j] {
                continue;
            }
            if cluster.iter().any(|member| events_overlap(member, other)) {
                cluster.push(other.clone());
                claimed[j] = true;
            }
        }

        clusters.push(cluster);
    }

    clusters
}

/// Partition `events` into the connected components of the overlap graph.
///
/// Unlike [`group_overlapping`] the result does not depend on input order
/// beyond the ordering of the output: clusters are ordered by the position of
/// their first member in `events`, and members keep their input order.
pub fn group_connected(events: &[Event]) -> Vec<Vec<Event>> {
    let mut sets = DisjointSets::new(events.len());
    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            if events_overlap(&events[i], &events[j]) {
                sets.union(i, j);
            }
        }
    }

    let mut cluster_of_root: Vec<Option<usize>> = vec![None; events.len()];
    let mut clusters: Vec<Vec<Event>> = Vec::new();
    for (i, event) in events.iter().enumerate() {
        let root = sets.find(i);
        let slot = *cluster_of_root[root].get_or_insert_with(|| {
            clusters.push(Vec::new());
            clusters.len() - 1
        });
        clusters[slot].push(event.clone());
    }

    clusters
}

/// Union-find over event indices, with path halving and union by size.
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}
