//! Direction-aware reachability over a plain road list.
//!
//! Used by the generator to validate a candidate `(start, end)` pair before
//! the road list is frozen into a [`RoadNetwork`](crate::RoadNetwork), so it
//! works directly on `&[Road]`.
//!
//! The direction of each road is supplied by the caller through
//! `direction_of`, evaluated once per hop: every time the search scans a road
//! from a dequeued endpoint.  Passing `|r| r.direction` checks the roads as
//! generated; a closure that draws from an RNG re-rolls a road at every hop,
//! so the same road may be one-way when scanned from one end and two-way when
//! scanned from the other.
//!
//! The traversal is a breadth-first search with an index-based work queue
//! (a `Vec` plus a head cursor) and a visited bitmap; no recursion.

use rn_core::{Direction, NodeId, Road};

/// `true` if `to` can be reached from `from` travelling one-way roads
/// start→end only and two-way roads in either direction.
///
/// Roads whose endpoints fall outside `0..node_count` are ignored, as are
/// out-of-range query nodes (never reachable).  A node reaches itself.
pub fn is_reachable<F>(
    node_count: usize,
    roads: &[Road],
    from: NodeId,
    to: NodeId,
    mut direction_of: F,
) -> bool
where
    F: FnMut(&Road) -> Direction,
{
    if from.index() >= node_count || to.index() >= node_count {
        return false;
    }
    if from == to {
        return true;
    }

    // ── Incidence: road indices touching each node ─────────────────────────
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for (i, road) in roads.iter().enumerate() {
        if road.from.index() >= node_count || road.to.index() >= node_count || road.from == road.to {
            continue;
        }
        incident[road.from.index()].push(i);
        incident[road.to.index()].push(i);
    }

    // ── BFS ───────────────────────────────────────────────────────────────
    let mut visited = vec![false; node_count];
    let mut queue: Vec<NodeId> = Vec::with_capacity(node_count);
    visited[from.index()] = true;
    queue.push(from);

    let mut head = 0;
    while head < queue.len() {
        let node = queue[head];
        head += 1;

        for &i in &incident[node.index()] {
            let road = &roads[i];
            let direction = direction_of(road);
            let next = if road.from == node {
                road.to
            } else if direction.is_two_way() {
                road.from
            } else {
                continue;
            };
            if next == to {
                return true;
            }
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push(next);
            }
        }
    }

    false
}
