use crate::segmentation::Segmentation;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;
use voxgrid::{Position, NEIGHBORS};

/// An entry on the A* frontier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Node {
	index: usize,
	/// Estimated cost of a path through this node, `g + h`.
	f: i64,
	/// Cost of the best known path from the source.
	g: i64,
	/// Heuristic estimate of the remaining cost to the target.
	h: i64
}

// BinaryHeap is a max-heap: lower f ranks higher, then lower h.
impl Ord for Node {
	fn cmp(&self, other: &Self) -> Ordering {
		other.f.cmp(&self.f)
			.then_with(|| other.h.cmp(&self.h))
			.then_with(|| self.index.cmp(&other.index))
	}
}

impl PartialOrd for Node {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Decides whether two full resolution voxels are joined by same-label voxels.
///
/// The search moves through the 26-neighborhood at a cost of the squared step length and
/// is guided by the squared Euclidean distance to the target. It gives up as soon as the
/// cheapest frontier entry is estimated above `max_expansion` times the distance between
/// the endpoints, so long detours count as disconnected even when a path exists.
#[derive(Copy, Clone, Debug)]
pub struct Reachability<'s> {
	segmentation: Segmentation<'s>,
	max_expansion: f64
}

impl<'s> Reachability<'s> {
	pub fn new(segmentation: Segmentation<'s>, max_expansion: f64) -> Self {
		Reachability { segmentation, max_expansion }
	}

	/// Runs the bounded search from `source` to `target`, both full resolution linear indices.
	/// Both ends and every voxel in between must be labelled `label`.
	pub fn reachable(&self, label: i64, source: usize, target: usize) -> bool {
		let grid = self.segmentation.grid();

		if !self.segmentation.is(source, label) || !self.segmentation.is(target, label) {
			return false;
		}

		let goal = grid.position(target);
		let heuristic = |position: Position| position.distance_squared(goal);

		let h = heuristic(grid.position(source));
		let limit = (self.max_expansion * h as f64) as i64;

		let mut open = BinaryHeap::new();
		let mut best: FxHashMap<usize, i64> = FxHashMap::default();
		let mut closed: FxHashSet<usize> = FxHashSet::default();

		open.push(Node { index: source, f: h, g: 0, h });
		best.insert(source, 0);

		while let Some(current) = open.pop() {
			if current.index == target {
				trace!(label, source, target, expanded = closed.len(), "reachable");
				return true;
			}

			// A cheaper path to this node was queued after this entry.
			if best.get(&current.index) != Some(&current.g) {
				continue;
			}

			if current.f > limit {
				break;
			}

			closed.insert(current.index);

			let position = grid.position(current.index);

			for step in NEIGHBORS.iter() {
				let successor = match grid.index(position.offset(step.dz as i64, step.dy as i64, step.dx as i64)) {
					Some(successor) => successor,
					None => continue
				};

				if !self.segmentation.is(successor, label) || closed.contains(&successor) {
					continue;
				}

				let g = current.g + step.cost();

				if let Some(&known) = best.get(&successor) {
					if g >= known {
						continue;
					}
				}

				let h = heuristic(grid.position(successor));

				open.push(Node { index: successor, f: g + h, g, h });
				best.insert(successor, g);
			}
		}

		trace!(label, source, target, expanded = closed.len(), limit, "not reachable");
		false
	}
}
