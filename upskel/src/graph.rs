use crate::joints::JointSet;
use voxgrid::{Grid, NeighborOffsets, VoxelMask};

/// The transient state of one label: which coarse voxels hold skeleton points, and which
/// adjacent pairs of them survived the full resolution connectivity check.
///
/// A graph is built per label and dropped before the next, so nothing leaks between labels.
#[derive(Clone, Debug)]
pub struct SkeletonGraph {
	mask: VoxelMask,
	joints: JointSet
}

impl SkeletonGraph {
	/// Marks `points` in a fresh coarse grid sized mask. Points outside the grid are ignored.
	pub fn new(grid: Grid, points: &[usize]) -> Self {
		SkeletonGraph {
			mask: VoxelMask::from_indices(grid, points.iter().copied()),
			joints: JointSet::new()
		}
	}

	pub fn mask(&self) -> &VoxelMask {
		&self.mask
	}

	pub fn joints(&self) -> &JointSet {
		&self.joints
	}

	/// Whether a skeleton point sits at `index`.
	pub fn contains(&self, index: usize) -> bool {
		self.mask[index]
	}

	/// Offers every pair of adjacent skeleton points to `connected`, each pair once from its
	/// lower endpoint, and records the pairs it accepts. Returns the number of new joints.
	pub fn discover_edges<F>(&mut self, offsets: &NeighborOffsets, points: &[usize], mut connected: F) -> usize where F: FnMut(usize, usize) -> bool {
		debug_assert_eq!(offsets.grid(), self.mask.grid());

		let before = self.joints.len();

		for &source in points {
			for target in offsets.forward(source) {
				if !self.mask[target] || self.joints.contains(source, target) {
					continue;
				}

				if connected(source, target) {
					self.joints.insert(source, target);
				}
			}
		}

		self.joints.len() - before
	}
}
