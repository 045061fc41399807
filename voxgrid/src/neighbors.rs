use crate::grid::Grid;
use std::ops::Range;

/// A step to one of the 26 voxels sharing a face, edge, or corner with the origin.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Neighbor {
	pub dz: i8,
	pub dy: i8,
	pub dx: i8
}

impl Neighbor {
	const fn new(dz: i8, dy: i8, dx: i8) -> Self {
		Neighbor { dz, dy, dx }
	}

	/// Squared length of the step: 1 for a face, 2 for an edge, 3 for a corner.
	pub fn cost(self) -> i64 {
		let (dz, dy, dx) = (self.dz as i64, self.dy as i64, self.dx as i64);

		dz * dz + dy * dy + dx * dx
	}

	/// Flat array displacement of this step in the given grid.
	pub fn displacement(self, grid: Grid) -> isize {
		self.dz as isize * grid.sheet() as isize + self.dy as isize * grid.row() as isize + self.dx as isize
	}

	pub fn opposite(self) -> Neighbor {
		Neighbor::new(-self.dz, -self.dy, -self.dx)
	}
}

/// The 3x3x3 neighborhood minus its center, in ZYX lexicographic order.
/// Entries before the center step backwards in the flat array, entries after it step forwards.
pub const NEIGHBORS: [Neighbor; 26] = [
	Neighbor::new(-1, -1, -1), Neighbor::new(-1, -1,  0), Neighbor::new(-1, -1,  1),
	Neighbor::new(-1,  0, -1), Neighbor::new(-1,  0,  0), Neighbor::new(-1,  0,  1),
	Neighbor::new(-1,  1, -1), Neighbor::new(-1,  1,  0), Neighbor::new(-1,  1,  1),

	Neighbor::new( 0, -1, -1), Neighbor::new( 0, -1,  0), Neighbor::new( 0, -1,  1),
	Neighbor::new( 0,  0, -1), Neighbor::new( 0,  0,  1),
	Neighbor::new( 0,  1, -1), Neighbor::new( 0,  1,  0), Neighbor::new( 0,  1,  1),

	Neighbor::new( 1, -1, -1), Neighbor::new( 1, -1,  0), Neighbor::new( 1, -1,  1),
	Neighbor::new( 1,  0, -1), Neighbor::new( 1,  0,  0), Neighbor::new( 1,  0,  1),
	Neighbor::new( 1,  1, -1), Neighbor::new( 1,  1,  0), Neighbor::new( 1,  1,  1)
];

/// Neighbors with a negative flat displacement.
pub const BACKWARD: Range<usize> = 0..13;

/// Neighbors with a positive flat displacement. Walking only these from every voxel visits
/// each unordered pair of adjacent voxels exactly once.
pub const FORWARD: Range<usize> = 13..26;

/// Precomputed flat displacements of the 26 neighbors for one grid.
#[derive(Clone, Debug)]
pub struct NeighborOffsets {
	grid: Grid,
	offsets: [isize; 26]
}

impl NeighborOffsets {
	pub fn new(grid: Grid) -> Self {
		let mut offsets = [0; 26];

		for (offset, neighbor) in offsets.iter_mut().zip(NEIGHBORS.iter()) {
			*offset = neighbor.displacement(grid);
		}

		NeighborOffsets { grid, offsets }
	}

	pub fn grid(&self) -> Grid {
		self.grid
	}

	/// Flat displacement of neighbor `k`.
	pub fn offset(&self, k: usize) -> isize {
		self.offsets[k]
	}

	/// Returns the linear index of neighbor `k` of `index`. Returns `None` when the neighbor
	/// leaves the grid along any axis, so edge voxels never pair up with voxels on the
	/// opposite side of a row or sheet.
	pub fn neighbor(&self, index: usize, k: usize) -> Option<usize> {
		let step = NEIGHBORS[k];
		let position = self.grid.position(index).offset(step.dz as i64, step.dy as i64, step.dx as i64);

		if !self.grid.contains(position) {
			return None;
		}

		Some((index as isize + self.offsets[k]) as usize)
	}

	/// In-grid neighbors of `index` drawn from the given range of [`NEIGHBORS`].
	pub fn neighbors(&self, index: usize, range: Range<usize>) -> impl Iterator<Item=usize> + '_ {
		range.filter_map(move |k| self.neighbor(index, k))
	}

	pub fn forward(&self, index: usize) -> impl Iterator<Item=usize> + '_ {
		self.neighbors(index, FORWARD)
	}

	pub fn backward(&self, index: usize) -> impl Iterator<Item=usize> + '_ {
		self.neighbors(index, BACKWARD)
	}

	pub fn all(&self, index: usize) -> impl Iterator<Item=usize> + '_ {
		self.neighbors(index, 0..26)
	}
}
