use bit_vec::BitVec;
use crate::grid::Grid;
use std::ops::Index;

// Hackish constants for implementing Index on bit packed structures.
const FALSE_REF: &bool = &false;
const TRUE_REF:  &bool = &true;

pub trait Mask<P>: Index<P, Output=bool> {
	fn set_true(&mut self, index: P);
	fn set_false(&mut self, index: P);

	fn set(&mut self, index: P, value: bool) {
		if value {
			self.set_true(index)
		} else {
			self.set_false(index)
		}
	}

	fn count_ones(&self) -> u32;
	fn count_zeros(&self) -> u32;
}

/// One bit per voxel of a grid, addressed by linear index.
#[derive(Clone, Debug)]
pub struct VoxelMask {
	grid: Grid,
	bits: BitVec
}

impl VoxelMask {
	pub fn new(grid: Grid) -> Self {
		VoxelMask {
			grid,
			bits: BitVec::from_elem(grid.entries(), false)
		}
	}

	/// Creates a mask with the given indices set. Indices outside the grid are ignored.
	pub fn from_indices<I>(grid: Grid, indices: I) -> Self where I: IntoIterator<Item=usize> {
		let mut mask = VoxelMask::new(grid);

		for index in indices {
			if grid.contains_index(index) {
				mask.set_true(index);
			}
		}

		mask
	}

	pub fn grid(&self) -> Grid {
		self.grid
	}

	/// Returns the value at `index`, treating voxels outside the grid as unset.
	pub fn get(&self, index: usize) -> bool {
		self.bits.get(index).unwrap_or(false)
	}

	pub fn is_empty(&self) -> bool {
		self.bits.none()
	}
}

impl Mask<usize> for VoxelMask {
	fn set_true(&mut self, index: usize) {
		self.bits.set(index, true);
	}

	fn set_false(&mut self, index: usize) {
		self.bits.set(index, false);
	}

	fn count_ones(&self) -> u32 {
		self.bits.blocks().fold(0, |state, value| state + value.count_ones())
	}

	fn count_zeros(&self) -> u32 {
		self.bits.len() as u32 - self.count_ones()
	}
}

impl Index<usize> for VoxelMask {
	type Output = bool;

	fn index(&self, index: usize) -> &bool {
		if self.get(index) { TRUE_REF } else { FALSE_REF }
	}
}

#[cfg(test)]
mod tests {
	use super::{Mask, VoxelMask};
	use crate::grid::Grid;

	#[test]
	fn test_set_and_unset() {
		let mut mask = VoxelMask::new(Grid::new(3, 3, 3));

		assert!(mask.is_empty());
		assert_eq!(mask.count_zeros(), 27);

		mask.set_true(4);
		mask.set_true(26);
		mask.set(13, true);

		assert!(mask[4] && mask[13] && mask[26]);
		assert!(!mask[5]);
		assert_eq!(mask.count_ones(), 3);

		mask.set(13, false);
		assert!(!mask[13]);
		assert_eq!(mask.count_ones(), 2);

		mask.set_false(4);
		mask.set_false(26);
		assert!(mask.is_empty());
	}

	#[test]
	fn test_out_of_range_reads_false() {
		let mask = VoxelMask::from_indices(Grid::new(2, 2, 2), vec![0, 7, 8, 100]);

		assert_eq!(mask.count_ones(), 2);
		assert!(!mask[8]);
		assert!(!mask.get(100));
	}
}
