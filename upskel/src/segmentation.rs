use crate::error::{Error, Result};
use voxgrid::Grid;

/// A full resolution label volume borrowed from the caller for the length of a run.
#[derive(Copy, Clone, Debug)]
pub struct Segmentation<'a> {
	grid: Grid,
	labels: &'a [i64]
}

impl<'a> Segmentation<'a> {
	pub fn new(grid: Grid, labels: &'a [i64]) -> Result<Self> {
		if labels.len() != grid.entries() {
			return Err(Error::GridMismatch { grid, expected: grid.entries(), actual: labels.len() });
		}

		Ok(Segmentation { grid, labels })
	}

	pub fn grid(&self) -> Grid {
		self.grid
	}

	/// Whether the voxel at `index` exists and carries `label`.
	pub fn is(&self, index: usize, label: i64) -> bool {
		self.labels.get(index) == Some(&label)
	}
}
