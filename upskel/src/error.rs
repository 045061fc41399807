use thiserror::Error;
use voxgrid::Grid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// A map, skeleton, or volume file was missing, truncated, or could not be written.
	#[error(transparent)]
	Format(#[from] skelio::Error),

	/// A skeleton point has no full resolution correspondence for its label.
	#[error("label {label}: coarse voxel {index} has no full resolution correspondence")]
	CorruptMapping { label: usize, index: usize },

	#[error("label {label}: skeleton point {index} lies outside the {entries} voxel coarse grid")]
	PointOutOfRange { label: usize, index: i64, entries: usize },

	#[error("segmentation holds {actual} voxels but the full resolution grid {grid} needs {expected}")]
	GridMismatch { grid: Grid, expected: usize, actual: usize },

	/// The segmentation is laid out on a different grid than the upsample correspondence.
	#[error("segmentation is {actual} but the full resolution grid is {expected}")]
	ShapeMismatch { expected: Grid, actual: Grid },

	#[error("invalid resolution {0:?}, expected ZxYxX")]
	InvalidResolution(String),

	#[error("max expansion must be a positive number, got {0}")]
	InvalidExpansion(f64)
}
