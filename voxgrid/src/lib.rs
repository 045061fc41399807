#![forbid(unsafe_code)]

//! # `voxgrid`: flattened voxel grids
//!
//! Dense label volumes are stored as flat arrays in ZYX order: X varies fastest,
//! then Y, then Z. Every stage that walks such a volume needs the same handful of
//! tools:
//!
//!  * Converting between linear indices and Cartesian positions
//!  * Enumerating the 26 neighbors of a voxel without wrapping across rows or sheets
//!  * Marking voxels in a compact presence mask
//!
//! Positions use signed components so that offsets may step outside the grid and be
//! rejected afterwards, rather than wrapping silently.

// Variable length bit collections
extern crate bit_vec;

mod grid;
mod neighbors;

/// Bit mask facilities for marking voxels, such as the points of a skeleton.
pub mod mask;

pub use grid::{Grid, Position};
pub use neighbors::{Neighbor, NeighborOffsets, NEIGHBORS, BACKWARD, FORWARD};
pub use mask::{Mask, VoxelMask};
