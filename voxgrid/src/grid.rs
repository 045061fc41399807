use std::fmt::{self, Debug, Display, Formatter};

/// A voxel coordinate. Components are signed so that a position may be offset past the
/// edge of a grid and then rejected by [`Grid::index`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
	pub z: i64,
	pub y: i64,
	pub x: i64
}

impl Position {
	pub fn new(z: i64, y: i64, x: i64) -> Self {
		Position { z, y, x }
	}

	/// Returns this position moved by the given per-axis deltas.
	pub fn offset(self, dz: i64, dy: i64, dx: i64) -> Self {
		Position {
			z: self.z + dz,
			y: self.y + dy,
			x: self.x + dx
		}
	}

	/// Squared Euclidean distance between two positions.
	pub fn distance_squared(self, other: Position) -> i64 {
		let (dz, dy, dx) = (self.z - other.z, self.y - other.y, self.x - other.x);

		dz * dz + dy * dy + dx * dx
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "({}, {}, {})", self.z, self.y, self.x)
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Position {{ z: {}, y: {}, x: {} }}", self.z, self.y, self.x)
	}
}

/// Dimensions of a dense volume stored in ZYX order.
///
/// A voxel at `(z, y, x)` lives at linear index `z * sheet + y * row + x`, where
/// `row = x_size` and `sheet = y_size * x_size`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
	z: usize,
	y: usize,
	x: usize
}

impl Grid {
	/// Creates a grid from its dimensions.
	/// ### Panics
	/// If the total number of voxels does not fit in an `i64`, or a sheet is too large to step across.
	pub fn new(z: usize, y: usize, x: usize) -> Self {
		Grid::checked(z, y, x).expect("grid dimensions overflow usize")
	}

	/// Creates a grid from dimensions as stored in binary headers. Returns `None` for
	/// negative dimensions, volumes too large to index, or sheets too large to step across.
	pub fn from_dimensions(z: i64, y: i64, x: i64) -> Option<Self> {
		if z < 0 || y < 0 || x < 0 {
			return None;
		}

		Grid::checked(z as usize, y as usize, x as usize)
	}

	fn checked(z: usize, y: usize, x: usize) -> Option<Self> {
		let entries = z.checked_mul(y)?.checked_mul(x)?;

		// A neighbor step spans at most a sheet, a row and a voxel.
		let reach = y.checked_mul(x)?.checked_add(x)?.checked_add(1)?;

		// Linear indices are stored as i64 on disk, displacements are isize.
		if entries > i64::max_value() as usize || reach > isize::max_value() as usize {
			return None;
		}

		Some(Grid { z, y, x })
	}

	pub fn z(&self) -> usize {
		self.z
	}

	pub fn y(&self) -> usize {
		self.y
	}

	pub fn x(&self) -> usize {
		self.x
	}

	/// Distance in the flat array between two voxels adjacent along Y.
	pub fn row(&self) -> usize {
		self.x
	}

	/// Distance in the flat array between two voxels adjacent along Z.
	pub fn sheet(&self) -> usize {
		self.y * self.x
	}

	/// Total number of voxels.
	pub fn entries(&self) -> usize {
		self.z * self.sheet()
	}

	pub fn contains_index(&self, index: usize) -> bool {
		index < self.entries()
	}

	pub fn contains(&self, position: Position) -> bool {
		position.z >= 0 && (position.z as u64) < self.z as u64 &&
		position.y >= 0 && (position.y as u64) < self.y as u64 &&
		position.x >= 0 && (position.x as u64) < self.x as u64
	}

	/// Converts a linear index into a position.
	/// ### Out of bounds behavior
	/// Indices past the end of the grid yield positions with a Z component past the last sheet.
	pub fn position(&self, index: usize) -> Position {
		debug_assert!(self.sheet() != 0, "position lookup in an empty grid");

		let sheet = self.sheet();
		let z = index / sheet;
		let y = (index % sheet) / self.row();
		let x = index % self.row();

		Position::new(z as i64, y as i64, x as i64)
	}

	/// Converts a position into a linear index, or `None` if any component lies outside the grid.
	pub fn index(&self, position: Position) -> Option<usize> {
		if !self.contains(position) {
			return None;
		}

		Some(position.z as usize * self.sheet() + position.y as usize * self.row() + position.x as usize)
	}

	/// Squared Euclidean distance between the voxels at two linear indices.
	pub fn distance_squared(&self, a: usize, b: usize) -> i64 {
		self.position(a).distance_squared(self.position(b))
	}
}

impl Display for Grid {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}x{}x{}", self.z, self.y, self.x)
	}
}

impl Debug for Grid {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Grid {{ z: {}, y: {}, x: {} }}", self.z, self.y, self.x)
	}
}

#[cfg(test)]
mod tests {
	use super::{Grid, Position};
	use proptest::prelude::*;

	#[test]
	fn test_sizes() {
		let grid = Grid::new(4, 5, 6);

		assert_eq!(grid.row(), 6);
		assert_eq!(grid.sheet(), 30);
		assert_eq!(grid.entries(), 120);
	}

	#[test]
	fn test_conversion() {
		let grid = Grid::new(4, 5, 6);

		assert_eq!(grid.position(0), Position::new(0, 0, 0));
		assert_eq!(grid.position(6), Position::new(0, 1, 0));
		assert_eq!(grid.position(30), Position::new(1, 0, 0));
		assert_eq!(grid.position(119), Position::new(3, 4, 5));

		assert_eq!(grid.index(Position::new(2, 3, 4)), Some(2 * 30 + 3 * 6 + 4));
	}

	#[test]
	fn test_outside() {
		let grid = Grid::new(4, 5, 6);

		assert_eq!(grid.index(Position::new(0, 0, 6)), None);
		assert_eq!(grid.index(Position::new(0, -1, 0)), None);
		assert_eq!(grid.index(Position::new(4, 0, 0)), None);
		assert!(!grid.contains_index(120));
	}

	#[test]
	fn test_from_dimensions() {
		assert_eq!(Grid::from_dimensions(2, 3, 4), Some(Grid::new(2, 3, 4)));
		assert_eq!(Grid::from_dimensions(-1, 3, 4), None);
		assert_eq!(Grid::from_dimensions(i64::max_value(), i64::max_value(), 2), None);

		// Fits as a single sheet, but stepping a sheet and a row back would overflow.
		assert_eq!(Grid::from_dimensions(1, 1, i64::max_value()), None);
		assert_eq!(Grid::from_dimensions(1, 2, i64::max_value() / 2), None);
		assert!(Grid::from_dimensions(1, 1, i64::max_value() / 2 - 1).is_some());
	}

	#[test]
	fn test_distance() {
		let grid = Grid::new(10, 10, 10);
		let a = grid.index(Position::new(1, 2, 3)).unwrap();
		let b = grid.index(Position::new(2, 4, 6)).unwrap();

		assert_eq!(grid.distance_squared(a, b), 1 + 4 + 9);
		assert_eq!(grid.distance_squared(b, a), 1 + 4 + 9);
	}

	proptest! {
		#[test]
		fn index_round_trip(z in 1usize..24, y in 1usize..24, x in 1usize..24, seed in any::<usize>()) {
			let grid = Grid::new(z, y, x);
			let index = seed % grid.entries();
			let position = grid.position(index);

			prop_assert!(grid.contains(position));
			prop_assert_eq!(grid.index(position), Some(index));
		}
	}
}
