use crate::error::{Error, Result};
use crate::int::{read_count, read_int, write_int};
use std::io::{Read, Write};
use voxgrid::Grid;

/// The four integer preamble shared by every skeleton stage file: grid dimensions in
/// Z, Y, X order followed by the number of labels recorded in the file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
	pub grid: Grid,
	pub labels: usize
}

impl Header {
	pub fn new(grid: Grid, labels: usize) -> Self {
		Header { grid, labels }
	}

	pub fn read_from<R>(input: &mut R) -> Result<Self> where R: Read {
		let z = read_int(input, "header z dimension")?;
		let y = read_int(input, "header y dimension")?;
		let x = read_int(input, "header x dimension")?;
		let labels = read_count(input, "header label count")?;

		let grid = Grid::from_dimensions(z, y, x).ok_or(Error::InvalidGrid { z, y, x })?;

		Ok(Header { grid, labels })
	}

	pub fn write_to<W>(&self, out: &mut W) -> Result<()> where W: Write {
		write_int(out, self.grid.z() as i64)?;
		write_int(out, self.grid.y() as i64)?;
		write_int(out, self.grid.x() as i64)?;
		write_int(out, self.labels as i64)
	}
}

#[cfg(test)]
mod tests {
	use super::Header;
	use crate::error::Error;
	use crate::int::write_ints;
	use std::io::Cursor;
	use voxgrid::Grid;

	#[test]
	fn test_header() {
		let header = Header::new(Grid::new(3, 4, 5), 17);

		let mut buffer = Vec::new();
		header.write_to(&mut buffer).unwrap();
		assert_eq!(buffer.len(), 32);

		assert_eq!(Header::read_from(&mut Cursor::new(buffer)).unwrap(), header);
	}

	#[test]
	fn test_invalid_grid() {
		let mut buffer = Vec::new();
		write_ints(&mut buffer, &[3, -4, 5, 1]).unwrap();

		assert!(matches!(Header::read_from(&mut Cursor::new(buffer)), Err(Error::InvalidGrid { y: -4, .. })));
	}

	#[test]
	fn test_truncated() {
		let mut buffer = Vec::new();
		write_ints(&mut buffer, &[3, 4, 5]).unwrap();

		assert!(matches!(Header::read_from(&mut Cursor::new(buffer)), Err(Error::ShortRead { .. })));
	}
}
