use crate::error::{Error, Result};
use crate::int::{read_int, read_ints, write_int, write_ints};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use voxgrid::Grid;

/// A dense label volume: a three integer Z, Y, X header followed by one label per voxel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume {
	pub grid: Grid,
	pub labels: Vec<i64>
}

impl Volume {
	pub fn new(grid: Grid, labels: Vec<i64>) -> Result<Self> {
		if labels.len() != grid.entries() {
			return Err(Error::VolumeSize { grid, expected: grid.entries(), actual: labels.len() });
		}

		Ok(Volume { grid, labels })
	}

	/// Creates a volume with every voxel set to `label`.
	pub fn filled(grid: Grid, label: i64) -> Self {
		Volume { grid, labels: vec![label; grid.entries()] }
	}

	pub fn open<P>(path: P) -> Result<Self> where P: AsRef<Path> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;

		Volume::read_from(&mut BufReader::new(file))
	}

	pub fn read_from<R>(input: &mut R) -> Result<Self> where R: Read {
		let z = read_int(input, "volume z dimension")?;
		let y = read_int(input, "volume y dimension")?;
		let x = read_int(input, "volume x dimension")?;

		let grid = Grid::from_dimensions(z, y, x).ok_or(Error::InvalidGrid { z, y, x })?;
		let labels = read_ints(input, grid.entries(), "volume labels")?;

		Ok(Volume { grid, labels })
	}

	pub fn write_to<W>(&self, out: &mut W) -> Result<()> where W: Write {
		write_int(out, self.grid.z() as i64)?;
		write_int(out, self.grid.y() as i64)?;
		write_int(out, self.grid.x() as i64)?;
		write_ints(out, &self.labels)
	}
}
