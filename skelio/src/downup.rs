use crate::error::{Error, Result};
use crate::header::Header;
use crate::int::{read_count, read_ints, write_int, write_ints};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::debug;
use voxgrid::Grid;

/// Per-label correspondence from coarse (downsampled) voxels to full resolution voxels.
///
/// Built from a pair of files that list, label by label, the same number of elements in
/// matching order: the i-th coarse index of a label corresponds to the i-th fine index.
#[derive(Clone, Debug)]
pub struct DownUpMap {
	coarse: Grid,
	fine: Grid,
	labels: Vec<FxHashMap<usize, usize>>
}

impl DownUpMap {
	/// Creates an empty map covering `labels` labels.
	pub fn new(coarse: Grid, fine: Grid, labels: usize) -> Self {
		DownUpMap {
			coarse,
			fine,
			labels: vec![FxHashMap::default(); labels]
		}
	}

	/// Loads the downsample and upsample files. Both files are opened before either is read.
	pub fn load<D, U>(down: D, up: U) -> Result<Self> where D: AsRef<Path>, U: AsRef<Path> {
		let open = |path: &Path| File::open(path).map(BufReader::new).map_err(|source| Error::Open {
			path: path.to_path_buf(),
			source
		});

		let mut down_file = open(down.as_ref())?;
		let mut up_file = open(up.as_ref())?;

		let map = DownUpMap::from_readers(&mut down_file, &mut up_file)?;

		debug!(
			down = %down.as_ref().display(),
			up = %up.as_ref().display(),
			labels = map.labels(),
			"loaded down/up correspondence"
		);

		Ok(map)
	}

	pub fn from_readers<D, U>(down: &mut D, up: &mut U) -> Result<Self> where D: Read, U: Read {
		let down_header = Header::read_from(down)?;
		let up_header = Header::read_from(up)?;

		if down_header.labels != up_header.labels {
			return Err(Error::LabelCountMismatch { down: down_header.labels, up: up_header.labels });
		}

		// Labels are added as their records arrive, so a corrupt count fails on the first short read.
		let mut map = DownUpMap::new(down_header.grid, up_header.grid, 0);

		for label in 0..up_header.labels {
			let down_count = read_count(down, "downsample element count")?;
			let up_count = read_count(up, "upsample element count")?;

			if down_count != up_count {
				return Err(Error::CountMismatch { label, down: down_count, up: up_count });
			}

			let coarse = read_ints(down, down_count, "downsample elements")?;
			let fine = read_ints(up, up_count, "upsample elements")?;

			let mut entries = FxHashMap::default();

			for (&coarse, &fine) in coarse.iter().zip(fine.iter()) {
				let (coarse, fine) = map.checked_pair(coarse, fine)?;
				entries.insert(coarse, fine);
			}

			map.labels.push(entries);
		}

		Ok(map)
	}

	/// Records that coarse voxel `coarse` of `label` corresponds to fine voxel `fine`.
	/// Later insertions for the same coarse voxel replace earlier ones.
	pub fn insert(&mut self, label: usize, coarse: usize, fine: usize) -> Result<()> {
		let (coarse, fine) = self.checked_pair(coarse as i64, fine as i64)?;
		let labels = self.labels.len();

		self.labels
			.get_mut(label)
			.ok_or(Error::LabelOutOfRange { label, labels })?
			.insert(coarse, fine);

		Ok(())
	}

	fn checked_pair(&self, coarse: i64, fine: i64) -> Result<(usize, usize)> {
		Ok((checked_index(self.coarse, coarse, "downsample")?, checked_index(self.fine, fine, "upsample")?))
	}

	pub fn coarse_grid(&self) -> Grid {
		self.coarse
	}

	pub fn fine_grid(&self) -> Grid {
		self.fine
	}

	/// Number of labels covered by the map.
	pub fn labels(&self) -> usize {
		self.labels.len()
	}

	/// Returns the fine voxel for a coarse voxel of `label`, if one was recorded.
	pub fn get(&self, label: usize, coarse: usize) -> Option<usize> {
		self.labels.get(label)?.get(&coarse).copied()
	}

	/// Number of correspondences recorded for `label`.
	pub fn len(&self, label: usize) -> usize {
		self.labels.get(label).map(|entries| entries.len()).unwrap_or(0)
	}

	/// Writes the map back out as a downsample / upsample file pair. Entries of each label
	/// are written in ascending coarse order.
	pub fn write_to<D, U>(&self, down: &mut D, up: &mut U) -> Result<()> where D: Write, U: Write {
		Header::new(self.coarse, self.labels()).write_to(down)?;
		Header::new(self.fine, self.labels()).write_to(up)?;

		for entries in &self.labels {
			let mut pairs = entries.iter().map(|(&coarse, &fine)| (coarse as i64, fine as i64)).collect::<Vec<_>>();
			pairs.sort_unstable();

			let (coarse, fine): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();

			write_int(down, coarse.len() as i64)?;
			write_int(up, fine.len() as i64)?;
			write_ints(down, &coarse)?;
			write_ints(up, &fine)?;
		}

		Ok(())
	}
}

fn checked_index(grid: Grid, index: i64, what: &'static str) -> Result<usize> {
	if index < 0 || !grid.contains_index(index as usize) {
		return Err(Error::IndexOutOfRange { what, index, entries: grid.entries() });
	}

	Ok(index as usize)
}
