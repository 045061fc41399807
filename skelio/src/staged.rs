use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// An output file that only appears at its final path once committed.
///
/// Data is written to a sibling `.tmp` file which is renamed over the destination by
/// [`StagedFile::commit`]. Dropping an uncommitted file removes the temporary, so a failed
/// run leaves neither a partial output nor stray temporaries behind.
pub struct StagedFile {
	path: PathBuf,
	staging: PathBuf,
	out: Option<BufWriter<File>>
}

impl StagedFile {
	pub fn create<P>(path: P) -> Result<Self> where P: AsRef<Path> {
		let path = path.as_ref().to_path_buf();

		let mut name = path.file_name().map(OsString::from).ok_or_else(|| Error::Open {
			path: path.clone(),
			source: io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
		})?;
		name.push(".tmp");

		let staging = path.with_file_name(name);
		let file = File::create(&staging).map_err(|source| Error::Open { path: staging.clone(), source })?;

		Ok(StagedFile {
			path,
			staging,
			out: Some(BufWriter::new(file))
		})
	}

	/// The final destination.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Where data is written until the file is committed.
	pub fn staging_path(&self) -> &Path {
		&self.staging
	}

	/// Flushes and syncs the data, then moves it to the final path.
	pub fn commit(mut self) -> Result<()> {
		if let Some(out) = self.out.take() {
			let file = out.into_inner().map_err(|e| e.into_error())?;
			file.sync_all()?;
		}

		fs::rename(&self.staging, &self.path)?;

		// Nothing left to clean up.
		self.staging = PathBuf::new();

		Ok(())
	}

	fn out(&mut self) -> io::Result<&mut BufWriter<File>> {
		self.out.as_mut().ok_or_else(|| io::Error::new(io::ErrorKind::Other, "staged file already committed"))
	}
}

impl Write for StagedFile {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.out()?.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.out()?.flush()
	}
}

impl Drop for StagedFile {
	fn drop(&mut self) {
		if self.staging.as_os_str().is_empty() {
			return;
		}

		// Close the handle before unlinking.
		self.out.take();

		if let Err(error) = fs::remove_file(&self.staging) {
			if error.kind() != io::ErrorKind::NotFound {
				warn!(path = %self.staging.display(), %error, "failed to remove staged output");
			}
		}
	}
}
