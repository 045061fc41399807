use crate::error::{Error, Result};
use crate::header::Header;
use crate::int::{read_count, read_ints, write_int, write_ints};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// The points of one label's skeleton as stored on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkeletonRecord {
	pub label: usize,
	pub points: Vec<i64>
}

/// Streams per-label skeleton records out of a `.pts` file.
pub struct SkeletonReader<R> where R: Read {
	input: R,
	header: Header,
	next: usize
}

impl SkeletonReader<BufReader<File>> {
	pub fn open<P>(path: P) -> Result<Self> where P: AsRef<Path> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;

		SkeletonReader::new(BufReader::new(file))
	}
}

impl<R> SkeletonReader<R> where R: Read {
	/// Reads the header and prepares to stream records.
	pub fn new(mut input: R) -> Result<Self> {
		let header = Header::read_from(&mut input)?;

		Ok(SkeletonReader { input, header, next: 0 })
	}

	pub fn header(&self) -> Header {
		self.header
	}

	/// Reads the next label's points, or returns `None` once every label in the header has been read.
	pub fn next_label(&mut self) -> Result<Option<SkeletonRecord>> {
		if self.next == self.header.labels {
			return Ok(None);
		}

		let count = read_count(&mut self.input, "skeleton point count")?;
		let points = read_ints(&mut self.input, count, "skeleton points")?;

		let label = self.next;
		self.next += 1;

		Ok(Some(SkeletonRecord { label, points }))
	}
}

/// Writes per-label skeleton records behind a header.
pub struct SkeletonWriter<W> where W: Write {
	out: W,
	header: Header,
	written: usize
}

impl<W> SkeletonWriter<W> where W: Write {
	/// Writes the header.
	pub fn new(mut out: W, header: Header) -> Result<Self> {
		header.write_to(&mut out)?;

		Ok(SkeletonWriter { out, header, written: 0 })
	}

	pub fn header(&self) -> Header {
		self.header
	}

	/// Appends the next label's points.
	pub fn write_label(&mut self, points: &[i64]) -> Result<()> {
		if self.written == self.header.labels {
			return Err(Error::LabelOutOfRange { label: self.written, labels: self.header.labels });
		}

		write_int(&mut self.out, points.len() as i64)?;
		write_ints(&mut self.out, points)?;

		self.written += 1;

		Ok(())
	}

	/// Flushes the output and hands it back. Every label declared in the header must have been written.
	pub fn finish(mut self) -> Result<W> {
		if self.written != self.header.labels {
			return Err(Error::Incomplete { expected: self.header.labels, written: self.written });
		}

		self.out.flush()?;

		Ok(self.out)
	}
}
