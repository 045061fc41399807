use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// A file could not be opened or created.
	#[error("failed to open {}: {source}", .path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error
	},

	/// Reading, writing, or renaming failed after the file was opened.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	/// The stream ended in the middle of a header or record.
	#[error("unexpected end of stream while reading {what}")]
	ShortRead { what: &'static str },

	#[error("negative {what}: {value}")]
	Negative { what: &'static str, value: i64 },

	#[error("invalid grid dimensions {z}x{y}x{x}")]
	InvalidGrid { z: i64, y: i64, x: i64 },

	#[error("{what} index {index} lies outside a grid of {entries} voxels")]
	IndexOutOfRange { what: &'static str, index: i64, entries: usize },

	#[error("label {label}: downsample file lists {down} elements but upsample file lists {up}")]
	CountMismatch { label: usize, down: usize, up: usize },

	#[error("downsample file covers {down} labels but upsample file covers {up}")]
	LabelCountMismatch { down: usize, up: usize },

	#[error("label {label} is beyond the {labels} labels declared in the header")]
	LabelOutOfRange { label: usize, labels: usize },

	#[error("expected {expected} labels but {written} were written")]
	Incomplete { expected: usize, written: usize },

	#[error("volume holds {actual} labels but its {grid} header needs {expected}")]
	VolumeSize { grid: voxgrid::Grid, expected: usize, actual: usize }
}
