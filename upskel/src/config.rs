use crate::error::{Error, Result};
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default cap on A* exploration, as a multiple of the initial heuristic.
pub const MAX_EXPANSION: f64 = 2.0;

/// Voxel resolution of a volume, per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
	pub z: u64,
	pub y: u64,
	pub x: u64
}

impl Resolution {
	pub fn new(z: u64, y: u64, x: u64) -> Self {
		Resolution { z, y, x }
	}

	/// The `XxYxZ` tag used in skeleton file names.
	pub fn tag(&self) -> String {
		format!("{}x{}x{}", self.x, self.y, self.z)
	}

	/// Per-axis downsampling factors (Z, Y, X) between this resolution and a finer `output`.
	pub fn ratio(&self, output: Resolution) -> (f32, f32, f32) {
		(
			self.z as f32 / output.z as f32,
			self.y as f32 / output.y as f32,
			self.x as f32 / output.x as f32
		)
	}
}

/// Parses `ZxYxX`, for example `80x80x80`.
impl FromStr for Resolution {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let invalid = || Error::InvalidResolution(s.to_owned());

		let parts = s.split('x').map(|part| part.trim().parse::<u64>()).collect::<std::result::Result<Vec<_>, _>>().map_err(|_| invalid())?;

		match parts.as_slice() {
			&[z, y, x] if z > 0 && y > 0 && x > 0 => Ok(Resolution::new(z, y, x)),
			_ => Err(invalid())
		}
	}
}

impl Display for Resolution {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}x{}x{}", self.z, self.y, self.x)
	}
}

/// Settings for one upsample run.
#[derive(Clone, Debug)]
pub struct UpsampleConfig {
	/// Directory that the relative skeleton paths resolve against.
	pub root: PathBuf,
	/// Dataset identifier, used in every file name.
	pub prefix: String,
	/// Resolution the coarse skeleton was computed at.
	pub skeleton_resolution: Resolution,
	/// Resolution of the full resolution segmentation.
	pub output_resolution: Resolution,
	/// Name of the skeleton algorithm that produced the input; only selects file names.
	pub algorithm: String,
	/// Read and write under `benchmarks/skeleton` instead of `skeletons/<prefix>`.
	pub benchmark: bool,
	pub max_expansion: f64
}

impl UpsampleConfig {
	pub fn new<P, A>(prefix: P, skeleton_resolution: Resolution, output_resolution: Resolution, algorithm: A) -> Self where P: Into<String>, A: Into<String> {
		UpsampleConfig {
			root: PathBuf::from("."),
			prefix: prefix.into(),
			skeleton_resolution,
			output_resolution,
			algorithm: algorithm.into(),
			benchmark: false,
			max_expansion: MAX_EXPANSION
		}
	}

	pub fn with_root<P>(mut self, root: P) -> Self where P: Into<PathBuf> {
		self.root = root.into();
		self
	}

	pub fn with_benchmark(mut self, benchmark: bool) -> Self {
		self.benchmark = benchmark;
		self
	}

	pub fn with_max_expansion(mut self, max_expansion: f64) -> Self {
		self.max_expansion = max_expansion;
		self
	}

	pub fn validate(&self) -> Result<()> {
		if !(self.max_expansion > 0.0) || !self.max_expansion.is_finite() {
			return Err(Error::InvalidExpansion(self.max_expansion));
		}

		Ok(())
	}

	pub fn paths(&self) -> SkeletonPaths {
		SkeletonPaths::new(self)
	}
}

/// The four files touched by an upsample run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkeletonPaths {
	/// Coarse half of the down/up correspondence.
	pub downsample: PathBuf,
	/// Fine half of the down/up correspondence.
	pub upsample: PathBuf,
	/// Coarse skeleton.
	pub input: PathBuf,
	/// Full resolution skeleton.
	pub output: PathBuf
}

impl SkeletonPaths {
	pub fn new(config: &UpsampleConfig) -> Self {
		let tag = config.skeleton_resolution.tag();
		let (prefix, algorithm) = (&config.prefix, &config.algorithm);

		let (directory, stem) = if config.benchmark {
			(Path::new("benchmarks").join("skeleton"), format!("{}-", prefix))
		} else {
			(Path::new("skeletons").join(prefix), String::new())
		};

		let directory = config.root.join(directory);

		SkeletonPaths {
			downsample: directory.join(format!("{}downsample-{}.bytes", stem, tag)),
			upsample: directory.join(format!("{}upsample-{}.bytes", stem, tag)),
			input: directory.join(format!("{}downsample-{}-{}-skeleton.pts", stem, tag, algorithm)),
			output: directory.join(format!("{}{}-{}-skeleton.pts", stem, tag, algorithm))
		}
	}
}
