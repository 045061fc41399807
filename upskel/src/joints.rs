use rustc_hash::FxHashSet;

/// An unordered pair of coarse voxel indices, stored smaller index first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Joint {
	low: usize,
	high: usize
}

impl Joint {
	pub fn new(a: usize, b: usize) -> Self {
		if a <= b {
			Joint { low: a, high: b }
		} else {
			Joint { low: b, high: a }
		}
	}

	pub fn low(&self) -> usize {
		self.low
	}

	pub fn high(&self) -> usize {
		self.high
	}
}

/// Pairs of skeleton points confirmed to be connected at full resolution.
#[derive(Clone, Debug, Default)]
pub struct JointSet(FxHashSet<Joint>);

impl JointSet {
	pub fn new() -> Self {
		JointSet::default()
	}

	/// Records that `a` and `b` are connected. Returns false if the pair was already known.
	pub fn insert(&mut self, a: usize, b: usize) -> bool {
		self.0.insert(Joint::new(a, b))
	}

	pub fn contains(&self, a: usize, b: usize) -> bool {
		self.0.contains(&Joint::new(a, b))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
