use crate::astar::Reachability;
use crate::endpoint::is_endpoint;
use crate::error::{Error, Result};
use crate::graph::SkeletonGraph;
use crate::segmentation::Segmentation;
use rustc_hash::FxHashMap;
use skelio::DownUpMap;
use tracing::debug;
use voxgrid::NeighborOffsets;

/// The upsampled skeleton of one label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelOutcome {
	/// Full resolution indices in input order, negated for endpoints.
	pub points: Vec<i64>,
	/// Confirmed connections between skeleton points.
	pub joints: usize,
	pub endpoints: usize
}

/// Everything shared between labels of one run. Read-only once built, so each label
/// starts from the same state no matter what came before it.
pub struct Upsampler<'a> {
	maps: &'a DownUpMap,
	offsets: NeighborOffsets,
	reachability: Reachability<'a>
}

impl<'a> Upsampler<'a> {
	pub fn new(maps: &'a DownUpMap, segmentation: Segmentation<'a>, max_expansion: f64) -> Result<Self> {
		let fine = maps.fine_grid();

		if segmentation.grid() != fine {
			return Err(Error::ShapeMismatch { expected: fine, actual: segmentation.grid() });
		}

		Ok(Upsampler {
			maps,
			offsets: NeighborOffsets::new(maps.coarse_grid()),
			reachability: Reachability::new(segmentation, max_expansion)
		})
	}

	/// Carries one label's coarse skeleton to full resolution.
	pub fn upsample_label(&self, label: usize, points: &[i64]) -> Result<LabelOutcome> {
		let coarse = self.load(label, points)?;

		let up = coarse.iter()
			.map(|&index| self.maps.get(label, index).ok_or(Error::CorruptMapping { label, index }))
			.collect::<Result<Vec<usize>>>()?;

		let fine = coarse.iter().copied().zip(up.iter().copied()).collect::<FxHashMap<usize, usize>>();

		let mut graph = SkeletonGraph::new(self.offsets.grid(), &coarse);

		let joints = graph.discover_edges(&self.offsets, &coarse, |source, target| {
			match (fine.get(&source), fine.get(&target)) {
				(Some(&source), Some(&target)) => self.reachability.reachable(label as i64, source, target),
				_ => false
			}
		});

		let mut endpoints = 0;
		let mut output = Vec::with_capacity(coarse.len());

		for (&index, &up) in coarse.iter().zip(up.iter()) {
			// Fine index 0 cannot carry the sign.
			if is_endpoint(&graph, &self.offsets, index) {
				endpoints += 1;
				output.push(-(up as i64));
			} else {
				output.push(up as i64);
			}
		}

		debug!(label, points = coarse.len(), joints, endpoints, "upsampled label");

		Ok(LabelOutcome { points: output, joints, endpoints })
	}

	/// Validates the raw coarse indices of a label against the coarse grid.
	fn load(&self, label: usize, points: &[i64]) -> Result<Vec<usize>> {
		let grid = self.offsets.grid();

		points.iter().map(|&index| {
			if index < 0 || !grid.contains_index(index as usize) {
				Err(Error::PointOutOfRange { label, index, entries: grid.entries() })
			} else {
				Ok(index as usize)
			}
		}).collect()
	}
}
