use crate::graph::SkeletonGraph;
use voxgrid::NeighborOffsets;

/// Skeleton points with fewer confirmed connections than this are endpoints.
pub const MIN_INTERIOR_DEGREE: usize = 2;

/// Number of skeleton points around `index` that are confirmed connected to it. Adjacency
/// on the coarse grid alone does not count.
pub fn degree(graph: &SkeletonGraph, offsets: &NeighborOffsets, index: usize) -> usize {
	offsets.all(index)
		.filter(|&neighbor| graph.contains(neighbor) && graph.joints().contains(index, neighbor))
		.count()
}

pub fn is_endpoint(graph: &SkeletonGraph, offsets: &NeighborOffsets, index: usize) -> bool {
	degree(graph, offsets, index) < MIN_INTERIOR_DEGREE
}
