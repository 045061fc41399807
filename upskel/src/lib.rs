//! Carries a skeleton computed on a downsampled label volume back to full resolution.
//!
//! Each coarse skeleton point is moved to its full resolution voxel through a
//! [`DownUpMap`](skelio::DownUpMap). Adjacent coarse points stay connected only when a
//! bounded A* search finds a same-label path between their full resolution voxels, and
//! points left with fewer than two connections are marked as endpoints by negating their
//! output index.

pub mod config;
pub mod error;
pub mod segmentation;
pub mod astar;
pub mod joints;
pub mod graph;
pub mod endpoint;
pub mod upsampler;
mod driver;

pub use crate::config::{Resolution, SkeletonPaths, UpsampleConfig, MAX_EXPANSION};
pub use crate::error::{Error, Result};
pub use crate::segmentation::Segmentation;
pub use crate::astar::Reachability;
pub use crate::joints::{Joint, JointSet};
pub use crate::graph::SkeletonGraph;
pub use crate::upsampler::{LabelOutcome, Upsampler};
pub use crate::driver::{apply_upsample, UpsampleSummary};
