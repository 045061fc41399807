use crate::config::UpsampleConfig;
use crate::error::Result;
use crate::segmentation::Segmentation;
use crate::upsampler::Upsampler;
use skelio::{DownUpMap, Header, SkeletonReader, SkeletonWriter, StagedFile, Volume};
use std::path::PathBuf;
use tracing::{debug, info};

/// Totals over every label of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpsampleSummary {
	pub output: PathBuf,
	pub labels: usize,
	pub points: usize,
	pub joints: usize,
	pub endpoints: usize
}

/// Upsamples every label's skeleton named by `config`.
///
/// `segmentation` is the full resolution label volume. Its grid must be the fine grid recorded
/// in the upsample correspondence file. The down/up maps and the input skeleton are opened
/// before any output is created, and the output only appears at its final path once every
/// label has been written; any error leaves no output file behind.
pub fn apply_upsample(config: &UpsampleConfig, segmentation: &Volume) -> Result<UpsampleSummary> {
	config.validate()?;

	let paths = config.paths();

	info!(
		prefix = %config.prefix,
		algorithm = %config.algorithm,
		skeleton_resolution = %config.skeleton_resolution,
		output_resolution = %config.output_resolution,
		benchmark = config.benchmark,
		"upsampling skeletons"
	);

	let maps = DownUpMap::load(&paths.downsample, &paths.upsample)?;
	let segmentation = Segmentation::new(segmentation.grid, &segmentation.labels)?;
	let upsampler = Upsampler::new(&maps, segmentation, config.max_expansion)?;

	debug!(
		coarse = %maps.coarse_grid(),
		fine = %maps.fine_grid(),
		ratio = ?config.skeleton_resolution.ratio(config.output_resolution),
		"loaded correspondence"
	);

	let mut reader = SkeletonReader::open(&paths.input)?;
	let labels = reader.header().labels;

	let output = StagedFile::create(&paths.output)?;
	let mut writer = SkeletonWriter::new(output, Header::new(maps.fine_grid(), labels))?;

	let mut summary = UpsampleSummary {
		output: paths.output.clone(),
		labels,
		..UpsampleSummary::default()
	};

	while let Some(record) = reader.next_label()? {
		let outcome = upsampler.upsample_label(record.label, &record.points)?;

		writer.write_label(&outcome.points)?;

		summary.points += outcome.points.len();
		summary.joints += outcome.joints;
		summary.endpoints += outcome.endpoints;
	}

	writer.finish()?.commit()?;

	info!(
		output = %summary.output.display(),
		labels = summary.labels,
		points = summary.points,
		joints = summary.joints,
		endpoints = summary.endpoints,
		"wrote upsampled skeletons"
	);

	Ok(summary)
}
