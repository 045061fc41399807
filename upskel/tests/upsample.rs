use skelio::{DownUpMap, Header, SkeletonReader, SkeletonRecord, SkeletonWriter, Volume};
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;
use upskel::{apply_upsample, Error, Resolution, UpsampleConfig};
use voxgrid::{Grid, Position};

fn config(root: &Path) -> UpsampleConfig {
	UpsampleConfig::new("test", Resolution::new(2, 2, 2), Resolution::new(1, 1, 1), "thinning").with_root(root)
}

fn write_maps(config: &UpsampleConfig, maps: &DownUpMap) {
	let paths = config.paths();
	fs::create_dir_all(paths.downsample.parent().unwrap()).unwrap();

	let mut down = File::create(&paths.downsample).unwrap();
	let mut up = File::create(&paths.upsample).unwrap();
	maps.write_to(&mut down, &mut up).unwrap();
}

fn write_skeletons(config: &UpsampleConfig, grid: Grid, skeletons: &[Vec<i64>]) {
	let paths = config.paths();
	fs::create_dir_all(paths.input.parent().unwrap()).unwrap();

	let mut writer = SkeletonWriter::new(File::create(&paths.input).unwrap(), Header::new(grid, skeletons.len())).unwrap();
	for points in skeletons {
		writer.write_label(points).unwrap();
	}
	writer.finish().unwrap();
}

fn read_output(config: &UpsampleConfig) -> (Header, Vec<SkeletonRecord>) {
	let mut reader = SkeletonReader::open(config.paths().output).unwrap();
	let mut records = Vec::new();

	while let Some(record) = reader.next_label().unwrap() {
		records.push(record);
	}

	(reader.header(), records)
}

/// Coarse grid and fine grid are the same 10x10x10 volume, mapped one to one for every label.
fn identity_fixture(labels: usize) -> (TempDir, UpsampleConfig, Grid) {
	let dir = tempfile::tempdir().unwrap();
	let config = config(dir.path());
	let grid = Grid::new(10, 10, 10);

	let mut maps = DownUpMap::new(grid, grid, labels);
	for label in 0..labels {
		for index in 0..grid.entries() {
			maps.insert(label, index, index).unwrap();
		}
	}
	write_maps(&config, &maps);

	(dir, config, grid)
}

fn line(grid: Grid, y: i64, xs: std::ops::Range<i64>) -> Vec<i64> {
	xs.map(|x| grid.index(Position::new(5, y, x)).unwrap() as i64).collect()
}

#[test]
fn straight_line_keeps_interior_points() {
	let (_dir, config, grid) = identity_fixture(2);
	let points = line(grid, 5, 2..7);
	write_skeletons(&config, grid, &[vec![], points.clone()]);

	let segmentation = Volume::filled(grid, 1);
	let summary = apply_upsample(&config, &segmentation).unwrap();

	assert_eq!(summary.labels, 2);
	assert_eq!(summary.points, 5);
	assert_eq!(summary.joints, 4);
	assert_eq!(summary.endpoints, 2);

	let (header, records) = read_output(&config);
	assert_eq!(header, Header::new(grid, 2));
	assert_eq!(records[0].points, Vec::<i64>::new());
	assert_eq!(records[1].points, vec![-points[0], points[1], points[2], points[3], -points[4]]);
}

#[test]
fn isolated_point_is_an_endpoint() {
	let (_dir, config, grid) = identity_fixture(3);
	let single = grid.index(Position::new(4, 4, 4)).unwrap() as i64;
	write_skeletons(&config, grid, &[vec![], vec![], vec![single]]);

	let segmentation = Volume::filled(grid, 2);
	apply_upsample(&config, &segmentation).unwrap();

	let (_, records) = read_output(&config);
	assert_eq!(records[2].points, vec![-single]);
}

#[test]
fn point_counts_are_preserved() {
	let (_dir, config, grid) = identity_fixture(4);

	// Label 0 in one half of the volume, label 3 in the other.
	let labels = (0..grid.entries()).map(|i| if grid.position(i).y < 5 { 0 } else { 3 }).collect::<Vec<i64>>();
	let segmentation = Volume::new(grid, labels).unwrap();

	let skeletons = vec![
		line(grid, 2, 1..9),
		vec![],
		vec![],
		line(grid, 7, 3..6).into_iter().chain(line(grid, 8, 3..4)).collect()
	];
	write_skeletons(&config, grid, &skeletons);

	apply_upsample(&config, &segmentation).unwrap();

	let (_, records) = read_output(&config);
	assert_eq!(records.len(), skeletons.len());

	for (record, input) in records.iter().zip(skeletons.iter()) {
		assert_eq!(record.points.len(), input.len());
		assert!(record.points.iter().zip(input.iter()).all(|(out, input)| out.abs() == *input));
	}
}

#[test]
fn neighbouring_label_does_not_connect() {
	let (_dir, config, grid) = identity_fixture(2);
	let points = line(grid, 5, 2..5);
	write_skeletons(&config, grid, &[vec![], points.clone()]);

	// The middle point's voxel belongs to label 0, so label 1 is cut in two.
	let mut segmentation = Volume::filled(grid, 1);
	for z in 0..10 {
		for y in 0..10 {
			segmentation.labels[grid.index(Position::new(z, y, 3)).unwrap()] = 0;
		}
	}

	let summary = apply_upsample(&config, &segmentation).unwrap();

	assert_eq!(summary.joints, 0);
	let (_, records) = read_output(&config);
	assert_eq!(records[1].points, vec![-points[0], -points[1], -points[2]]);
}

#[test]
fn benchmark_namespace() {
	let dir = tempfile::tempdir().unwrap();
	let config = config(dir.path()).with_benchmark(true);
	let grid = Grid::new(3, 3, 3);

	let mut maps = DownUpMap::new(grid, grid, 1);
	maps.insert(0, 13, 13).unwrap();
	write_maps(&config, &maps);
	write_skeletons(&config, grid, &[vec![13]]);

	let summary = apply_upsample(&config, &Volume::filled(grid, 0)).unwrap();

	assert_eq!(summary.output, dir.path().join("benchmarks/skeleton/test-2x2x2-thinning-skeleton.pts"));
	assert!(summary.output.exists());
}

#[test]
fn missing_map_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let config = config(dir.path());
	let grid = Grid::new(4, 4, 4);

	write_skeletons(&config, grid, &[vec![1, 2, 3]]);
	let paths = config.paths();

	let result = apply_upsample(&config, &Volume::filled(grid, 0));

	match result {
		Err(Error::Format(skelio::Error::Open { path, .. })) => assert_eq!(path, paths.downsample),
		other => panic!("expected a missing file error, got {:?}", other)
	}

	assert!(!paths.output.exists());
	assert_eq!(fs::read_dir(paths.output.parent().unwrap()).unwrap().count(), 1);
}

#[test]
fn missing_skeleton_writes_nothing() {
	let (_dir, config, grid) = identity_fixture(1);

	let result = apply_upsample(&config, &Volume::filled(grid, 0));

	assert!(matches!(result, Err(Error::Format(skelio::Error::Open { .. }))));
	assert!(!config.paths().output.exists());
}

#[test]
fn failure_mid_run_leaves_no_output() {
	let (_dir, config, grid) = identity_fixture(2);
	write_skeletons(&config, grid, &[vec![5, 6], vec![7, 8]]);

	// Chop the last point off the input.
	let input = config.paths().input;
	let bytes = fs::read(&input).unwrap();
	fs::write(&input, &bytes[..bytes.len() - 8]).unwrap();

	let result = apply_upsample(&config, &Volume::filled(grid, 0));

	assert!(matches!(result, Err(Error::Format(skelio::Error::ShortRead { .. }))));

	let paths = config.paths();
	assert!(!paths.output.exists());

	let leftovers = fs::read_dir(paths.output.parent().unwrap()).unwrap()
		.filter_map(|entry| entry.ok())
		.filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
		.count();
	assert_eq!(leftovers, 0);
}

#[test]
fn segmentation_must_match_fine_grid() {
	let (_dir, config, grid) = identity_fixture(1);
	write_skeletons(&config, grid, &[vec![]]);

	let short = Volume::filled(Grid::new(10, 10, 9), 0);
	assert!(matches!(apply_upsample(&config, &short), Err(Error::ShapeMismatch { .. })));

	// As many voxels as the fine grid, laid out differently.
	let reshaped = Volume::filled(Grid::new(10, 100, 1), 0);
	assert!(matches!(apply_upsample(&config, &reshaped), Err(Error::ShapeMismatch { .. })));

	// Labels that do not cover their own grid.
	let ragged = Volume { grid, labels: vec![0; grid.entries() - 1] };
	assert!(matches!(apply_upsample(&config, &ragged), Err(Error::GridMismatch { .. })));

	assert!(!config.paths().output.exists());
}

#[test]
fn corrupt_mapping_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let config = config(dir.path());
	let grid = Grid::new(4, 4, 4);

	let mut maps = DownUpMap::new(grid, grid, 1);
	maps.insert(0, 1, 1).unwrap();
	write_maps(&config, &maps);
	write_skeletons(&config, grid, &[vec![1, 2]]);

	let result = apply_upsample(&config, &Volume::filled(grid, 0));

	assert!(matches!(result, Err(Error::CorruptMapping { label: 0, index: 2 })));
	assert!(!config.paths().output.exists());
}
