extern crate clap;
extern crate skelio;
extern crate upskel;

use clap::{Arg, App};
use skelio::Volume;
use std::process;
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use upskel::{apply_upsample, Resolution, UpsampleConfig, MAX_EXPANSION};

fn validate_resolution(value: String) -> Result<(), String> {
	Resolution::from_str(&value).map(|_| ()).map_err(|e| e.to_string())
}

fn validate_expansion(value: String) -> Result<(), String> {
	match value.parse::<f64>() {
		Ok(x) => if x > 0.0 && x.is_finite() {
			Ok(())
		} else {
			Err("the expansion factor must be a positive number".to_owned())
		},
		Err(parse) => Err(parse.to_string())
	}
}

fn main() {
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "upskel=info,skelio=info".into()))
		.with(tracing_subscriber::fmt::layer())
		.init();

	let matches = App::new("upsample")
		.version("0.1.0")
		.about("Maps a skeleton computed on a downsampled segmentation back to full resolution, marking endpoints")
		.arg(Arg::with_name("prefix")
			.short("p")
			.long("prefix")
			.value_name("PREFIX")
			.help("Dataset identifier used in every skeleton file name")
			.takes_value(true)
			.required(true)
		)
		.arg(Arg::with_name("resolution")
			.short("r")
			.long("resolution")
			.value_name("ZxYxX")
			.help("Resolution the skeleton was computed at")
			.takes_value(true)
			.required(true)
			.validator(validate_resolution)
		)
		.arg(Arg::with_name("output-resolution")
			.short("o")
			.long("output-resolution")
			.value_name("ZxYxX")
			.help("Resolution of the full resolution segmentation")
			.takes_value(true)
			.required(true)
			.validator(validate_resolution)
		)
		.arg(Arg::with_name("segmentation")
			.short("s")
			.long("segmentation")
			.value_name("FILE")
			.long_help("Full resolution label volume: Z, Y and X dimensions followed by one label \n\
			            per voxel, all as native-endian 64 bit integers")
			.takes_value(true)
			.required(true)
		)
		.arg(Arg::with_name("algorithm")
			.short("a")
			.long("algorithm")
			.value_name("NAME")
			.help("Skeleton algorithm that produced the input; selects the file names")
			.default_value("thinning")
		)
		.arg(Arg::with_name("root")
			.long("root")
			.value_name("DIR")
			.help("Directory containing the skeletons and benchmarks folders")
			.default_value(".")
		)
		.arg(Arg::with_name("max-expansion")
			.long("max-expansion")
			.value_name("FACTOR")
			.help("Give up on a connection once its search is estimated above FACTOR times the initial distance")
			.takes_value(true)
			.validator(validate_expansion)
		)
		.arg(Arg::with_name("benchmark")
			.short("b")
			.long("benchmark")
			.help("Read and write under benchmarks/skeleton instead of skeletons/<prefix>")
		)
		.get_matches();

	// Arguments below were checked by their validators.
	let parse_resolution = |name: &str| matches.value_of(name).map(Resolution::from_str);

	let (skeleton_resolution, output_resolution) = match (parse_resolution("resolution"), parse_resolution("output-resolution")) {
		(Some(Ok(skeleton)), Some(Ok(output))) => (skeleton, output),
		_ => {
			eprintln!("error: both --resolution and --output-resolution are required");
			process::exit(2);
		}
	};

	let max_expansion = matches.value_of("max-expansion")
		.and_then(|value| value.parse::<f64>().ok())
		.unwrap_or(MAX_EXPANSION);

	let config = UpsampleConfig::new(
		matches.value_of("prefix").unwrap_or_default(),
		skeleton_resolution,
		output_resolution,
		matches.value_of("algorithm").unwrap_or("thinning")
	)
		.with_root(matches.value_of("root").unwrap_or("."))
		.with_benchmark(matches.is_present("benchmark"))
		.with_max_expansion(max_expansion);

	let segmentation = match matches.value_of("segmentation").map(Volume::open) {
		Some(Ok(volume)) => volume,
		Some(Err(e)) => {
			error!("{}", e);
			process::exit(1);
		},
		None => {
			eprintln!("error: --segmentation is required");
			process::exit(2);
		}
	};

	if let Err(e) = apply_upsample(&config, &segmentation) {
		error!("{}", e);
		process::exit(1);
	}
}
