use std::path::PathBuf;

use nvrec::nv::{DecodeOptions, EncodeOptions, Result, decode_record, encode_record, record_to_json};

use crate::cmd::util::load_record;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub compact: bool,
}

/// Encode the JSON record at `path`, decode it back, and print the result.
///
/// Plain integers come back width-tagged: the wire carries exact widths, so
/// the decoded notation shows what the container actually stored.
pub fn run(args: Args) -> Result<()> {
	let Args { path, compact } = args;

	let record = load_record(&path)?;
	let list = encode_record(&record, &EncodeOptions::default())?;
	let decoded = decode_record(&list, &DecodeOptions::default())?;

	let json = record_to_json(&decoded);
	let rendered = if compact {
		serde_json::to_string(&json)
	} else {
		serde_json::to_string_pretty(&json)
	};
	match rendered {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: {err}"),
	}

	Ok(())
}
