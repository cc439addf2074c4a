use std::path::PathBuf;

use nvrec::nv::{EncodeOptions, Result, encode_record};

use crate::cmd::util::{emit_json, load_record, render_data};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Encode the JSON record at `path` and dump the container entries.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let record = load_record(&path)?;
	let list = encode_record(&record, &EncodeOptions::default())?;

	if json {
		let payload = InspectJson {
			path: path.display().to_string(),
			entry_count: list.len(),
			entries: list
				.entries()
				.map(|entry| EntryJson {
					name: entry.name().to_owned(),
					tag: entry.tag().suffix(),
					elems: entry.data().array_len(),
					value: render_data(entry.data()),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("entries: {}", list.len());
	for entry in list.entries() {
		match entry.data().array_len() {
			Some(count) => println!("  {} [{}; {}] = {}", entry.name(), entry.tag().suffix(), count, render_data(entry.data())),
			None => println!("  {} [{}] = {}", entry.name(), entry.tag().suffix(), render_data(entry.data())),
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InspectJson {
	path: String,
	entry_count: usize,
	entries: Vec<EntryJson>,
}

#[derive(serde::Serialize)]
struct EntryJson {
	name: String,
	tag: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	elems: Option<usize>,
	value: String,
}
