use nvrec::nv::{KeyWidths, Result};

#[derive(clap::Args)]
pub struct Args {
	#[arg(required = true)]
	pub keys: Vec<String>,
}

/// Print the wire width the key-width table resolves for each key.
pub fn run(args: Args) -> Result<()> {
	let widths = KeyWidths::default();
	for key in &args.keys {
		println!("{key}: {}", widths.resolve(key).suffix());
	}
	Ok(())
}
