#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "nvrec", about = "Record/nvlist marshalling tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a JSON record and dump the resulting container entries.
	Inspect(cmd::inspect::Args),
	/// Encode then decode a JSON record and print the result.
	Roundtrip(cmd::roundtrip::Args),
	/// Show the wire width the key-width table resolves for keys.
	Width(cmd::width::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nvrec::nv::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Roundtrip(args) => cmd::roundtrip::run(args),
		Commands::Width(args) => cmd::width::run(args),
	}
}
