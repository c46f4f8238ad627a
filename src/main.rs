mod cli;
mod settings;

use std::io;

use anyhow::Result;
use cli::{parse_cli, render};
use stylecfg::logging;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	render(&cli, &resolved, &mut io::stdout().lock())
}
