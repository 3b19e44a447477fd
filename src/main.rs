#[macro_use]
extern crate colour;
#[macro_use]
extern crate log;

mod args;
mod config;
mod consts;
mod error;
mod exec;
mod hooks;
mod logging;
mod paths;
mod spec;

use std::env;
use std::process;

use crate::args::Args;
use crate::error::Result;

pub fn main() {
	logging::init();
	std::panic::set_hook(Box::new(|panic_info| {
		error!("PANIC: {}", panic_info);
	}));

	let argv: Vec<String> = env::args().skip(1).collect();
	match run(&argv) {
		Ok(exit_code) => process::exit(exit_code),
		Err(err) => {
			error!("{}", err);
			process::exit(1);
		}
	}
}

/// Parse the invocation, prepare the bundle when a container is about to be
/// instantiated, then hand over to the real runtime in every case. The
/// returned value is the real runtime's exit code.
fn run(argv: &[String]) -> Result<i32> {
	let arguments = args::parse(argv)?;

	// Only `create` instantiates a container; every other sub-command goes
	// straight through to the real runtime.
	if arguments.command() == "create" {
		prepare_bundle(&arguments)?;
	}

	exec::delegate(argv)
}

/// The read-modify-write cycle on the bundle spec: resolve the shim
/// configuration, load the spec, inject the device hook and persist the
/// result. Any failure here aborts the invocation before the real runtime
/// sees the bundle.
fn prepare_bundle(arguments: &Args) -> Result<()> {
	let config = config::get_config()?;
	if let Some(debug_file_path) = config.debug_file_path() {
		logging::set_debug_file(debug_file_path);
	}
	debug!(
		"started with command {}",
		env::args().collect::<Vec<String>>().join(" ")
	);

	let spec_path = arguments.spec_file_path()?;
	let mut spec_file = spec::SpecFile::load(&spec_path)?;
	debug!(
		"loaded spec {} (OCI version {})",
		spec_path.display(),
		spec_file.spec().version()
	);
	hooks::add_device_hook(spec_file.spec_mut())?;
	spec_file.save()?;
	info!("device hook present in {}", spec_path.display());
	Ok(())
}
