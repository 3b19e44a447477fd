use std::env;
use std::path::PathBuf;

use getset::Getters;

use crate::consts;
use crate::error::{Result, ShimError};

/// Exact flag tokens the real runtime accepts for the bundle directory.
const BUNDLE_FLAGS: [&str; 3] = ["--bundle", "-bundle", "-b"];

/// The two pieces of the invocation the shim needs to understand. Every
/// other token is passed through to the real runtime untouched.
#[derive(Debug, Default, Getters, PartialEq)]
pub struct Args {
	#[get = "pub"]
	/// First positional token, e.g. `create` or `run`. Empty if none given.
	command: String,

	#[get = "pub"]
	/// Value of the bundle flag. Empty if the flag was not given.
	bundle_dir_path: String,
}

impl Args {
	/// Path to the OCI spec file of the bundle. Falls back to the current
	/// working directory when no bundle flag was given.
	pub fn spec_file_path(&self) -> Result<PathBuf> {
		let bundle_dir = if self.bundle_dir_path.is_empty() {
			env::current_dir()?
		} else {
			PathBuf::from(&self.bundle_dir_path)
		};
		Ok(bundle_dir.join(consts::SPEC_FILE_NAME))
	}
}

/// Extract the sub-command and bundle directory from the raw argument
/// vector. The grammar mirrors the real runtime: the bundle flag takes its
/// value either as the following token or joined with `=` (everything after
/// the first `=` is the value), flag and positional may appear in any
/// order, and a token consumed as the flag's value is never also treated as
/// the sub-command.
pub fn parse(argv: &[String]) -> Result<Args> {
	let mut command = String::new();
	let mut bundle_dir_path = String::new();

	let mut i = 0;
	while i < argv.len() {
		let token = &argv[i];

		if BUNDLE_FLAGS.contains(&token.as_str()) {
			match argv.get(i + 1) {
				Some(value) => {
					bundle_dir_path = value.clone();
					i += 2;
				}
				None => {
					return Err(ShimError::ArgSyntax(format!(
						"bundle flag {} is missing its value",
						token
					)));
				}
			}
			continue;
		}

		if let Some((flag, value)) = token.split_once('=') {
			if BUNDLE_FLAGS.contains(&flag) {
				bundle_dir_path = value.to_string();
				i += 1;
				continue;
			}
		}

		// The first positional token is the sub-command.
		if command.is_empty() {
			command = token.clone();
		}
		i += 1;
	}

	Ok(Args {
		command,
		bundle_dir_path,
	})
}
