use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use getset::Getters;
use serde::Deserialize;

use crate::consts;
use crate::error::{Result, ShimError};

/// Settings of the shim itself, separate from the OCI spec of any bundle.
#[derive(Debug, Default, Getters, PartialEq)]
pub struct Config {
	#[get = "pub"]
	/// Target file for diagnostic logging. Logging is disabled when unset.
	debug_file_path: Option<PathBuf>,
}

/// On-disk layout of `config.toml`. Unknown sections and keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
	#[serde(rename = "hermit-container-runtime", default)]
	runtime: RuntimeSection,
}

#[derive(Debug, Default, Deserialize)]
struct RuntimeSection {
	debug: Option<PathBuf>,
}

/// Resolve the shim configuration from the process environment.
pub fn get_config() -> Result<Config> {
	let override_dir = env::var_os(consts::CONFIG_DIR_OVERRIDE)
		.filter(|dir| !dir.is_empty())
		.map(PathBuf::from);
	resolve_config(override_dir)
}

/// Resolve the shim configuration from an explicit directory override.
/// A missing configuration file yields the defaults; an unreadable or
/// unparsable one is an error.
pub fn resolve_config(override_dir: Option<PathBuf>) -> Result<Config> {
	let config_dir =
		override_dir.unwrap_or_else(|| PathBuf::from(consts::CONFIG_DIR_DEFAULT));
	let config_file = config_dir.join(consts::CONFIG_FILE_PATH);

	let content = match fs::read_to_string(&config_file) {
		Ok(content) => content,
		Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
		Err(err) => {
			return Err(ShimError::Config(format!(
				"could not read {}: {}",
				config_file.display(),
				err
			)));
		}
	};

	let parsed: ConfigFile = toml::from_str(&content).map_err(|err| {
		ShimError::Config(format!("could not parse {}: {}", config_file.display(), err))
	})?;

	Ok(Config {
		debug_file_path: parsed.runtime.debug,
	})
}
