use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShimError>;

/// Errors the shim reports itself. Anything that happens after the hand-off
/// to the real runtime is the runtime's to report.
#[derive(Debug, Error)]
pub enum ShimError {
	/// Malformed flag syntax on the command line.
	#[error("invalid argument syntax: {0}")]
	ArgSyntax(String),

	/// The shim configuration exists but could not be read or parsed.
	#[error("configuration error: {0}")]
	Config(String),

	/// The bundle spec file could not be opened, read or decoded.
	#[error("could not read spec file {path}: {reason}")]
	SpecRead { path: PathBuf, reason: String },

	/// The mutated spec could not be serialized or written back.
	#[error("could not write spec file {path}: {reason}")]
	SpecWrite { path: PathBuf, reason: String },

	/// The device hook binary could not be located.
	#[error("could not resolve device hook: {0}")]
	HookResolution(String),

	/// None of the known OCI runtimes was found in PATH.
	#[error("no OCI runtime found in PATH (tried {0})")]
	RuntimeNotFound(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
