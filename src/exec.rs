use std::env;
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::consts;
use crate::error::{Result, ShimError};
use crate::paths;

/// Hand the invocation over to the real OCI runtime with the original,
/// unmodified argument vector. Stdio is inherited, so the runtime's output
/// reaches the caller directly; only the exit code needs forwarding.
pub fn delegate(argv: &[String]) -> Result<i32> {
	let path_var = env::var("PATH").unwrap_or_default();
	let runtime_path = find_runtime(&path_var)?;

	debug!(
		"delegating to {} with arguments {:?}",
		runtime_path.display(),
		argv
	);

	let status = Command::new(&runtime_path).args(argv).status()?;
	Ok(exit_code(status))
}

/// Locate the real runtime binary in PATH, in the configured order.
fn find_runtime(path_var: &str) -> Result<PathBuf> {
	consts::RUNTIME_BINARY_NAMES
		.iter()
		.find_map(|name| paths::find_in_path(name, path_var))
		.ok_or_else(|| ShimError::RuntimeNotFound(consts::RUNTIME_BINARY_NAMES.join(", ")))
}

fn exit_code(status: ExitStatus) -> i32 {
	// Signal deaths map to the shell convention of 128 + signal number.
	status
		.code()
		.unwrap_or_else(|| 128 + status.signal().unwrap_or(0))
}
