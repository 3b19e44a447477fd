use std::env;
use std::path::PathBuf;

use oci_spec::runtime::{HookBuilder, Spec};

use crate::consts;
use crate::error::{Result, ShimError};
use crate::paths;

/// Append the device-setup prestart hook to the spec unless one is already
/// present. Repeated invocations against the same document leave exactly
/// one entry; hooks of other origins are preserved in order.
pub fn add_device_hook(spec: &mut Spec) -> Result<()> {
	let hook_path = resolve_hook_path()?;
	insert_hook(spec, hook_path)
}

/// Locate the hook binary, preferring PATH over the installed default.
fn resolve_hook_path() -> Result<PathBuf> {
	let path_var = env::var("PATH").unwrap_or_default();
	if let Some(path) = paths::find_in_path(consts::HOOK_BINARY_NAME, &path_var) {
		return Ok(path);
	}

	let fallback = PathBuf::from(consts::HOOK_DEFAULT_PATH);
	if fallback.exists() {
		return Ok(fallback);
	}

	Err(ShimError::HookResolution(format!(
		"{} not found in PATH or at {}",
		consts::HOOK_BINARY_NAME,
		consts::HOOK_DEFAULT_PATH
	)))
}

#[allow(deprecated)]
fn insert_hook(spec: &mut Spec, hook_path: PathBuf) -> Result<()> {
	let mut hooks = spec.hooks().clone().unwrap_or_default();
	let mut prestart = hooks.prestart().clone().unwrap_or_default();

	let already_present = prestart.iter().any(|hook| {
		hook.path()
			.to_string_lossy()
			.contains(consts::HOOK_BINARY_NAME)
	});
	if already_present {
		debug!("device hook already present in spec, leaving it untouched");
		return Ok(());
	}

	let hook = HookBuilder::default()
		.path(hook_path.clone())
		.args(vec![
			hook_path.to_string_lossy().into_owned(),
			"prestart".to_string(),
		])
		.build()
		.map_err(|err| ShimError::HookResolution(err.to_string()))?;

	prestart.push(hook);
	hooks.set_prestart(Some(prestart));
	spec.set_hooks(Some(hooks));
	Ok(())
}
