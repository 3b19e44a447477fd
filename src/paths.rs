use std::path::PathBuf;

/// Search a PATH-style list of directories for a binary with the given name
/// and return the first match.
pub fn find_in_path(name: &str, path_var: &str) -> Option<PathBuf> {
	for folder in path_var.split(':') {
		if folder.is_empty() {
			continue;
		}
		let candidate = PathBuf::from(folder).join(name);
		if candidate.exists() {
			return Some(candidate);
		}
	}
	None
}
