use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use oci_spec::runtime::Spec;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, ShimError};

/// An OCI runtime spec document tied to the file it was loaded from. The
/// handle is opened read-write so the rewritten document goes back through
/// the same handle; it is closed on drop on every path.
pub struct SpecFile {
	path: PathBuf,
	file: File,
	spec: Spec,
}

impl SpecFile {
	/// Read and decode the spec document at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let mut file = OpenOptions::new()
			.read(true)
			.write(true)
			.open(path)
			.map_err(|err| ShimError::SpecRead {
				path: path.to_path_buf(),
				reason: err.to_string(),
			})?;

		let mut content = Vec::new();
		file.read_to_end(&mut content)
			.map_err(|err| ShimError::SpecRead {
				path: path.to_path_buf(),
				reason: err.to_string(),
			})?;

		let spec = decode(&content).map_err(|err| ShimError::SpecRead {
			path: path.to_path_buf(),
			reason: err.to_string(),
		})?;

		Ok(Self {
			path: path.to_path_buf(),
			file,
			spec,
		})
	}

	pub fn spec(&self) -> &Spec {
		&self.spec
	}

	pub fn spec_mut(&mut self) -> &mut Spec {
		&mut self.spec
	}

	/// Serialize the document back to the file it was loaded from,
	/// overwriting from offset zero. The file is truncated to the new
	/// length so a shorter document leaves no stale trailing bytes.
	pub fn save(&mut self) -> Result<()> {
		let mut output = Vec::new();
		let formatter = PrettyFormatter::with_indent(b"\t");
		let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
		self.spec
			.serialize(&mut serializer)
			.map_err(|err| self.write_error(err.to_string()))?;

		self.file
			.seek(SeekFrom::Start(0))
			.map_err(|err| self.write_error(err.to_string()))?;
		self.file
			.write_all(&output)
			.map_err(|err| self.write_error(err.to_string()))?;
		self.file
			.set_len(output.len() as u64)
			.map_err(|err| self.write_error(err.to_string()))?;
		Ok(())
	}

	fn write_error(&self, reason: String) -> ShimError {
		ShimError::SpecWrite {
			path: self.path.clone(),
			reason,
		}
	}
}

/// Decode strictly first, then retry with a streaming decode that tolerates
/// trailing artifacts after the document, before giving up.
fn decode(content: &[u8]) -> serde_json::Result<Spec> {
	serde_json::from_slice(content).or_else(|_| {
		let mut deserializer = serde_json::Deserializer::from_slice(content);
		Spec::deserialize(&mut deserializer)
	})
}
