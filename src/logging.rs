use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{set_logger, set_max_level, Level, LevelFilter, Metadata, Record};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Logger of the shim. Errors and warnings go to stderr; once a debug file
/// is attached, every record is additionally written there. Stdout is never
/// touched, it belongs to the delegated runtime.
struct ShimLogger {
	debug_file: Mutex<Option<File>>,
}

static LOGGER: ShimLogger = ShimLogger {
	debug_file: Mutex::new(None),
};

impl log::Log for ShimLogger {
	fn enabled(&self, _metadata: &Metadata) -> bool {
		true
	}

	fn log(&self, record: &Record) {
		if let Ok(mut guard) = self.debug_file.lock() {
			if let Some(file) = guard.as_mut() {
				let timestamp = OffsetDateTime::now_utc()
					.format(&Rfc3339)
					.unwrap_or_default();
				let _ = writeln!(file, "{} [{}] {}", timestamp, record.level(), record.args());
			}
		}

		if record.level() <= Level::Warn {
			self.print_level(record.level());
			eprintln!(" {}", record.args());
		}
	}

	fn flush(&self) {}
}

impl ShimLogger {
	fn print_level(&self, level: Level) {
		match level {
			Level::Error => {
				e_red!("[{}]", level);
			}
			Level::Warn => {
				e_yellow!("[{}]", level);
			}
			_ => {
				e_white!("[{}]", level);
			}
		}
	}
}

pub fn init() {
	if set_logger(&LOGGER).is_ok() {
		set_max_level(LevelFilter::Debug);
	}
}

/// Route diagnostic output to the debug file named in the shim
/// configuration. Failing to open the file downgrades to stderr-only
/// logging instead of failing the invocation.
pub fn set_debug_file(path: &Path) {
	match OpenOptions::new().create(true).append(true).open(path) {
		Ok(file) => {
			if let Ok(mut guard) = LOGGER.debug_file.lock() {
				*guard = Some(file);
			}
		}
		Err(err) => {
			warn!(
				"could not open debug log file {}: {}",
				path.display(),
				err
			);
		}
	}
}
