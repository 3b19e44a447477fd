/// File name of the OCI runtime specification inside a bundle.
pub const SPEC_FILE_NAME: &str = "config.json";

/// Name of the prestart hook binary that performs the device setup.
pub const HOOK_BINARY_NAME: &str = "hermit-container-hook";

/// Installed location of the hook binary, used when PATH does not contain it.
pub const HOOK_DEFAULT_PATH: &str = "/usr/bin/hermit-container-hook";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_OVERRIDE: &str = "XDG_CONFIG_HOME";

/// Default configuration directory.
pub const CONFIG_DIR_DEFAULT: &str = "/etc";

/// Configuration file, relative to the configuration directory.
pub const CONFIG_FILE_PATH: &str = "hermit-container-runtime/config.toml";

/// Real OCI runtimes this shim delegates to, searched in PATH in this order.
pub const RUNTIME_BINARY_NAMES: &[&str] = &["docker-runc", "runc"];
