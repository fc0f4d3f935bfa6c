//! Name and version as printed by the `version` command and the startup log.

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// "spoken-time v0.1.0"
pub fn version_line() -> String {
    format!("{} v{}", NAME, VERSION)
}
