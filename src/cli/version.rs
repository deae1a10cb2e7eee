//! `--version`.

/// Crate version, from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_string() -> String {
    format!("civic {}", VERSION)
}

/// Print the version and exit.
pub fn handle_version_command() -> ! {
    println!("{}", version_string());
    std::process::exit(0)
}
