//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`). Prefixes every
/// user-facing report line so build logs attribute the output correctly.
pub const NAME: &str = env!("CARGO_PKG_NAME");
