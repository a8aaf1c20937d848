//! Async HTTP lookups against upstream package registries (`--online`).
//!
//! Each module exposes `package_exists(client, name)`, which returns `Ok(true)` when
//! the registry knows the package, `Ok(false)` on a non-success status, and `Err`
//! on network failures.

pub mod npm;
pub mod nuget;
