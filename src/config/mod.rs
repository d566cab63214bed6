// src/config/mod.rs

//! Configuration for guardgen.
//!
//! Responsibilities:
//! - The [`ConfigProvider`] seam the compiler reads through (`model.rs`).
//! - The closed [`Value`] type (`value.rs`).
//! - Loading a TOML config through the storage layer (`loader.rs`).
//! - Structural validation of the well-known keys (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;
pub mod value;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigProvider, GuardConfig};
pub use validate::validate_config;
pub use value::Value;
