//! Configuration module for plainmark
//!
//! This module handles normalizer settings, including
//! serialization/deserialization to/from JSON and TOML and loading
//! from a file.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
