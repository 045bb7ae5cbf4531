//! Auth Model CLI library
//!
//! Rendering logic behind the `auth-model` binary, exposed for testing.

pub mod render;

pub use render::{render, resolve_config, RenderOptions};
