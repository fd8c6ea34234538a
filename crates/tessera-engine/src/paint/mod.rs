//! Paint values shared between the markup compiler and the theme parser.
//!
//! Scope:
//! - explicit RGBA colors with 16-bit channels
//!
//! Gradients are theme-level values and live in `tessera-theme`.

pub mod rgba;

pub use rgba::{Channel, Rgba};
