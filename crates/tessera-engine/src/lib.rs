//! Tessera engine crate.
//!
//! This crate owns the value types shared by the markup compiler and the
//! theme parser, plus logger setup for binaries.

pub mod logging;
pub mod paint;
pub mod text;
