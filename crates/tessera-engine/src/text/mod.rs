//! Font description values.
//!
//! Nothing here loads or rasterizes fonts; a descriptor only names what the
//! text layer should look up.

mod font;

pub use font::{FontArg, FontDescriptor, FontSize};
