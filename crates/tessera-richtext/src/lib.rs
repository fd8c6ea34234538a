//! Markup compiler for attributed text.
//!
//! A [`TextParam`] records literal text interleaved with formatting
//! commands (font, colors, underline, hotspots), each taking effect at the
//! current end of the text. [`TextParam::compile`] resolves them into a
//! [`RichText`]: the text plus a dense offset → [`RichTextMeta`] table that a
//! text layout engine can walk run by run.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`attr`] | `ColorArg`, `Decoration`, `HotspotId`, `RichTextMeta` |
//! | [`error`] | `RichTextError`, `MarkupError` |
//! | [`param`] | `TextParam`, `Markup`, `CompileMode` |
//! | [`richtext`] | `RichText` |
//! | [`markup`] | `${...}` textual markup parser |
//! | [`hotspot`] | `HotspotRegistry`, `HotspotEvent` |
//!
//! # Quick start
//!
//! ```rust
//! use tessera_richtext::{parse_markup, CompileMode, RichTextMeta};
//!
//! let tp = parse_markup("Hello ${color:accent}world").unwrap();
//! let rich = tp.compile(&RichTextMeta::new("label", "fg"), CompileMode::Create).unwrap();
//!
//! assert_eq!(rich.text(), "Hello world\n");
//! assert_eq!(rich.attributes().keys().copied().collect::<Vec<_>>(), vec![0, 6, 11]);
//! ```

pub mod attr;
pub mod error;
pub mod hotspot;
pub mod markup;
pub mod param;
pub mod richtext;

pub use attr::{ColorArg, Decoration, HotspotId, RichTextMeta};
pub use error::{MarkupError, RichTextError};
pub use hotspot::{HotspotEvent, HotspotRegistry};
pub use markup::{parse_markup, parse_markup_with_links};
pub use param::{CompileMode, Markup, TextParam};
pub use richtext::RichText;
