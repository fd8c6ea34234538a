use std::ops::{BitOr, BitOrAssign};

use tessera_engine::paint::Rgba;
use tessera_engine::text::FontArg;

/// A color reference: a named theme color or an explicit value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorArg {
    Theme(String),
    Rgb(Rgba),
}

impl From<Rgba> for ColorArg {
    fn from(rgb: Rgba) -> Self {
        ColorArg::Rgb(rgb)
    }
}

impl From<&str> for ColorArg {
    fn from(name: &str) -> Self {
        ColorArg::Theme(name.to_string())
    }
}

impl From<String> for ColorArg {
    fn from(name: String) -> Self {
        ColorArg::Theme(name)
    }
}

/// Text decoration flags.
///
/// Kept as booleans rather than a raw bitmask; combine with `|`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Decoration {
    pub underline: bool,
}

impl Decoration {
    pub const NONE: Decoration = Decoration { underline: false };
    pub const UNDERLINE: Decoration = Decoration { underline: true };

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl BitOr for Decoration {
    type Output = Decoration;

    fn bitor(self, rhs: Decoration) -> Decoration {
        Decoration { underline: self.underline || rhs.underline }
    }
}

impl BitOrAssign for Decoration {
    fn bitor_assign(&mut self, rhs: Decoration) {
        *self = *self | rhs;
    }
}

/// Opaque handle to a caller-owned hotspot.
///
/// The markup compiler only records which text ranges belong to which
/// handle; the hotspot itself lives with the caller (see
/// [`HotspotRegistry`](crate::hotspot::HotspotRegistry)).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct HotspotId(pub u64);

/// Fully resolved formatting in effect from one offset of a
/// [`RichText`](crate::RichText) up to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextMeta {
    pub font: FontArg,
    pub color: ColorArg,
    pub background_color: Option<ColorArg>,
    pub underline: bool,
    pub link: Option<HotspotId>,
}

impl RichTextMeta {
    pub fn new(font: impl Into<FontArg>, color: impl Into<ColorArg>) -> Self {
        Self {
            font: font.into(),
            color: color.into(),
            background_color: None,
            underline: false,
            link: None,
        }
    }

    pub fn background(mut self, color: impl Into<ColorArg>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn link(mut self, link: HotspotId) -> Self {
        self.link = Some(link);
        self
    }
}
