use std::collections::{BTreeMap, BTreeSet};

use tessera_engine::text::FontArg;

use crate::attr::{ColorArg, Decoration, HotspotId, RichTextMeta};
use crate::error::RichTextError;
use crate::richtext::RichText;

// ── Markup ────────────────────────────────────────────────────────────────

/// One command in a markup sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    /// Literal text.
    Text(String),
    Font(FontArg),
    /// Foreground color; a second color at the same offset is the background.
    Color(ColorArg),
    Decoration(Decoration),
    /// `Some` starts a hotspot, `None` ends the open one.
    Hotspot(Option<HotspotId>),
}

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Markup::Text(s.to_string())
    }
}

impl From<String> for Markup {
    fn from(s: String) -> Self {
        Markup::Text(s)
    }
}

/// What the compiled text is used for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompileMode {
    /// Fresh text. Hotspots are allowed and a trailing `\n` is appended.
    Create,
    /// Replacement text for a hotspot that is already displayed.
    /// Hotspots are not allowed; empty text becomes a single space.
    Update,
}

// ── TextParam ─────────────────────────────────────────────────────────────

/// Text plus formatting commands, recorded at character offsets.
///
/// Every command takes effect at the current end of the text, i.e. it
/// applies to whatever text gets appended after it. Build it up with the
/// chained methods, then [`compile`](Self::compile) it once.
///
/// ```rust
/// use tessera_richtext::{CompileMode, Decoration, RichTextMeta, TextParam};
///
/// let mut tp = TextParam::new();
/// tp.text("plain ").color("red".into())?.decoration(Decoration::UNDERLINE).text("red");
///
/// let rich = tp.compile(&RichTextMeta::new("label", "fg"), CompileMode::Create)?;
/// assert_eq!(rich.text(), "plain red\n");
/// # Ok::<(), tessera_richtext::RichTextError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParam {
    string: String,
    /// Length of `string` in chars.
    len: usize,
    fonts: BTreeMap<usize, FontArg>,
    colors: BTreeMap<usize, ColorArg>,
    background_colors: BTreeMap<usize, ColorArg>,
    decorations: BTreeMap<usize, Decoration>,
    hotspots: BTreeMap<usize, Option<HotspotId>>,
}

impl TextParam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a `TextParam` from a command sequence.
    pub fn from_markup<I>(commands: I) -> Result<Self, RichTextError>
    where
        I: IntoIterator,
        I::Item: Into<Markup>,
    {
        let mut tp = Self::new();
        for cmd in commands {
            tp.push(cmd.into())?;
        }
        Ok(tp)
    }

    /// Accumulated text so far.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Length of the accumulated text in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_hotspots(&self) -> bool {
        !self.hotspots.is_empty()
    }

    /// True while a hotspot has been started and not yet ended.
    pub fn hotspot_open(&self) -> bool {
        matches!(self.hotspots.values().next_back(), Some(Some(_)))
    }

    /// Applies one command.
    pub fn push(&mut self, cmd: Markup) -> Result<&mut Self, RichTextError> {
        match cmd {
            Markup::Text(s) => Ok(self.text(&s)),
            Markup::Font(f) => self.font(f),
            Markup::Color(c) => self.color(c),
            Markup::Decoration(d) => Ok(self.decoration(d)),
            Markup::Hotspot(Some(h)) => self.hotspot(h),
            Markup::Hotspot(None) => self.end_hotspot(),
        }
    }

    /// Appends literal text.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.string.push_str(s);
        self.len += s.chars().count();
        self
    }

    /// Changes the font from the current offset on.
    pub fn font(&mut self, font: FontArg) -> Result<&mut Self, RichTextError> {
        let offset = self.len;
        if self.fonts.contains_key(&offset) {
            return Err(RichTextError::DuplicateFont { offset });
        }
        log::trace!("font {:?} at {}", font, offset);
        self.fonts.insert(offset, font);
        Ok(self)
    }

    /// Sets the foreground color from the current offset on.
    ///
    /// If a foreground color was already given at this exact offset, this
    /// sets the background color instead. A third color at the same offset
    /// is an error.
    pub fn color(&mut self, color: ColorArg) -> Result<&mut Self, RichTextError> {
        let offset = self.len;
        if !self.colors.contains_key(&offset) {
            log::trace!("color {:?} at {}", color, offset);
            self.colors.insert(offset, color);
            return Ok(self);
        }
        if self.background_colors.contains_key(&offset) {
            return Err(RichTextError::DuplicateColor { offset });
        }
        log::trace!("background color {:?} at {}", color, offset);
        self.background_colors.insert(offset, color);
        Ok(self)
    }

    /// ORs `decoration` into the flags recorded at the current offset.
    ///
    /// Flags do not carry over from earlier offsets: passing
    /// [`Decoration::NONE`] at a new offset turns underlining off.
    pub fn decoration(&mut self, decoration: Decoration) -> &mut Self {
        *self.decorations.entry(self.len).or_default() |= decoration;
        self
    }

    /// Starts a hotspot at the current offset.
    pub fn hotspot(&mut self, hotspot: HotspotId) -> Result<&mut Self, RichTextError> {
        let offset = self.len;
        if self.hotspots.contains_key(&offset) {
            return Err(RichTextError::DuplicateHotspot { offset });
        }
        log::trace!("hotspot {:?} starts at {}", hotspot, offset);
        self.hotspots.insert(offset, Some(hotspot));
        Ok(self)
    }

    /// Ends the open hotspot at the current offset.
    pub fn end_hotspot(&mut self) -> Result<&mut Self, RichTextError> {
        let offset = self.len;
        if self.hotspots.contains_key(&offset) {
            return Err(RichTextError::DuplicateHotspot { offset });
        }
        if !self.hotspot_open() {
            return Err(RichTextError::NoOpenHotspot { offset });
        }
        log::trace!("hotspot ends at {}", offset);
        self.hotspots.insert(offset, None);
        Ok(self)
    }

    /// Resolves the recorded commands into a [`RichText`].
    ///
    /// The result has an attribute record at offset 0, at every offset where
    /// a command was issued and, in [`CompileMode::Create`], at the end of
    /// the text where the trailing newline goes. Each record starts from the
    /// previous one (`defaults` for the first) and applies, in order: the
    /// decoration flags, the font, the foreground color (clearing any
    /// inherited background), the background color, and the hotspot.
    pub fn compile(
        self,
        defaults: &RichTextMeta,
        mode: CompileMode,
    ) -> Result<RichText, RichTextError> {
        if mode == CompileMode::Update && self.has_hotspots() {
            return Err(RichTextError::HotspotInReplacement);
        }

        let TextParam {
            mut string,
            len,
            fonts,
            colors,
            background_colors,
            decorations,
            hotspots,
        } = self;

        let mut offsets = BTreeSet::from([0]);
        if mode == CompileMode::Create {
            offsets.insert(len);
        }
        offsets.extend(fonts.keys());
        offsets.extend(colors.keys());
        offsets.extend(background_colors.keys());
        offsets.extend(decorations.keys());
        offsets.extend(hotspots.keys());

        let mut current = defaults.clone();
        let mut attributes = BTreeMap::new();

        for offset in offsets {
            if let Some(d) = decorations.get(&offset) {
                current.underline = (Decoration::NONE | *d).underline;
            }
            if let Some(f) = fonts.get(&offset) {
                current.font = f.clone();
            }
            if let Some(c) = colors.get(&offset) {
                current.color = c.clone();
                current.background_color = None;
            }
            if let Some(c) = background_colors.get(&offset) {
                current.background_color = Some(c.clone());
            }
            if let Some(h) = hotspots.get(&offset) {
                current.link = *h;
            }
            log::trace!("attributes at {}: {:?}", offset, current);
            attributes.insert(offset, current.clone());
        }

        let chars = match mode {
            CompileMode::Create => {
                // The trailing newline never belongs to a hotspot.
                if let Some(meta) = attributes.get_mut(&len) {
                    meta.link = None;
                }
                string.push('\n');
                len + 1
            }
            CompileMode::Update if len == 0 => {
                string.push(' ');
                1
            }
            CompileMode::Update => len,
        };

        Ok(RichText::new(string, chars, attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_engine::paint::Rgba;
    use tessera_engine::text::FontDescriptor;

    fn defaults() -> RichTextMeta {
        RichTextMeta::new("label", "label_fg")
    }

    fn keys(rich: &RichText) -> Vec<usize> {
        rich.attributes().keys().copied().collect()
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn offsets_count_chars_not_bytes() {
        let mut tp = TextParam::new();
        tp.text("héllo");
        assert_eq!(tp.len(), 5);
        tp.font("bold".into()).unwrap();
        assert_eq!(tp.fonts.keys().copied().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn duplicate_font_rejected() {
        let mut tp = TextParam::new();
        tp.font("a".into()).unwrap();
        assert_eq!(tp.font("b".into()).unwrap_err(), RichTextError::DuplicateFont { offset: 0 });
    }

    #[test]
    fn font_after_text_is_new_offset() {
        let mut tp = TextParam::new();
        tp.font("a".into()).unwrap().text("x").font("b".into()).unwrap();
        assert_eq!(tp.fonts.len(), 2);
    }

    #[test]
    fn second_color_is_background() {
        let mut tp = TextParam::new();
        tp.color("fg".into()).unwrap().color("bg".into()).unwrap();
        assert_eq!(tp.colors.get(&0), Some(&ColorArg::Theme("fg".into())));
        assert_eq!(tp.background_colors.get(&0), Some(&ColorArg::Theme("bg".into())));
    }

    #[test]
    fn third_color_rejected() {
        let mut tp = TextParam::new();
        tp.color("a".into()).unwrap().color("b".into()).unwrap();
        assert_eq!(tp.color("c".into()).unwrap_err(), RichTextError::DuplicateColor { offset: 0 });
    }

    #[test]
    fn decorations_or_at_same_offset() {
        let mut tp = TextParam::new();
        tp.decoration(Decoration::UNDERLINE).decoration(Decoration::NONE);
        assert_eq!(tp.decorations.get(&0), Some(&Decoration::UNDERLINE));
    }

    #[test]
    fn duplicate_hotspot_rejected() {
        let mut tp = TextParam::new();
        tp.hotspot(HotspotId(1)).unwrap();
        assert_eq!(
            tp.hotspot(HotspotId(2)).unwrap_err(),
            RichTextError::DuplicateHotspot { offset: 0 }
        );
    }

    #[test]
    fn end_without_open_rejected() {
        let mut tp = TextParam::new();
        tp.text("abc");
        assert_eq!(tp.end_hotspot().unwrap_err(), RichTextError::NoOpenHotspot { offset: 3 });
    }

    #[test]
    fn end_twice_rejected() {
        let mut tp = TextParam::new();
        tp.hotspot(HotspotId(1)).unwrap().text("a").end_hotspot().unwrap().text("b");
        assert_eq!(tp.end_hotspot().unwrap_err(), RichTextError::NoOpenHotspot { offset: 2 });
    }

    #[test]
    fn end_at_open_offset_rejected() {
        let mut tp = TextParam::new();
        tp.hotspot(HotspotId(1)).unwrap();
        assert_eq!(tp.end_hotspot().unwrap_err(), RichTextError::DuplicateHotspot { offset: 0 });
    }

    #[test]
    fn from_markup_sequence() {
        let tp = TextParam::from_markup([
            Markup::from("a"),
            Markup::Font("bold".into()),
            Markup::from("b"),
        ])
        .unwrap();
        assert_eq!(tp.as_str(), "ab");
        assert!(tp.fonts.contains_key(&1));
    }

    // ── compile: offsets ──────────────────────────────────────────────────

    #[test]
    fn create_offsets_include_zero_and_end() {
        let mut tp = TextParam::new();
        tp.text("ab").font("bold".into()).unwrap().text("cd");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        assert_eq!(keys(&rich), vec![0, 2, 4]);
        assert_eq!(rich.text(), "abcd\n");
        assert_eq!(rich.len(), 5);
    }

    #[test]
    fn update_offsets_exclude_end() {
        let mut tp = TextParam::new();
        tp.text("ab").font("bold".into()).unwrap().text("cd");
        let rich = tp.compile(&defaults(), CompileMode::Update).unwrap();
        assert_eq!(keys(&rich), vec![0, 2]);
        assert_eq!(rich.text(), "abcd");
    }

    #[test]
    fn update_empty_becomes_space() {
        let rich = TextParam::new().compile(&defaults(), CompileMode::Update).unwrap();
        assert_eq!(rich.text(), " ");
        assert_eq!(rich.len(), 1);
        assert_eq!(keys(&rich), vec![0]);
    }

    #[test]
    fn create_empty_is_newline() {
        let rich = TextParam::new().compile(&defaults(), CompileMode::Create).unwrap();
        assert_eq!(rich.text(), "\n");
        assert_eq!(keys(&rich), vec![0]);
    }

    #[test]
    fn update_rejects_hotspots() {
        let mut tp = TextParam::new();
        tp.hotspot(HotspotId(7)).unwrap().text("x").end_hotspot().unwrap();
        assert_eq!(
            tp.compile(&defaults(), CompileMode::Update).unwrap_err(),
            RichTextError::HotspotInReplacement
        );
    }

    // ── compile: resolution ───────────────────────────────────────────────

    #[test]
    fn first_record_is_defaults() {
        let mut tp = TextParam::new();
        tp.text("x");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        assert_eq!(rich.attributes()[&0], defaults());
    }

    #[test]
    fn font_replaces_wholesale() {
        let mut tp = TextParam::new();
        let f = FontDescriptor::new().family("serif");
        tp.text("a").font(f.clone().into()).unwrap().text("b");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        assert_eq!(rich.attributes()[&1].font, FontArg::Font(f));
        assert_eq!(rich.attributes()[&0].font, FontArg::Theme("label".into()));
    }

    #[test]
    fn foreground_clears_inherited_background() {
        let mut tp = TextParam::new();
        tp.color("fg1".into()).unwrap().color("bg1".into()).unwrap();
        tp.text("a").color(Rgba::WHITE.into()).unwrap().text("b");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        let a = &rich.attributes()[&0];
        assert_eq!(a.color, ColorArg::Theme("fg1".into()));
        assert_eq!(a.background_color, Some(ColorArg::Theme("bg1".into())));
        let b = &rich.attributes()[&1];
        assert_eq!(b.color, ColorArg::Rgb(Rgba::WHITE));
        assert_eq!(b.background_color, None);
    }

    #[test]
    fn default_background_survives_font_change() {
        let mut tp = TextParam::new();
        tp.text("a").font("bold".into()).unwrap().text("b");
        let rich = tp.compile(&defaults().background("hl"), CompileMode::Create).unwrap();
        assert_eq!(rich.attributes()[&1].background_color, Some(ColorArg::Theme("hl".into())));
    }

    #[test]
    fn underline_on_then_off() {
        let mut tp = TextParam::new();
        tp.decoration(Decoration::UNDERLINE).text("ab");
        tp.decoration(Decoration::NONE).text("cd");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        assert!(rich.attributes()[&0].underline);
        assert!(!rich.attributes()[&2].underline);
        assert!(!rich.attributes()[&4].underline);
    }

    #[test]
    fn underline_carries_over_unrelated_offsets() {
        let mut tp = TextParam::new();
        tp.decoration(Decoration::UNDERLINE).text("ab");
        tp.font("bold".into()).unwrap().text("cd");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        assert!(rich.attributes()[&2].underline);
    }

    #[test]
    fn hotspot_range_resolves() {
        let mut tp = TextParam::new();
        tp.text("see ").hotspot(HotspotId(3)).unwrap().text("here").end_hotspot().unwrap().text(".");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        assert_eq!(keys(&rich), vec![0, 4, 8, 9]);
        assert_eq!(rich.attributes()[&0].link, None);
        assert_eq!(rich.attributes()[&4].link, Some(HotspotId(3)));
        assert_eq!(rich.attributes()[&8].link, None);
    }

    #[test]
    fn trailing_newline_never_linked() {
        let mut tp = TextParam::new();
        tp.hotspot(HotspotId(9)).unwrap().text("open");
        let rich = tp.compile(&defaults(), CompileMode::Create).unwrap();
        assert_eq!(rich.attributes()[&0].link, Some(HotspotId(9)));
        assert_eq!(rich.attributes()[&4].link, None);
    }

    #[test]
    fn update_keeps_default_link() {
        let mut tp = TextParam::new();
        tp.text("new");
        let current = defaults().link(HotspotId(5));
        let rich = tp.compile(&current, CompileMode::Update).unwrap();
        assert_eq!(rich.attributes()[&0].link, Some(HotspotId(5)));
    }
}
