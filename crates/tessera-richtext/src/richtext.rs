use std::collections::BTreeMap;
use std::ops::Range;

use crate::attr::{HotspotId, RichTextMeta};

/// Compiled, immutable attributed text.
///
/// Holds the final text (including the trailing sentinel) and a map from
/// character offset to the formatting in effect from that offset up to the
/// next one. Produced by [`TextParam::compile`](crate::TextParam::compile).
#[derive(Debug, Clone, PartialEq)]
pub struct RichText {
    text: String,
    /// Length of `text` in chars.
    len: usize,
    attributes: BTreeMap<usize, RichTextMeta>,
}

impl RichText {
    pub(crate) fn new(text: String, len: usize, attributes: BTreeMap<usize, RichTextMeta>) -> Self {
        Self { text, len, attributes }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset → formatting records, in ascending offset order.
    #[inline]
    pub fn attributes(&self) -> &BTreeMap<usize, RichTextMeta> {
        &self.attributes
    }

    /// Formatting of the character at `offset`, or `None` past the end.
    pub fn meta_at(&self, offset: usize) -> Option<&RichTextMeta> {
        if offset >= self.len {
            return None;
        }
        self.attributes.range(..=offset).next_back().map(|(_, m)| m)
    }

    /// Hotspot linked to the character at `offset`, if any.
    pub fn hotspot_at(&self, offset: usize) -> Option<HotspotId> {
        self.meta_at(offset).and_then(|m| m.link)
    }

    /// Iterates non-empty runs of uniformly formatted characters as
    /// `(char range, formatting)`.
    pub fn runs(&self) -> impl Iterator<Item = (Range<usize>, &RichTextMeta)> + '_ {
        let len = self.len;
        let mut iter = self.attributes.iter().peekable();
        std::iter::from_fn(move || {
            loop {
                let (&start, meta) = iter.next()?;
                let end = iter.peek().map(|(next, _)| **next).unwrap_or(len).min(len);
                if start < end {
                    return Some((start..end, meta));
                }
            }
        })
    }

    /// The text of one run, sliced by char range.
    pub fn slice(&self, range: Range<usize>) -> &str {
        let byte_at = |char_offset: usize| {
            self.text
                .char_indices()
                .nth(char_offset)
                .map(|(i, _)| i)
                .unwrap_or(self.text.len())
        };
        let start = byte_at(range.start);
        let end = byte_at(range.end).max(start);
        &self.text[start..end]
    }
}

#[cfg(test)]
mod tests {
    use crate::{CompileMode, Decoration, HotspotId, RichTextMeta, TextParam};

    fn compile(tp: TextParam) -> crate::RichText {
        tp.compile(&RichTextMeta::new("label", "fg"), CompileMode::Create).unwrap()
    }

    #[test]
    fn meta_at_looks_backwards() {
        let mut tp = TextParam::new();
        tp.text("ab").decoration(Decoration::UNDERLINE).text("cd");
        let rich = compile(tp);
        assert!(!rich.meta_at(1).unwrap().underline);
        assert!(rich.meta_at(2).unwrap().underline);
        assert!(rich.meta_at(3).unwrap().underline);
        assert!(rich.meta_at(5).is_none());
    }

    #[test]
    fn runs_cover_whole_text() {
        let mut tp = TextParam::new();
        tp.text("ab").font("bold".into()).unwrap().text("cd");
        let rich = compile(tp);
        let ranges: Vec<_> = rich.runs().map(|(r, _)| r).collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..5]);
        assert_eq!(rich.slice(2..4), "cd");
        assert_eq!(rich.slice(4..5), "\n");
    }

    #[test]
    fn runs_skip_records_past_the_end() {
        let mut tp = TextParam::new();
        tp.text("x").font("bold".into()).unwrap();
        let rich = tp.compile(&RichTextMeta::new("label", "fg"), CompileMode::Update).unwrap();
        assert_eq!(rich.attributes().len(), 2);
        let ranges: Vec<_> = rich.runs().map(|(r, _)| r).collect();
        assert_eq!(ranges, vec![0..1]);
    }

    #[test]
    fn hotspot_lookup() {
        let mut tp = TextParam::new();
        tp.text("a").hotspot(HotspotId(2)).unwrap().text("é").end_hotspot().unwrap();
        let rich = compile(tp);
        assert_eq!(rich.hotspot_at(0), None);
        assert_eq!(rich.hotspot_at(1), Some(HotspotId(2)));
        assert_eq!(rich.hotspot_at(2), None);
        assert_eq!(rich.slice(1..2), "é");
    }
}
