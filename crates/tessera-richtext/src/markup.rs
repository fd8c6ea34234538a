//! Textual form of a markup command sequence.
//!
//! Literal text with embedded `${key:argument}` directives:
//!
//! | Directive | Command |
//! |-----------|---------|
//! | `${font:NAME}` | font change to a theme font |
//! | `${color:NAME}` / `${color:#rrggbb[aa]}` | color (a second one at the same spot is the background) |
//! | `${decoration:underline}` / `${decoration:none}` | decoration flags |
//! | `${link:NAME}` … `${link}` | hotspot, resolved through the link table |
//!
//! `$$` is a literal `$`. A `$` not followed by `{` or `$` is kept as is.

use std::collections::HashMap;

use tessera_engine::paint::Rgba;

use crate::attr::{ColorArg, Decoration, HotspotId};
use crate::error::MarkupError;
use crate::param::{Markup, TextParam};

// ── Parser ────────────────────────────────────────────────────────────────

struct MarkupParser<'s, 'l> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
    links: &'l HashMap<String, HotspotId>,
}

impl<'s, 'l> MarkupParser<'s, 'l> {
    fn new(src: &'s str, links: &'l HashMap<String, HotspotId>) -> Self {
        Self { src, pos: 0, line: 1, col: 1, links }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn parse(mut self) -> Result<TextParam, MarkupError> {
        let mut tp = TextParam::new();
        let mut literal = String::new();

        while let Some(ch) = self.advance() {
            if ch != '$' {
                literal.push(ch);
                continue;
            }
            match self.peek() {
                Some('$') => {
                    self.advance();
                    literal.push('$');
                }
                Some('{') => {
                    // Position of the `$` for error reporting.
                    let (line, col) = (self.line, self.col - 1);
                    self.advance(); // consume `{`
                    tp.text(&literal);
                    literal.clear();
                    let cmd = self.directive(line, col)?;
                    tp.push(cmd)
                        .map_err(|e| MarkupError::new(e.to_string(), line, col))?;
                }
                _ => literal.push('$'),
            }
        }
        tp.text(&literal);
        Ok(tp)
    }

    /// Parses the body of a `${...}` directive; the `${` is already consumed.
    fn directive(&mut self, line: usize, col: usize) -> Result<Markup, MarkupError> {
        let start = self.pos;
        loop {
            match self.advance() {
                None => return Err(MarkupError::new("unterminated `${` directive", line, col)),
                Some('}') => break,
                Some(_) => {}
            }
        }
        let body = &self.src[start..self.pos - 1];
        let (key, arg) = match body.split_once(':') {
            Some((k, a)) => (k.trim(), Some(a.trim())),
            None => (body.trim(), None),
        };
        let err = |msg: String| MarkupError::new(msg, line, col);

        match (key, arg) {
            ("font", Some(name)) if !name.is_empty() => Ok(Markup::Font(name.into())),
            ("color", Some(spec)) if spec.starts_with('#') => {
                parse_hex(&spec[1..]).map(|c| Markup::Color(ColorArg::Rgb(c))).ok_or_else(|| {
                    err(format!("color literal must be #rrggbb or #rrggbbaa, got {spec:?}"))
                })
            }
            ("color", Some(name)) if !name.is_empty() => Ok(Markup::Color(name.into())),
            ("decoration", Some("underline")) => Ok(Markup::Decoration(Decoration::UNDERLINE)),
            ("decoration", Some("none")) => Ok(Markup::Decoration(Decoration::NONE)),
            ("decoration", Some(other)) => Err(err(format!("unknown decoration {other:?}"))),
            ("link", None) => Ok(Markup::Hotspot(None)),
            ("link", Some(name)) => match self.links.get(name) {
                Some(id) => Ok(Markup::Hotspot(Some(*id))),
                None => Err(err(format!("unknown link {name:?}"))),
            },
            ("font" | "color" | "decoration", _) => {
                Err(err(format!("`{key}` requires an argument")))
            }
            _ => Err(err(format!("unknown directive {key:?}"))),
        }
    }
}

/// Parses `rrggbb` or `rrggbbaa` hex digits.
fn parse_hex(hex: &str) -> Option<Rgba> {
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(Rgba::from_u8(byte(0)?, byte(2)?, byte(4)?, a))
}

// ── Public entry points ───────────────────────────────────────────────────

/// Parses textual markup without any links.
pub fn parse_markup(src: &str) -> Result<TextParam, MarkupError> {
    parse_markup_with_links(src, &HashMap::new())
}

/// Parses textual markup, resolving `${link:NAME}` through `links`.
pub fn parse_markup_with_links(
    src: &str,
    links: &HashMap<String, HotspotId>,
) -> Result<TextParam, MarkupError> {
    MarkupParser::new(src, links).parse()
}
