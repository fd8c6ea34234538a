//! Minimal element tree on top of `quick-xml`.
//!
//! Only what theme parsing needs: element names, attributes and trimmed
//! text. Comments, processing instructions and namespaces are dropped.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::cursor::ThemeCursor;
use crate::error::ThemeError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Concatenated character data directly inside this element.
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_start(e: &BytesStart<'_>) -> Result<Self, ThemeError> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| ThemeError::Xml(format!("<{name}>: {err}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| ThemeError::Xml(format!("<{name} {key}>: {err}")))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self { name, attributes, text: String::new(), children: Vec::new() })
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn parse(src: &str) -> Result<Self, ThemeError> {
        let mut reader = Reader::from_str(src);
        reader.trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                ThemeError::Xml(format!("at byte {}: {}", reader.buffer_position(), e))
            })?;
            match event {
                Event::Start(ref e) => stack.push(XmlElement::from_start(e)?),
                Event::Empty(ref e) => {
                    let element = XmlElement::from_start(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| ThemeError::Xml("unbalanced end tag".to_string()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(ref t) => {
                    let text = t.unescape().map_err(|e| ThemeError::Xml(e.to_string()))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Event::CData(t) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ThemeError::Xml(format!("unclosed element <{}>", open.name)));
        }
        let root = root.ok_or_else(|| ThemeError::Xml("document has no root element".to_string()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Cursor positioned at the root element.
    pub fn cursor(&self) -> ThemeCursor<'_> {
        ThemeCursor::new(&self.root)
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), ThemeError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(ThemeError::Xml("more than one root element".to_string())),
    }
    Ok(())
}
