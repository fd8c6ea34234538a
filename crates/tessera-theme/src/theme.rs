use std::collections::BTreeMap;

use tessera_engine::paint::Rgba;

use crate::border::BorderValue;
use crate::color::{parse_color, ColorValue};
use crate::cursor::ThemeCursor;
use crate::error::ThemeError;
use crate::font::FontValue;
use crate::xml::XmlDocument;

/// The colors, borders and fonts defined at the top level of a theme
/// document, keyed by their `id` attribute.
///
/// Other top-level elements (layouts, dimensions, …) are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeValues {
    pub colors: BTreeMap<String, ColorValue>,
    pub borders: BTreeMap<String, BorderValue>,
    pub fonts: BTreeMap<String, FontValue>,
}

impl ThemeValues {
    /// Parses every `<color>`, `<border>` and `<font>` child of the root.
    ///
    /// Stops at the first failing entry; the error says which one.
    pub fn parse(doc: &XmlDocument) -> Result<Self, ThemeError> {
        let mut values = Self::default();

        for entry in doc.cursor().all_children() {
            match entry.name() {
                "color" => insert(&mut values.colors, entry, parse_color)?,
                "border" => insert(&mut values.borders, entry, BorderValue::parse)?,
                "font" => insert(&mut values.fonts, entry, FontValue::parse)?,
                _ => {}
            }
        }

        log::debug!(
            "theme: {} colors, {} borders, {} fonts",
            values.colors.len(),
            values.borders.len(),
            values.fonts.len()
        );
        Ok(values)
    }

    /// Parses a theme document from source text.
    pub fn parse_str(src: &str) -> Result<Self, ThemeError> {
        Self::parse(&XmlDocument::parse(src)?)
    }

    /// Resolves color `id` to a concrete value, following scaled colors
    /// back to their base.
    pub fn resolve_rgb(&self, id: &str) -> Result<Rgba, ThemeError> {
        let mut chain: Vec<&str> = Vec::new();
        self.resolve_inner(id, &mut chain)
    }

    fn resolve_inner<'a>(&'a self, id: &'a str, chain: &mut Vec<&'a str>) -> Result<Rgba, ThemeError> {
        if chain.contains(&id) {
            return Err(ThemeError::ColorCycle(id.to_string()));
        }
        chain.push(id);
        match self.colors.get(id) {
            None => Err(ThemeError::UnknownColor(id.to_string())),
            Some(ColorValue::Rgb(rgb)) => Ok(*rgb),
            Some(ColorValue::Scaled(scaled)) => {
                let base = self.resolve_inner(&scaled.from, chain)?;
                Ok(scaled.apply(base))
            }
            Some(_) => Err(ThemeError::NotSolid(id.to_string())),
        }
    }
}

fn insert<T>(
    map: &mut BTreeMap<String, T>,
    entry: ThemeCursor<'_>,
    parse: impl FnOnce(&ThemeCursor<'_>) -> Result<T, ThemeError>,
) -> Result<(), ThemeError> {
    let kind = entry.name();
    if !entry.has_attribute("id") {
        return Err(ThemeError::MissingId { kind: kind.to_string() });
    }
    let id = entry.attribute("id");
    if map.contains_key(id) {
        return Err(ThemeError::DuplicateId { kind: kind.to_string(), id: id.to_string() });
    }
    let value = parse(&entry).map_err(|e| e.in_element(kind, id))?;
    log::debug!("parsed <{} id={:?}>", kind, id);
    map.insert(id.to_string(), value);
    Ok(())
}
