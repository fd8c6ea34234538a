use tessera_engine::text::{FontDescriptor, FontSize};

use crate::cursor::ThemeCursor;
use crate::error::ThemeError;
use crate::number::optional_f64;

/// Receives the parts of a `<font>` element.
///
/// Only one of the three size setters is meant to be used per font. If a
/// theme gives more than one they are all called, in the order
/// `point_size`, `scaled_size`, `scale`.
pub trait FontVisitor {
    /// `<from>`: name of the font this one inherits from.
    fn set_from(&mut self, name: &str);
    fn set_point_size(&mut self, size: f64);
    fn set_scaled_size(&mut self, size: f64);
    fn set_scale(&mut self, scale: f64);
    fn set_family(&mut self, value: &str);
    fn set_foundry(&mut self, value: &str);
    fn set_style(&mut self, value: &str);
    fn set_weight(&mut self, value: &str);
    fn set_spacing(&mut self, value: &str);
    fn set_slant(&mut self, value: &str);
    fn set_width(&mut self, value: &str);
}

/// Walks the `<font>` element at `cursor`, calling `visitor` for each
/// element found.
pub fn parse_font<V: FontVisitor + ?Sized>(
    cursor: &ThemeCursor<'_>,
    visitor: &mut V,
) -> Result<(), ThemeError> {
    if let Some(name) = cursor.child_text("from") {
        visitor.set_from(name);
    }

    if let Some(v) = optional_f64(cursor, "point_size")? {
        visitor.set_point_size(v);
    }
    if let Some(v) = optional_f64(cursor, "scaled_size")? {
        visitor.set_scaled_size(v);
    }
    if let Some(v) = optional_f64(cursor, "scale")? {
        visitor.set_scale(v);
    }

    let fields: [(&str, fn(&mut V, &str)); 7] = [
        ("family", V::set_family),
        ("foundry", V::set_foundry),
        ("style", V::set_style),
        ("weight", V::set_weight),
        ("spacing", V::set_spacing),
        ("slant", V::set_slant),
        ("width", V::set_width),
    ];
    for (name, setter) in fields {
        if let Some(value) = cursor.child_text(name) {
            setter(visitor, value);
        }
    }
    Ok(())
}

/// Everything a `<font>` element specified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontValue {
    pub from: Option<String>,
    pub descriptor: FontDescriptor,
}

impl FontValue {
    pub fn parse(cursor: &ThemeCursor<'_>) -> Result<Self, ThemeError> {
        let mut value = Self::default();
        parse_font(cursor, &mut value)?;
        Ok(value)
    }

    /// The font attributes, without the inheritance link.
    pub fn to_descriptor(&self) -> FontDescriptor {
        self.descriptor.clone()
    }
}

impl FontVisitor for FontValue {
    fn set_from(&mut self, name: &str) {
        self.from = Some(name.to_string());
    }

    fn set_point_size(&mut self, size: f64) {
        self.descriptor.size = Some(FontSize::Point(size));
    }

    fn set_scaled_size(&mut self, size: f64) {
        self.descriptor.size = Some(FontSize::Scaled(size));
    }

    fn set_scale(&mut self, scale: f64) {
        self.descriptor.size = Some(FontSize::Scale(scale));
    }

    fn set_family(&mut self, value: &str) {
        self.descriptor.family = Some(value.to_string());
    }

    fn set_foundry(&mut self, value: &str) {
        self.descriptor.foundry = Some(value.to_string());
    }

    fn set_style(&mut self, value: &str) {
        self.descriptor.style = Some(value.to_string());
    }

    fn set_weight(&mut self, value: &str) {
        self.descriptor.weight = Some(value.to_string());
    }

    fn set_spacing(&mut self, value: &str) {
        self.descriptor.spacing = Some(value.to_string());
    }

    fn set_slant(&mut self, value: &str) {
        self.descriptor.slant = Some(value.to_string());
    }

    fn set_width(&mut self, value: &str) {
        self.descriptor.width = Some(value.to_string());
    }
}
