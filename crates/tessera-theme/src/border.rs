use crate::cursor::ThemeCursor;
use crate::error::ThemeError;
use crate::number::{optional_u32, parse_f64};

/// Receives the parts of a `<border>` element.
///
/// [`parse_border`] calls a setter only for elements that are present, so
/// whatever the implementor starts with stays in place for the rest.
pub trait BorderVisitor {
    /// `<from>`: name of the border this one inherits from.
    fn set_from(&mut self, name: &str);
    fn set_color(&mut self, name: &str);
    /// `<color2>`: secondary color, used between dashes.
    fn set_color2(&mut self, name: &str);
    /// `<width>` and its optional `<width_scale>`.
    fn set_width(&mut self, size: &str, scale: Option<u32>);
    fn set_height(&mut self, size: &str, scale: Option<u32>);
    fn set_hradius(&mut self, size: &str, scale: Option<u32>);
    fn set_vradius(&mut self, size: &str, scale: Option<u32>);
    fn set_rounded(&mut self, rounded: bool);
    /// Every `<dash>`, in document order. Not called when there are none.
    fn set_dashes(&mut self, dashes: &[f64]);
}

/// Walks the `<border>` element at `cursor`, calling `visitor` for each
/// element found.
pub fn parse_border<V: BorderVisitor + ?Sized>(
    cursor: &ThemeCursor<'_>,
    visitor: &mut V,
) -> Result<(), ThemeError> {
    if let Some(name) = cursor.child_text("from") {
        visitor.set_from(name);
    }
    if let Some(name) = cursor.child_text("color") {
        visitor.set_color(name);
    }
    if let Some(name) = cursor.child_text("color2") {
        visitor.set_color2(name);
    }

    if let Some((size, scale)) = dimension(cursor, "width", "width_scale")? {
        visitor.set_width(size, scale);
    }
    if let Some((size, scale)) = dimension(cursor, "height", "height_scale")? {
        visitor.set_height(size, scale);
    }
    if let Some((size, scale)) = dimension(cursor, "hradius", "hradius_scale")? {
        visitor.set_hradius(size, scale);
    }
    if let Some((size, scale)) = dimension(cursor, "vradius", "vradius_scale")? {
        visitor.set_vradius(size, scale);
    }

    if let Some(text) = cursor.child_text("rounded") {
        let rounded = match text {
            "1" | "true" => true,
            "0" | "false" => false,
            _ => return Err(ThemeError::malformed("rounded", text)),
        };
        visitor.set_rounded(rounded);
    }

    let dashes = cursor
        .children("dash")
        .map(|d| parse_f64(d.text(), "dash"))
        .collect::<Result<Vec<_>, _>>()?;
    if !dashes.is_empty() {
        visitor.set_dashes(&dashes);
    }
    Ok(())
}

/// Reads `<name>` and its `<scale_name>`.
///
/// The scale on its own has nothing to apply to and is ignored.
fn dimension<'d>(
    cursor: &ThemeCursor<'d>,
    name: &str,
    scale_name: &str,
) -> Result<Option<(&'d str, Option<u32>)>, ThemeError> {
    let scale = optional_u32(cursor, scale_name)?;
    match cursor.child_text(name) {
        Some(size) => Ok(Some((size, scale))),
        None => {
            if scale.is_some() {
                log::warn!("<border>: <{}> without <{}> ignored", scale_name, name);
            }
            Ok(None)
        }
    }
}

/// A border dimension: a size (a theme dimension name or millimeters) and
/// an optional multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSize {
    pub size: String,
    pub scale: Option<u32>,
}

impl BorderSize {
    fn new(size: &str, scale: Option<u32>) -> Self {
        Self { size: size.to_string(), scale }
    }
}

/// Everything a `<border>` element specified. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderValue {
    pub from: Option<String>,
    pub color: Option<String>,
    pub color2: Option<String>,
    pub width: Option<BorderSize>,
    pub height: Option<BorderSize>,
    pub hradius: Option<BorderSize>,
    pub vradius: Option<BorderSize>,
    pub rounded: Option<bool>,
    pub dashes: Vec<f64>,
}

impl BorderValue {
    pub fn parse(cursor: &ThemeCursor<'_>) -> Result<Self, ThemeError> {
        let mut value = Self::default();
        parse_border(cursor, &mut value)?;
        Ok(value)
    }

    pub fn is_dashed(&self) -> bool {
        !self.dashes.is_empty()
    }
}

impl BorderVisitor for BorderValue {
    fn set_from(&mut self, name: &str) {
        self.from = Some(name.to_string());
    }

    fn set_color(&mut self, name: &str) {
        self.color = Some(name.to_string());
    }

    fn set_color2(&mut self, name: &str) {
        self.color2 = Some(name.to_string());
    }

    fn set_width(&mut self, size: &str, scale: Option<u32>) {
        self.width = Some(BorderSize::new(size, scale));
    }

    fn set_height(&mut self, size: &str, scale: Option<u32>) {
        self.height = Some(BorderSize::new(size, scale));
    }

    fn set_hradius(&mut self, size: &str, scale: Option<u32>) {
        self.hradius = Some(BorderSize::new(size, scale));
    }

    fn set_vradius(&mut self, size: &str, scale: Option<u32>) {
        self.vradius = Some(BorderSize::new(size, scale));
    }

    fn set_rounded(&mut self, rounded: bool) {
        self.rounded = Some(rounded);
    }

    fn set_dashes(&mut self, dashes: &[f64]) {
        self.dashes = dashes.to_vec();
    }
}
