//! Parser for the color, gradient, border and font elements of theme XML
//! documents.
//!
//! Each parser takes a [`ThemeCursor`] positioned at one element and either
//! returns a typed value ([`parse_color`]) or reports the element's parts to
//! a visitor ([`parse_border`], [`parse_font`]). Every error aborts the
//! element and names what was wrong with it.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`xml`] | `XmlDocument`, `XmlElement` (built with `quick-xml`) |
//! | [`cursor`] | `ThemeCursor` |
//! | [`color`] | `parse_color`, `ColorValue`, `ScaledColor` |
//! | [`gradient`] | linear/radial gradients and their stops |
//! | [`border`] | `parse_border`, `BorderVisitor`, `BorderValue` |
//! | [`font`] | `parse_font`, `FontVisitor`, `FontValue` |
//! | [`theme`] | `ThemeValues`: every top-level entry of a document |
//! | [`error`] | `ThemeError` |
//!
//! # Quick start
//!
//! ```rust
//! use tessera_theme::{parse_color, ColorValue, XmlDocument};
//!
//! let doc = XmlDocument::parse("<color><r>1</r><a>0.5</a></color>").unwrap();
//! let ColorValue::Rgb(rgb) = parse_color(&doc.cursor()).unwrap() else { panic!() };
//! assert_eq!(rgb.r, 0xffff);
//! assert_eq!(rgb.a, 0x8000);
//! ```

pub mod border;
pub mod color;
pub mod cursor;
pub mod error;
pub mod font;
pub mod gradient;
mod number;
pub mod theme;
pub mod xml;

pub use border::{parse_border, BorderSize, BorderValue, BorderVisitor};
pub use color::{parse_color, ColorValue, ScaledColor};
pub use cursor::ThemeCursor;
pub use error::ThemeError;
pub use font::{parse_font, FontValue, FontVisitor};
pub use gradient::{
    parse_gradient_stops, parse_linear_gradient, parse_radial_gradient, GradientStop,
    LinearGradient, RadialGradient, RadiusAxis,
};
pub use theme::ThemeValues;
pub use xml::{XmlDocument, XmlElement};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> ColorValue {
        parse_color(&XmlDocument::parse(src).unwrap().cursor()).unwrap()
    }
    fn err(src: &str) {
        parse_color(&XmlDocument::parse(src).unwrap().cursor()).unwrap_err();
    }

    #[test] fn solid_empty() { ok("<color/>"); }
    #[test] fn solid_rgb() { ok(r#"<color type="rgb"><r>0.2</r><g>0.4</g><b>0.6</b></color>"#); }
    #[test] fn solid_clamped() { ok("<color><a>3</a></color>"); }
    #[test] fn scaled() { ok(r#"<color scale="bg"><a>0.5</a></color>"#); }
    #[test] fn linear() {
        ok(r#"<color type="linear_gradient">
                <x1>0</x1><y1>0</y1><x2>0</x2><y2>1</y2>
                <gradient><value>0</value><color>top</color></gradient>
                <gradient><value>100</value><color>bottom</color></gradient>
              </color>"#);
    }
    #[test] fn radial() {
        ok(r#"<color type="radial_gradient">
                <inner_radius>0</inner_radius><outer_radius>2</outer_radius>
                <outer_radius_axis>vertical</outer_radius_axis>
              </color>"#);
    }
    #[test] fn err_negative() { err("<color><g>-0.5</g></color>"); }
    #[test] fn err_type() { err(r#"<color type="hsl"/>"#); }
    #[test] fn err_linear_range() { err(r#"<color type="linear_gradient"><y2>-0.1</y2></color>"#); }
    #[test] fn err_radial_axis() {
        err(r#"<color type="radial_gradient"><outer_radius_axis>up</outer_radius_axis></color>"#);
    }
    #[test] fn err_stop_value() {
        err(r#"<color type="linear_gradient"><gradient><value>x</value><color>c</color></gradient></color>"#);
    }
}
