use crate::cursor::ThemeCursor;
use crate::error::ThemeError;
use crate::number::{parse_u32, read_bounded, MILLIMETERS, RADIUS, UNIT};

/// One `<gradient>` stop: a position and an unresolved color reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientStop {
    pub position: u32,
    /// Name of a theme color, resolved by whoever renders the gradient.
    pub color: String,
}

/// Linear gradient between two points.
///
/// Coordinates are fractions of the painted area. A non-zero fixed size
/// makes the gradient span that many millimeters instead of the area.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub fixed_width_mm: f64,
    pub fixed_height_mm: f64,
    pub stops: Vec<GradientStop>,
}

impl Default for LinearGradient {
    fn default() -> Self {
        Self {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            fixed_width_mm: 0.0,
            fixed_height_mm: 0.0,
            stops: Vec::new(),
        }
    }
}

/// Which dimension of the painted area a radial gradient radius is
/// measured against.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RadiusAxis {
    #[default]
    Horizontal,
    Vertical,
    Shortest,
    Longest,
}

impl RadiusAxis {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(RadiusAxis::Horizontal),
            "vertical" => Some(RadiusAxis::Vertical),
            "shortest" => Some(RadiusAxis::Shortest),
            "longest" => Some(RadiusAxis::Longest),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RadiusAxis::Horizontal => "horizontal",
            RadiusAxis::Vertical => "vertical",
            RadiusAxis::Shortest => "shortest",
            RadiusAxis::Longest => "longest",
        }
    }
}

/// Radial gradient between an inner and an outer circle.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub inner_x: f64,
    pub inner_y: f64,
    pub outer_x: f64,
    pub outer_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inner_radius_axis: RadiusAxis,
    pub outer_radius_axis: RadiusAxis,
    pub fixed_width_mm: f64,
    pub fixed_height_mm: f64,
    pub stops: Vec<GradientStop>,
}

impl Default for RadialGradient {
    fn default() -> Self {
        Self {
            inner_x: 0.5,
            inner_y: 0.5,
            outer_x: 0.5,
            outer_y: 0.5,
            inner_radius: 0.0,
            outer_radius: 1.0,
            inner_radius_axis: RadiusAxis::Horizontal,
            outer_radius_axis: RadiusAxis::Horizontal,
            fixed_width_mm: 0.0,
            fixed_height_mm: 0.0,
            stops: Vec::new(),
        }
    }
}

/// Parses a `<color type="linear_gradient">` element.
pub fn parse_linear_gradient(cursor: &ThemeCursor<'_>) -> Result<LinearGradient, ThemeError> {
    let mut g = LinearGradient::default();

    read_bounded(cursor, "x1", UNIT, &mut g.x1)?;
    read_bounded(cursor, "y1", UNIT, &mut g.y1)?;
    read_bounded(cursor, "x2", UNIT, &mut g.x2)?;
    read_bounded(cursor, "y2", UNIT, &mut g.y2)?;
    read_bounded(cursor, "widthmm", MILLIMETERS, &mut g.fixed_width_mm)?;
    read_bounded(cursor, "heightmm", MILLIMETERS, &mut g.fixed_height_mm)?;

    parse_gradient_stops(cursor, |position, color| {
        g.stops.push(GradientStop { position, color: color.to_string() });
    })?;
    Ok(g)
}

/// Parses a `<color type="radial_gradient">` element.
pub fn parse_radial_gradient(cursor: &ThemeCursor<'_>) -> Result<RadialGradient, ThemeError> {
    let mut g = RadialGradient::default();

    read_bounded(cursor, "inner_x", UNIT, &mut g.inner_x)?;
    read_bounded(cursor, "inner_y", UNIT, &mut g.inner_y)?;
    read_bounded(cursor, "outer_x", UNIT, &mut g.outer_x)?;
    read_bounded(cursor, "outer_y", UNIT, &mut g.outer_y)?;
    // Radii are not fractions; they are only bounded like this.
    read_bounded(cursor, "inner_radius", RADIUS, &mut g.inner_radius)?;
    read_bounded(cursor, "outer_radius", RADIUS, &mut g.outer_radius)?;
    read_bounded(cursor, "widthmm", MILLIMETERS, &mut g.fixed_width_mm)?;
    read_bounded(cursor, "heightmm", MILLIMETERS, &mut g.fixed_height_mm)?;

    read_axis(cursor, "inner_radius_axis", &mut g.inner_radius_axis)?;
    read_axis(cursor, "outer_radius_axis", &mut g.outer_radius_axis)?;

    parse_gradient_stops(cursor, |position, color| {
        g.stops.push(GradientStop { position, color: color.to_string() });
    })?;
    Ok(g)
}

fn read_axis(cursor: &ThemeCursor<'_>, name: &str, target: &mut RadiusAxis) -> Result<(), ThemeError> {
    if let Some(text) = cursor.child_text(name) {
        *target = RadiusAxis::parse(text).ok_or_else(|| ThemeError::UnknownRadiusAxis {
            element: name.to_string(),
            value: text.to_string(),
        })?;
    }
    Ok(())
}

/// Calls `stop(position, color)` for every `<gradient>` child, in document
/// order.
///
/// Each stop needs a `<value>` (unsigned integer) and a `<color>` (taken
/// verbatim).
pub fn parse_gradient_stops<F>(cursor: &ThemeCursor<'_>, mut stop: F) -> Result<(), ThemeError>
where
    F: FnMut(u32, &str),
{
    for gradient in cursor.children("gradient") {
        let value = gradient
            .child_text("value")
            .ok_or_else(|| ThemeError::missing("gradient", "value"))?;
        let color = gradient
            .child_text("color")
            .ok_or_else(|| ThemeError::missing("gradient", "color"))?;
        stop(parse_u32(value, "value")?, color);
    }
    Ok(())
}
