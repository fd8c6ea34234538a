use std::fmt;

/// How a font's size is expressed.
///
/// A descriptor carries at most one of these.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FontSize {
    /// Absolute size in points.
    Point(f64),
    /// Size in points, multiplied by the theme's global scale factor.
    Scaled(f64),
    /// Multiplier applied to the size inherited from the base font.
    Scale(f64),
}

/// Attributes selecting a font face.
///
/// Every field is optional; unset fields fall back to whatever the text
/// layer uses by default (or to the base font the descriptor inherits from).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontDescriptor {
    pub family: Option<String>,
    pub foundry: Option<String>,
    pub style: Option<String>,
    pub weight: Option<String>,
    pub spacing: Option<String>,
    pub slant: Option<String>,
    pub width: Option<String>,
    pub size: Option<FontSize>,
}

impl FontDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn slant(mut self, slant: impl Into<String>) -> Self {
        self.slant = Some(slant.into());
        self
    }

    pub fn point_size(mut self, size: f64) -> Self {
        self.size = Some(FontSize::Point(size));
        self
    }
}

impl fmt::Display for FontDescriptor {
    /// Formats as a `;`-separated `key=value` list, e.g.
    /// `family=sans serif;weight=bold;point_size=12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        let fields = [
            ("family", &self.family),
            ("foundry", &self.foundry),
            ("style", &self.style),
            ("weight", &self.weight),
            ("spacing", &self.spacing),
            ("slant", &self.slant),
            ("width", &self.width),
        ];
        for (key, value) in fields {
            if let Some(v) = value {
                write!(f, "{sep}{key}={v}")?;
                sep = ";";
            }
        }
        match self.size {
            Some(FontSize::Point(v)) => write!(f, "{sep}point_size={v}"),
            Some(FontSize::Scaled(v)) => write!(f, "{sep}scaled_size={v}"),
            Some(FontSize::Scale(v)) => write!(f, "{sep}scale={v}"),
            None => Ok(()),
        }
    }
}

/// A font reference: either a named theme font or an explicit descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum FontArg {
    Theme(String),
    Font(FontDescriptor),
}

impl From<FontDescriptor> for FontArg {
    fn from(font: FontDescriptor) -> Self {
        FontArg::Font(font)
    }
}

impl From<&str> for FontArg {
    fn from(name: &str) -> Self {
        FontArg::Theme(name.to_string())
    }
}

impl From<String> for FontArg {
    fn from(name: String) -> Self {
        FontArg::Theme(name)
    }
}
