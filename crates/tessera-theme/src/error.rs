use std::fmt;

/// An error from parsing a theme document or one of its elements.
///
/// Messages name the element that failed so the theme author can find it.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// The document is not well-formed XML.
    Xml(String),
    /// `<color type="...">` with a type other than `rgb`, `linear_gradient`
    /// or `radial_gradient`.
    UnknownColorType(String),
    /// A radius axis other than `horizontal`, `vertical`, `shortest`, `longest`.
    UnknownRadiusAxis { element: String, value: String },
    /// A number outside its allowed range.
    OutOfRange { element: String, value: f64, min: f64, max: f64 },
    /// A negative color channel.
    NegativeChannel { element: String, value: f64 },
    /// Text that is not a valid literal of the expected kind.
    Malformed { element: String, text: String },
    /// A mandatory child element is absent.
    Missing { parent: String, element: String },
    /// A top-level theme entry without an `id` attribute.
    MissingId { kind: String },
    /// Two top-level theme entries of the same kind share an `id`.
    DuplicateId { kind: String, id: String },
    /// A color lookup named a color the theme does not define.
    UnknownColor(String),
    /// A color lookup that is not a solid color (e.g. a gradient).
    NotSolid(String),
    /// Scaled colors that refer back to themselves.
    ColorCycle(String),
    /// An error inside the top-level entry `<kind id="id">`.
    InElement { kind: String, id: String, source: Box<ThemeError> },
}

impl ThemeError {
    pub(crate) fn malformed(element: &str, text: &str) -> Self {
        ThemeError::Malformed { element: element.to_string(), text: text.to_string() }
    }

    pub(crate) fn missing(parent: &str, element: &str) -> Self {
        ThemeError::Missing { parent: parent.to_string(), element: element.to_string() }
    }

    pub(crate) fn in_element(self, kind: &str, id: &str) -> Self {
        ThemeError::InElement { kind: kind.to_string(), id: id.to_string(), source: Box::new(self) }
    }

    /// The innermost error, with `InElement` context stripped.
    pub fn root_cause(&self) -> &ThemeError {
        match self {
            ThemeError::InElement { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Xml(msg) => write!(f, "theme XML error: {msg}"),
            ThemeError::UnknownColorType(t) => write!(f, "unknown color type {t:?}"),
            ThemeError::UnknownRadiusAxis { element, value } => {
                write!(f, "<{element}>: unknown radius axis {value:?}")
            }
            ThemeError::OutOfRange { element, value, min, max } => {
                write!(f, "<{element}>: {value} is out of range [{min}, {max}]")
            }
            ThemeError::NegativeChannel { element, value } => {
                write!(f, "<{element}>: color channel {value} is negative")
            }
            ThemeError::Malformed { element, text } => {
                write!(f, "<{element}>: cannot parse {text:?}")
            }
            ThemeError::Missing { parent, element } => {
                write!(f, "<{parent}>: missing <{element}>")
            }
            ThemeError::MissingId { kind } => write!(f, "<{kind}> without an id attribute"),
            ThemeError::DuplicateId { kind, id } => write!(f, "duplicate <{kind} id={id:?}>"),
            ThemeError::UnknownColor(id) => write!(f, "color {id:?} is not defined"),
            ThemeError::NotSolid(id) => write!(f, "color {id:?} is a gradient, not a solid color"),
            ThemeError::ColorCycle(id) => write!(f, "color {id:?} is scaled from itself"),
            ThemeError::InElement { kind, id, source } => {
                write!(f, "<{kind} id={id:?}>: {source}")
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::InElement { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
