use std::fmt;

/// A markup command rejected while building a [`TextParam`](crate::TextParam),
/// or a failed compile.
///
/// `offset` is the character offset into the accumulated text at which the
/// offending command was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichTextError {
    /// A second font change at the same offset.
    DuplicateFont { offset: usize },
    /// A third color at the same offset (foreground and background already set).
    DuplicateColor { offset: usize },
    /// A second hotspot command at the same offset.
    DuplicateHotspot { offset: usize },
    /// A hotspot close with no hotspot open.
    NoOpenHotspot { offset: usize },
    /// Replacement text for an existing hotspot may not contain hotspots.
    HotspotInReplacement,
}

impl fmt::Display for RichTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RichTextError::DuplicateFont { offset } => {
                write!(f, "duplicate font specification at offset {offset}")
            }
            RichTextError::DuplicateColor { offset } => {
                write!(f, "duplicate color specification at offset {offset}")
            }
            RichTextError::DuplicateHotspot { offset } => {
                write!(f, "duplicate hotspot specification at offset {offset}")
            }
            RichTextError::NoOpenHotspot { offset } => {
                write!(f, "no open hotspot to end at offset {offset}")
            }
            RichTextError::HotspotInReplacement => {
                write!(f, "hotspots cannot be used in replacement text of another hotspot")
            }
        }
    }
}

impl std::error::Error for RichTextError {}

/// A syntax error in textual `${...}` markup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
}

impl MarkupError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "markup error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for MarkupError {}
