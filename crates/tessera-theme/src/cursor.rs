use crate::xml::XmlElement;

/// Read position inside a theme document.
///
/// A cursor is a borrowed pointer to one element. Copying it is free and
/// yields an independent cursor at the same place, so sibling sub-parses can
/// each navigate from the same starting point without affecting one another.
#[derive(Debug, Clone, Copy)]
pub struct ThemeCursor<'d> {
    element: &'d XmlElement,
}

impl<'d> ThemeCursor<'d> {
    pub fn new(element: &'d XmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &'d XmlElement {
        self.element
    }

    /// Name of the element the cursor is on.
    pub fn name(&self) -> &'d str {
        &self.element.name
    }

    /// Attribute value, or an empty string if the attribute is absent.
    pub fn attribute(&self, name: &str) -> &'d str {
        self.element.attribute(name).unwrap_or("")
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.element.attribute(name).is_some()
    }

    /// Text content of the element, with surrounding whitespace removed.
    pub fn text(&self) -> &'d str {
        self.element.text.trim()
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<ThemeCursor<'d>> {
        self.element.children.iter().find(|c| c.name == name).map(ThemeCursor::new)
    }

    /// Text of the first child element called `name`.
    pub fn child_text(&self, name: &str) -> Option<&'d str> {
        self.child(name).map(|c| c.text())
    }

    /// All child elements called `name`, in document order.
    pub fn children(&self, name: &str) -> impl Iterator<Item = ThemeCursor<'d>> {
        self.element.children.iter().filter(move |c| c.name == name).map(ThemeCursor::new)
    }

    /// All child elements, in document order.
    pub fn all_children(self) -> impl Iterator<Item = ThemeCursor<'d>> + 'd {
        self.element.children.iter().map(ThemeCursor::new)
    }

    /// Elements reached by a relative `a/b/c` path, in document order.
    ///
    /// Each step selects every child with that name; `*` matches any name.
    pub fn select(&self, path: &str) -> Vec<ThemeCursor<'d>> {
        let mut current = vec![*self];
        for step in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .iter()
                .flat_map(|c| c.all_children())
                .filter(|c| step == "*" || c.name() == step)
                .collect();
        }
        current
    }

    /// Every element called `name` below this one, depth first.
    pub fn descendants(&self, name: &str) -> Vec<ThemeCursor<'d>> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants(&self, name: &str, found: &mut Vec<ThemeCursor<'d>>) {
        for child in self.all_children() {
            if child.name() == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }
}
