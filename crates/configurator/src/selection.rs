//! The part currently targeted by the color editor.

use crate::name::Name;

/// At most one selected part.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<Name>,
}

impl Selection {
    /// The selected part, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Name> {
        self.selected.as_ref()
    }

    /// Whether `name` is the selected part.
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_ref().is_some_and(|s| s.as_str() == name)
    }

    /// Select `name`, or clear the selection if it is already selected.
    pub fn select(&mut self, name: Name) {
        if self.is_selected(name.as_str()) {
            self.selected = None;
        } else {
            self.selected = Some(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    #[test]
    fn test_select_twice_clears() {
        let mut selection = Selection::default();
        selection.select(name("A"));
        selection.select(name("A"));
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_select_other_replaces() {
        let mut selection = Selection::default();
        selection.select(name("A"));
        selection.select(name("B"));
        assert_eq!(selection.selected(), Some(&name("B")));
        assert!(!selection.is_selected("A"));
    }
}
