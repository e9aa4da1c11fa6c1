//! Variant groups: the draft being built and the committed store.

use crate::{
    error::{Error, Result},
    name::Name,
};

/// A named, fixed set of parts that vary together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: Name,
    parts: Vec<Name>,
}

impl Group {
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Member parts in the order they were added.
    #[must_use]
    pub fn parts(&self) -> &[Name] {
        &self.parts
    }
}

/// The group currently being assembled in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupDraft {
    /// Raw text of the name field; validated on commit.
    pub name: String,
    parts: Vec<Name>,
}

impl GroupDraft {
    /// Chosen parts in the order they were added.
    #[must_use]
    pub fn parts(&self) -> &[Name] {
        &self.parts
    }

    #[must_use]
    pub fn contains(&self, part: &str) -> bool {
        self.parts.iter().any(|p| p.as_str() == part)
    }

    /// Add `part` at the end, or remove it if already present.
    ///
    /// Returns whether the part is a member afterwards.
    pub fn toggle_membership(&mut self, part: Name) -> bool {
        if let Some(index) = self.parts.iter().position(|p| *p == part) {
            self.parts.remove(index);
            false
        } else {
            self.parts.push(part);
            true
        }
    }
}

/// Append-only list of committed groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupStore {
    groups: Vec<Group>,
}

impl GroupStore {
    /// The first group with this name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name.as_str() == name)
    }

    /// Groups in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Turn the draft into a group and reset it.
    ///
    /// Rejects an empty name, an empty part list or a name already in use.
    /// On rejection neither the store nor the draft change.
    pub fn commit(&mut self, draft: &mut GroupDraft) -> Result<&Group> {
        let name = Name::for_kind(&draft.name, "group")?;
        if draft.parts.is_empty() {
            return Err(Error::EmptyGroup);
        }
        if self.find(name.as_str()).is_some() {
            return Err(Error::DuplicateGroup { name });
        }

        let parts = std::mem::take(draft).parts;
        tracing::info!("Created group '{name}' with {} part(s)", parts.len());
        self.groups.push(Group { name, parts });
        Ok(&self.groups[self.groups.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    fn draft(group_name: &str, parts: &[&str]) -> GroupDraft {
        let mut draft = GroupDraft {
            name: group_name.to_string(),
            ..Default::default()
        };
        for p in parts {
            draft.toggle_membership(name(p));
        }
        draft
    }

    #[test]
    fn test_toggle_membership_appends_and_removes() {
        let mut draft = draft("", &["A", "B", "C"]);
        assert!(!draft.toggle_membership(name("B")));
        assert_eq!(draft.parts(), &[name("A"), name("C")]);
        assert!(draft.toggle_membership(name("B")));
        assert_eq!(draft.parts(), &[name("A"), name("C"), name("B")]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut draft = draft("", &["A", "B"]);
        let before = draft.clone();
        draft.toggle_membership(name("C"));
        draft.toggle_membership(name("C"));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_commit_resets_draft() {
        let mut store = GroupStore::default();
        let mut draft = draft("Bucket", &["A", "B"]);
        let group = store.commit(&mut draft).unwrap();
        assert_eq!(group.name().as_str(), "Bucket");
        assert_eq!(group.parts(), &[name("A"), name("B")]);
        assert_eq!(draft, GroupDraft::default());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_commit_rejects_empty_name() {
        let mut store = GroupStore::default();
        let mut draft = draft("", &["A"]);
        assert_eq!(
            store.commit(&mut draft),
            Err(Error::EmptyName { what: "group" })
        );
        assert!(store.is_empty());
        assert_eq!(draft.parts(), &[name("A")]);
    }

    #[test]
    fn test_commit_rejects_empty_parts() {
        let mut store = GroupStore::default();
        let mut draft = draft("Bucket", &[]);
        assert_eq!(store.commit(&mut draft), Err(Error::EmptyGroup));
        assert!(store.is_empty());
        assert_eq!(draft.name, "Bucket");
    }

    #[test]
    fn test_commit_rejects_duplicate_name() {
        let mut store = GroupStore::default();
        store.commit(&mut draft("Bucket", &["A"])).unwrap();
        let mut second = draft("Bucket", &["B"]);
        assert_eq!(
            store.commit(&mut second),
            Err(Error::DuplicateGroup {
                name: name("Bucket")
            })
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("Bucket").unwrap().parts(), &[name("A")]);
    }
}
