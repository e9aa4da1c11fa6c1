//! Part registry: per-part visibility and color.
//!
//! The set of parts is fixed once, when the model's scene graph becomes
//! available. After that only part attributes change.

use std::collections::HashMap;

use crate::{
    color::PartColor,
    error::{Error, Result},
    name::Name,
    scene::{self, SceneNode},
};

/// A single togglable, colorable part of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Part name, taken from the scene graph.
    pub name: Name,
    /// Whether the part is shown.
    pub visible: bool,
    /// Color override, or `None` to keep the model's material.
    pub color: Option<PartColor>,
}

impl Part {
    fn new(name: Name) -> Self {
        Self {
            name,
            visible: true,
            color: None,
        }
    }
}

/// A visibility snapshot: part name to visible flag, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    entries: Vec<(Name, bool)>,
}

impl Snapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for a part, replacing any earlier entry for it.
    pub fn insert(&mut self, name: Name, visible: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = visible;
        } else {
            self.entries.push((name, visible));
        }
    }

    /// The recorded flag for a part, if the snapshot mentions it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, visible)| *visible)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, bool)> {
        self.entries.iter().map(|(n, v)| (n, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Name, bool)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (Name, bool)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (name, visible) in iter {
            snapshot.insert(name, visible);
        }
        snapshot
    }
}

/// Ordered registry of parts, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartRegistry {
    parts: Vec<Part>,
    index: HashMap<Name, usize>,
    initialized: bool,
}

impl PartRegistry {
    /// Create an empty, uninitialized registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`PartRegistry::initialize`] has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Register every top-level scene child as a visible, uncolored part.
    ///
    /// Runs once; later calls are ignored and return `false`.
    pub fn initialize(&mut self, children: &[SceneNode]) -> bool {
        if self.initialized {
            tracing::debug!("Part registry already initialized, ignoring scene");
            return false;
        }

        self.parts = scene::part_names(children)
            .into_iter()
            .map(Part::new)
            .collect();
        self.index = self
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| (part.name.clone(), i))
            .collect();
        self.initialized = true;

        tracing::info!("Registered {} part(s)", self.parts.len());
        true
    }

    /// Look up a part by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Part> {
        self.index.get(name).map(|&i| &self.parts[i])
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Part> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.parts[i]),
            None => Err(Error::UnknownPart {
                name: name.to_string(),
            }),
        }
    }

    /// Resolve a part name, failing if it is not registered.
    pub fn resolve(&self, name: &str) -> Result<&Name> {
        self.get(name)
            .map(|part| &part.name)
            .ok_or_else(|| Error::UnknownPart {
                name: name.to_string(),
            })
    }

    /// Visibility of a part; `None` if the part is unknown.
    #[must_use]
    pub fn is_visible(&self, name: &str) -> Option<bool> {
        self.get(name).map(|part| part.visible)
    }

    /// Current color of a part, if one is assigned.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<PartColor> {
        self.get(name).and_then(|part| part.color)
    }

    /// Parts in scene order.
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Flip one part's visibility, returning the new value.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let part = self.get_mut(name)?;
        part.visible = !part.visible;
        Ok(part.visible)
    }

    /// Show or hide every part.
    pub fn set_visibility_all(&mut self, visible: bool) {
        for part in &mut self.parts {
            part.visible = visible;
        }
    }

    /// Merge a snapshot into the current visibility.
    ///
    /// Parts the snapshot does not mention keep their state. Entries for
    /// unregistered parts are skipped.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        for (name, visible) in snapshot.iter() {
            match self.get_mut(name.as_str()) {
                Ok(part) => part.visible = visible,
                Err(_) => tracing::warn!("Snapshot mentions unknown part '{name}'"),
            }
        }
    }

    /// Capture the visibility of the given parts.
    pub fn snapshot<'a>(&self, names: impl IntoIterator<Item = &'a Name>) -> Result<Snapshot> {
        names
            .into_iter()
            .map(|name| {
                self.is_visible(name.as_str())
                    .map(|visible| (name.clone(), visible))
                    .ok_or_else(|| Error::UnknownPart {
                        name: name.to_string(),
                    })
            })
            .collect()
    }

    /// Overwrite a part's color; `None` restores the model material.
    pub fn set_color(&mut self, name: &str, color: Option<PartColor>) -> Result<()> {
        self.get_mut(name)?.color = color;
        Ok(())
    }
}
