//! The scene-graph contract consumed from the model loader.
//!
//! The loader itself lives outside this crate; all the registry needs is the
//! ordered list of the model's top-level children and their names.

use std::collections::HashSet;

use crate::name::Name;

/// A top-level node of a loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneNode {
    /// Node name as stored in the model file, if any.
    pub name: Option<String>,
}

impl SceneNode {
    /// A node with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Derive part names from the scene's top-level children.
///
/// Scene order is preserved. Unnamed or blank nodes are skipped, and a
/// repeated name keeps its first position.
#[must_use]
pub fn part_names(children: &[SceneNode]) -> Vec<Name> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(children.len());

    for node in children {
        let Some(Ok(name)) = node.name.as_deref().map(Name::new) else {
            tracing::debug!("Skipping unnamed scene node");
            continue;
        };
        if seen.insert(name.clone()) {
            names.push(name);
        } else {
            tracing::warn!("Duplicate part name in scene: {name}");
        }
    }

    names
}
