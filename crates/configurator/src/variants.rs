//! Named visibility snapshots, scoped to a group.

use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    groups::GroupStore,
    name::Name,
    parts::{PartRegistry, Snapshot},
};

/// A saved visibility state for one group's parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Display name.
    pub name: Name,
    /// Visibility of each group member at the time of saving.
    pub state: Snapshot,
}

/// Variants for every group, each list in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariantStore {
    by_group: HashMap<Name, Vec<Variant>>,
}

impl VariantStore {
    /// Variants saved for a group.
    #[must_use]
    pub fn variants(&self, group: &str) -> &[Variant] {
        self.by_group
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// A variant by index within its group.
    pub fn get(&self, group: &Name, index: usize) -> Result<&Variant> {
        self.variants(group.as_str())
            .get(index)
            .ok_or_else(|| Error::UnknownVariant {
                group: group.clone(),
                index,
            })
    }

    /// Snapshot the group's current part visibility under `variant_name`.
    pub fn save(
        &mut self,
        groups: &GroupStore,
        group_name: &str,
        variant_name: &str,
        parts: &PartRegistry,
    ) -> Result<&Variant> {
        let name = Name::for_kind(variant_name, "variant")?;
        let group_key = Name::for_kind(group_name, "group")?;
        let Some(group) = groups.find(group_key.as_str()) else {
            return Err(Error::GroupNotFound { name: group_key });
        };

        let state = parts.snapshot(group.parts())?;
        tracing::info!(
            "Saved variant '{name}' for group '{}' ({} part(s))",
            group.name(),
            state.len()
        );

        let list = self.by_group.entry(group.name().clone()).or_default();
        list.push(Variant { name, state });
        Ok(&list[list.len() - 1])
    }
}
