//! Application state and the actions that change it.
//!
//! All mutation goes through [`reduce`] (or [`ConfiguratorState::dispatch`]),
//! so the whole configurator can be driven and tested without a renderer.

use crate::{
    color::PartColor,
    colors::ColorHistory,
    error::{Error, Result},
    groups::{GroupDraft, GroupStore},
    name::Name,
    parts::PartRegistry,
    scene::SceneNode,
    selection::Selection,
    variants::VariantStore,
};

/// A user (or loader) action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The scene graph is available; register its top-level children.
    InitializeParts(Vec<SceneNode>),
    /// Flip a part's visibility.
    TogglePart(String),
    /// Make every part visible.
    ShowAll,
    /// Hide every part.
    HideAll,
    /// Select a part for color editing, or deselect it if already selected.
    SelectPart(String),
    /// Overwrite a part's color.
    SetColor { part: String, color: PartColor },
    /// Remove a part's color override.
    ClearColor(String),
    /// Remember a part's current color.
    SaveColorVariant(String),
    /// Reapply a remembered color.
    ApplyColorVariant { part: String, index: usize },
    /// Add a part to the group draft, or remove it.
    ToggleDraftMembership(String),
    /// Edit the group draft's name.
    SetDraftName(String),
    /// Commit the group draft.
    CommitGroup,
    /// Snapshot a group's visibility as a named variant.
    SaveVariant { group: String, name: String },
    /// Restore a saved variant.
    ApplyVariant { group: String, index: usize },
}

/// Everything the configurator knows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfiguratorState {
    pub parts: PartRegistry,
    pub selection: Selection,
    pub draft: GroupDraft,
    pub groups: GroupStore,
    pub variants: VariantStore,
    pub color_history: ColorHistory,
}

/// Compute the state that results from applying `action` to `state`.
pub fn reduce(state: &ConfiguratorState, action: Action) -> Result<ConfiguratorState> {
    let mut next = state.clone();
    next.apply(action)?;
    Ok(next)
}

impl ConfiguratorState {
    /// Create an empty state (no model loaded yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action in place.
    ///
    /// On error the state is left exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let logged = tracing::enabled!(tracing::Level::DEBUG).then(|| action.clone());
        match reduce(self, action) {
            Ok(next) => {
                if let Some(action) = logged {
                    tracing::debug!(?action, "Action applied");
                }
                *self = next;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Action rejected: {e}");
                Err(e)
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::InitializeParts(children) => {
                self.parts.initialize(&children);
            }
            Action::TogglePart(part) => {
                self.parts.toggle(&part)?;
            }
            Action::ShowAll => self.parts.set_visibility_all(true),
            Action::HideAll => self.parts.set_visibility_all(false),
            Action::SelectPart(part) => {
                let name = self.parts.resolve(&part)?.clone();
                self.selection.select(name);
            }
            Action::SetColor { part, color } => {
                self.parts.set_color(&part, Some(color))?;
            }
            Action::ClearColor(part) => {
                self.parts.set_color(&part, None)?;
            }
            Action::SaveColorVariant(part) => {
                let name = self.parts.resolve(&part)?.clone();
                let current = self.parts.color(&part);
                self.color_history.save(&name, current)?;
            }
            Action::ApplyColorVariant { part, index } => {
                let name = self.parts.resolve(&part)?.clone();
                let color = self.color_history.entry(&name, index)?;
                self.parts.set_color(&part, Some(color))?;
            }
            Action::ToggleDraftMembership(part) => {
                let name = self.parts.resolve(&part)?.clone();
                self.draft.toggle_membership(name);
            }
            Action::SetDraftName(name) => {
                self.draft.name = name;
            }
            Action::CommitGroup => {
                self.groups.commit(&mut self.draft)?;
            }
            Action::SaveVariant { group, name } => {
                self.variants
                    .save(&self.groups, &group, &name, &self.parts)?;
            }
            Action::ApplyVariant { group, index } => {
                let Some(found) = self.groups.find(&group) else {
                    return Err(Error::GroupNotFound {
                        name: Name::for_kind(&group, "group")?,
                    });
                };
                let variant = self.variants.get(found.name(), index)?;
                tracing::info!("Applying variant '{}' of group '{group}'", variant.name);
                self.parts.apply_snapshot(&variant.state);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(names: &[&str]) -> ConfiguratorState {
        let mut state = ConfiguratorState::new();
        let children = names.iter().map(|n| SceneNode::named(*n)).collect();
        state.dispatch(Action::InitializeParts(children)).unwrap();
        state
    }

    fn visibility(state: &ConfiguratorState) -> Vec<(String, bool)> {
        state
            .parts
            .iter()
            .map(|p| (p.name.to_string(), p.visible))
            .collect()
    }

    #[test]
    fn test_end_to_end_variant_round_trip() {
        let mut state = loaded(&["A", "B"]);

        state.dispatch(Action::TogglePart("A".into())).unwrap();
        assert_eq!(
            visibility(&state),
            [("A".to_string(), false), ("B".to_string(), true)]
        );

        state
            .dispatch(Action::ToggleDraftMembership("A".into()))
            .unwrap();
        state.dispatch(Action::SetDraftName("G1".into())).unwrap();
        state.dispatch(Action::CommitGroup).unwrap();

        state
            .dispatch(Action::SaveVariant {
                group: "G1".into(),
                name: "V1".into(),
            })
            .unwrap();
        let v1 = &state.variants.variants("G1")[0];
        assert_eq!(v1.state.len(), 1);
        assert_eq!(v1.state.get("A"), Some(false));

        state.dispatch(Action::TogglePart("A".into())).unwrap();
        assert_eq!(state.parts.is_visible("A"), Some(true));

        state
            .dispatch(Action::ApplyVariant {
                group: "G1".into(),
                index: 0,
            })
            .unwrap();
        assert_eq!(
            visibility(&state),
            [("A".to_string(), false), ("B".to_string(), true)]
        );
    }

    #[test]
    fn test_rejected_action_leaves_state_untouched() {
        let mut state = loaded(&["A"]);
        state
            .dispatch(Action::ToggleDraftMembership("A".into()))
            .unwrap();
        let before = state.clone();

        assert_eq!(
            state.dispatch(Action::CommitGroup),
            Err(Error::EmptyName { what: "group" })
        );
        assert_eq!(state, before);

        assert_eq!(
            state.dispatch(Action::SaveVariant {
                group: "Missing".into(),
                name: "V1".into(),
            }),
            Err(Error::GroupNotFound {
                name: Name::new("Missing").unwrap()
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_commit_with_empty_parts_rejected() {
        let mut state = loaded(&["A"]);
        state.dispatch(Action::SetDraftName("G1".into())).unwrap();
        assert_eq!(state.dispatch(Action::CommitGroup), Err(Error::EmptyGroup));
        assert!(state.groups.is_empty());
    }

    #[test]
    fn test_select_part_toggles() {
        let mut state = loaded(&["A", "B"]);
        state.dispatch(Action::SelectPart("A".into())).unwrap();
        state.dispatch(Action::SelectPart("A".into())).unwrap();
        assert_eq!(state.selection.selected(), None);

        state.dispatch(Action::SelectPart("A".into())).unwrap();
        state.dispatch(Action::SelectPart("B".into())).unwrap();
        assert!(state.selection.is_selected("B"));
    }

    #[test]
    fn test_select_unknown_part() {
        let mut state = loaded(&["A"]);
        assert!(matches!(
            state.dispatch(Action::SelectPart("Z".into())),
            Err(Error::UnknownPart { .. })
        ));
    }

    #[test]
    fn test_color_variants() {
        let mut state = loaded(&["A"]);
        let red = PartColor::rgb(255, 0, 0);
        let green = PartColor::rgb(0, 255, 0);

        // No color yet: nothing is recorded.
        let saved = state.dispatch(Action::SaveColorVariant("A".into()));
        assert!(matches!(saved, Err(Error::NoColorAssigned { .. })));
        assert!(state.color_history.get("A").is_empty());

        state
            .dispatch(Action::SetColor {
                part: "A".into(),
                color: red,
            })
            .unwrap();
        state.dispatch(Action::SaveColorVariant("A".into())).unwrap();
        state
            .dispatch(Action::SetColor {
                part: "A".into(),
                color: green,
            })
            .unwrap();
        // Setting a color does not touch the history.
        assert_eq!(state.color_history.get("A"), &[red]);

        state
            .dispatch(Action::ApplyColorVariant {
                part: "A".into(),
                index: 0,
            })
            .unwrap();
        assert_eq!(state.parts.color("A"), Some(red));

        state.dispatch(Action::ClearColor("A".into())).unwrap();
        assert_eq!(state.parts.color("A"), None);
    }

    #[test]
    fn test_variant_restores_visibility_only() {
        let mut state = loaded(&["A"]);
        state
            .dispatch(Action::ToggleDraftMembership("A".into()))
            .unwrap();
        state.dispatch(Action::SetDraftName("G".into())).unwrap();
        state.dispatch(Action::CommitGroup).unwrap();
        state
            .dispatch(Action::SaveVariant {
                group: "G".into(),
                name: "V".into(),
            })
            .unwrap();

        let blue = PartColor::rgb(0, 0, 255);
        state
            .dispatch(Action::SetColor {
                part: "A".into(),
                color: blue,
            })
            .unwrap();
        state
            .dispatch(Action::ApplyVariant {
                group: "G".into(),
                index: 0,
            })
            .unwrap();
        assert_eq!(state.parts.color("A"), Some(blue));
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = loaded(&["A"]);
        let next = reduce(&state, Action::HideAll).unwrap();
        assert_eq!(state.parts.is_visible("A"), Some(true));
        assert_eq!(next.parts.is_visible("A"), Some(false));
    }
}
