//! Bevy resources wrapping the configurator state.
//!
//! UI systems never mutate the state directly: they queue [`Action`]s in
//! [`PendingActions`], which are applied once per frame. This keeps change
//! detection on [`Configurator`] meaningful for the model sync systems.

use bevy::prelude::*;
use configurator::{Action, ConfiguratorState, Error};

/// Plugin owning the configurator state.
pub struct StorePlugin;

impl Plugin for StorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Configurator>()
            .init_resource::<PendingActions>()
            .add_systems(PreUpdate, apply_pending_actions);
    }
}

/// The live configurator state plus the last rejection, for display.
#[derive(Resource, Default)]
pub struct Configurator {
    pub state: ConfiguratorState,
    /// Most recent error, cleared by the next accepted action.
    pub status: Option<Error>,
}

impl Configurator {
    /// Apply an action and record the outcome in `status`.
    pub fn dispatch(&mut self, action: Action) {
        match self.state.dispatch(action) {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(e),
        }
    }

    /// Report an error that did not come from an action (e.g. a load failure).
    pub fn report(&mut self, error: Error) {
        tracing::error!("{error}");
        self.status = Some(error);
    }
}

/// Actions queued by the UI this frame.
#[derive(Resource, Default)]
pub struct PendingActions {
    actions: Vec<Action>,
}

impl PendingActions {
    /// Queue an action for the next update.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }
}

/// Apply queued actions in order.
fn apply_pending_actions(
    mut pending: ResMut<PendingActions>,
    mut configurator: ResMut<Configurator>,
) {
    if pending.actions.is_empty() {
        return;
    }

    for action in pending.actions.drain(..) {
        configurator.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configurator::SceneNode;

    #[test]
    fn test_pending_actions_applied_in_order() {
        let mut app = App::new();
        app.add_plugins(StorePlugin);

        {
            let mut pending = app.world_mut().resource_mut::<PendingActions>();
            pending.push(Action::InitializeParts(vec![SceneNode::named("Cab")]));
            pending.push(Action::TogglePart("Cab".to_string()));
        }
        app.update();

        let configurator = app.world().resource::<Configurator>();
        assert_eq!(configurator.state.parts.is_visible("Cab"), Some(false));
        assert!(configurator.status.is_none());
    }

    #[test]
    fn test_rejection_sets_status() {
        let mut app = App::new();
        app.add_plugins(StorePlugin);

        app.world_mut()
            .resource_mut::<PendingActions>()
            .push(Action::CommitGroup);
        app.update();

        let configurator = app.world().resource::<Configurator>();
        assert!(matches!(
            configurator.status,
            Some(Error::EmptyName { what: "group" })
        ));
    }
}
