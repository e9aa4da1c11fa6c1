//! Applies part visibility, colors and selection highlight to the model.

use bevy::prelude::*;
use configurator::PartColor;

use crate::{model::PartEntities, store::Configurator};

/// Emissive tint added to the selected part.
const HIGHLIGHT_EMISSIVE: LinearRgba = LinearRgba::rgb(0.18, 0.12, 0.0);

/// Plugin for syncing configurator state onto the spawned model.
pub struct AppearancePlugin;

impl Plugin for AppearancePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            sync_part_appearance
                .run_if(resource_changed::<Configurator>.or(resource_changed::<PartEntities>)),
        );
    }
}

/// The material a mesh had when the model was loaded.
#[derive(Component)]
struct OriginalMaterial(Handle<StandardMaterial>);

/// How a part should look, beyond its loaded material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PartLook {
    color: Option<PartColor>,
    selected: bool,
}

impl PartLook {
    /// No override: the loaded material is used as is.
    fn is_plain(self) -> bool {
        self == Self::default()
    }

    /// Derive the override material from the loaded one.
    fn apply(self, mut material: StandardMaterial) -> StandardMaterial {
        if let Some(color) = self.color {
            material.base_color = Color::srgb_u8(color.r, color.g, color.b);
        }
        if self.selected {
            material.emissive += HIGHLIGHT_EMISSIVE;
        }
        material
    }
}

fn sync_part_appearance(
    mut commands: Commands,
    configurator: Res<Configurator>,
    part_entities: Res<PartEntities>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visibility_query: Query<&mut Visibility>,
    mut mesh_query: Query<(
        &mut MeshMaterial3d<StandardMaterial>,
        Option<&OriginalMaterial>,
    )>,
) {
    let state = &configurator.state;

    for (name, entities) in part_entities.iter() {
        let Some(part) = state.parts.get(name) else {
            continue;
        };

        if let Ok(mut visibility) = visibility_query.get_mut(entities.node) {
            visibility.set_if_neq(if part.visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            });
        }

        let look = PartLook {
            color: part.color,
            selected: state.selection.is_selected(name),
        };

        for &mesh in &entities.meshes {
            let Ok((mut material, original)) = mesh_query.get_mut(mesh) else {
                continue;
            };

            let original = if let Some(original) = original {
                original.0.clone()
            } else {
                let handle = material.0.clone();
                commands
                    .entity(mesh)
                    .insert(OriginalMaterial(handle.clone()));
                handle
            };

            if look.is_plain() {
                if material.0 != original {
                    material.0 = original;
                }
                continue;
            }

            let Some(base) = materials.get(&original) else {
                tracing::warn!("Material for part '{name}' is not loaded");
                continue;
            };
            let tinted = look.apply(base.clone());
            material.0 = materials.add(tinted);
        }
    }
}

#[cfg(test)]
mod tests {
    use configurator::{Action, SceneNode};

    use super::*;
    use crate::{
        model::PartMeshes,
        store::{PendingActions, StorePlugin},
    };

    /// An app with one part `Cab`: a node entity and a mesh below it.
    fn app_with_part() -> (App, Entity, Entity, Handle<StandardMaterial>) {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StorePlugin, AppearancePlugin))
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<PartEntities>();

        let original = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let node = app.world_mut().spawn(Visibility::Inherited).id();
        let mesh = app
            .world_mut()
            .spawn(MeshMaterial3d(original.clone()))
            .id();
        app.world_mut().resource_mut::<PartEntities>().insert(
            "Cab",
            PartMeshes {
                node,
                meshes: vec![mesh],
            },
        );

        dispatch(&mut app, Action::InitializeParts(vec![SceneNode::named("Cab")]));
        (app, node, mesh, original)
    }

    fn dispatch(app: &mut App, action: Action) {
        app.world_mut().resource_mut::<PendingActions>().push(action);
        app.update();
    }

    fn material_of(app: &App, mesh: Entity) -> Handle<StandardMaterial> {
        app.world()
            .get::<MeshMaterial3d<StandardMaterial>>(mesh)
            .unwrap()
            .0
            .clone()
    }

    #[test]
    fn test_sync_hides_toggled_part() {
        let (mut app, node, _, _) = app_with_part();
        assert_eq!(
            app.world().get::<Visibility>(node),
            Some(&Visibility::Inherited)
        );

        dispatch(&mut app, Action::TogglePart("Cab".into()));
        assert_eq!(app.world().get::<Visibility>(node), Some(&Visibility::Hidden));

        dispatch(&mut app, Action::ShowAll);
        assert_eq!(
            app.world().get::<Visibility>(node),
            Some(&Visibility::Inherited)
        );
    }

    #[test]
    fn test_sync_colors_and_restores_material() {
        let (mut app, _, mesh, original) = app_with_part();
        assert_eq!(material_of(&app, mesh), original);

        dispatch(
            &mut app,
            Action::SetColor {
                part: "Cab".into(),
                color: PartColor::rgb(255, 0, 0),
            },
        );
        let tinted = material_of(&app, mesh);
        assert_ne!(tinted, original);
        let materials = app.world().resource::<Assets<StandardMaterial>>();
        assert_eq!(
            materials.get(&tinted).map(|m| m.base_color),
            Some(Color::srgb_u8(255, 0, 0))
        );
        assert_eq!(
            app.world().get::<OriginalMaterial>(mesh).map(|m| m.0.clone()),
            Some(original.clone())
        );

        dispatch(&mut app, Action::ClearColor("Cab".into()));
        assert_eq!(material_of(&app, mesh), original);
    }

    #[test]
    fn test_plain_look_keeps_material() {
        assert!(PartLook::default().is_plain());
        let base = StandardMaterial {
            base_color: Color::srgb(0.2, 0.3, 0.4),
            ..Default::default()
        };
        let out = PartLook::default().apply(base.clone());
        assert_eq!(out.base_color, base.base_color);
        assert_eq!(out.emissive, base.emissive);
    }

    #[test]
    fn test_color_overrides_base_color() {
        let look = PartLook {
            color: Some(PartColor::rgb(255, 0, 0)),
            selected: false,
        };
        assert!(!look.is_plain());
        let out = look.apply(StandardMaterial::default());
        assert_eq!(out.base_color, Color::srgb_u8(255, 0, 0));
    }

    #[test]
    fn test_selection_adds_highlight() {
        let look = PartLook {
            color: None,
            selected: true,
        };
        let out = look.apply(StandardMaterial::default());
        assert_eq!(
            out.emissive,
            StandardMaterial::default().emissive + HIGHLIGHT_EMISSIVE
        );
    }
}
