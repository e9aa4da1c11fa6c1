//! Model loading and part discovery.
//!
//! Spawns the configured glTF scene, waits for Bevy to instantiate it, then
//! records the model's top-level named nodes as configurable parts.

use std::collections::HashMap;

use bevy::{
    asset::{AssetPath, LoadState},
    gltf::GltfAssetLabel,
    prelude::*,
    scene::SceneInstanceReady,
};
use configurator::{Action, Error, Name as PartName, SceneNode};

use crate::{
    launch_params::LaunchParams,
    store::{Configurator, PendingActions},
};

/// Plugin for loading the configurable model.
pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PartEntities>()
            .init_resource::<ModelRequests>()
            .add_systems(Startup, spawn_model)
            .add_systems(Update, (watch_model_load, process_model_requests))
            .add_observer(on_model_ready);
    }
}

// ============================================================================
// Model state
// ============================================================================

/// Tracks the spawned model instance.
#[derive(Resource)]
struct ModelInstance {
    /// Asset path of the scene being shown.
    path: AssetPath<'static>,
    /// Handle to the scene asset.
    handle: Handle<Scene>,
    /// The `SceneRoot` entity.
    root: Entity,
    /// Whether a load failure has already been reported.
    failure_reported: bool,
}

/// Entities belonging to each part, keyed by part name.
#[derive(Resource, Default)]
pub struct PartEntities {
    parts: HashMap<PartName, PartMeshes>,
}

/// The node entity of a part and every mesh below it.
pub struct PartMeshes {
    /// The part's top-level node.
    pub node: Entity,
    /// Mesh entities under the node (including the node itself, if it has a mesh).
    pub meshes: Vec<Entity>,
}

impl PartEntities {
    /// Record the entities of a scene node.
    ///
    /// The node name is normalized the same way the part registry does it, so
    /// `"Cab "` is stored as `Cab`. Blank names and repeats of an earlier name
    /// are ignored; returns whether the node was recorded.
    pub fn insert(&mut self, node_name: &str, meshes: PartMeshes) -> bool {
        let Ok(name) = PartName::new(node_name) else {
            return false;
        };
        if self.parts.contains_key(&name) {
            return false;
        }
        self.parts.insert(name, meshes);
        true
    }

    /// Iterate over `(part name, entities)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PartMeshes)> {
        self.parts.iter().map(|(name, meshes)| (name.as_str(), meshes))
    }
}

/// Pending model requests from the UI.
#[derive(Resource, Default)]
pub struct ModelRequests {
    /// Whether to reload the model after a failure.
    retry: bool,
}

impl ModelRequests {
    /// Request a fresh load attempt.
    pub fn request_retry(&mut self) {
        self.retry = true;
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Start loading the configured model on startup.
fn spawn_model(mut commands: Commands, asset_server: Res<AssetServer>, params: Res<LaunchParams>) {
    let path = GltfAssetLabel::Scene(params.scene).from_asset(params.model.clone());
    let handle: Handle<Scene> = asset_server.load(path.clone());
    let root = commands.spawn(SceneRoot(handle.clone())).id();

    tracing::info!("Loading model: {path}");
    commands.insert_resource(ModelInstance {
        path,
        handle,
        root,
        failure_reported: false,
    });
}

/// Surface asset load failures as a configurator error.
fn watch_model_load(
    asset_server: Res<AssetServer>,
    instance: Option<ResMut<ModelInstance>>,
    mut configurator: ResMut<Configurator>,
) {
    let Some(mut instance) = instance else {
        return;
    };
    if instance.failure_reported {
        return;
    }

    if let LoadState::Failed(err) = asset_server.load_state(&instance.handle) {
        instance.failure_reported = true;
        configurator.report(Error::Load {
            path: instance.path.to_string(),
            message: err.to_string(),
        });
    }
}

/// Reload and respawn the model when a retry is requested.
fn process_model_requests(
    mut commands: Commands,
    mut requests: ResMut<ModelRequests>,
    asset_server: Res<AssetServer>,
    instance: Option<ResMut<ModelInstance>>,
    mut configurator: ResMut<Configurator>,
) {
    if !requests.retry {
        return;
    }
    requests.retry = false;

    let Some(mut instance) = instance else {
        return;
    };

    tracing::info!("Retrying model load: {}", instance.path);
    commands.entity(instance.root).despawn();
    asset_server.reload(instance.path.clone());
    instance.root = commands.spawn(SceneRoot(instance.handle.clone())).id();
    instance.failure_reported = false;
    configurator.status = None;
}

/// Observer called when the model scene has been instantiated.
fn on_model_ready(
    trigger: On<SceneInstanceReady>,
    instance: Option<Res<ModelInstance>>,
    mut part_entities: ResMut<PartEntities>,
    mut pending: ResMut<PendingActions>,
    children_query: Query<&Children>,
    name_query: Query<&Name>,
    mesh_query: Query<(), With<MeshMaterial3d<StandardMaterial>>>,
) {
    let Some(instance) = instance else {
        return;
    };
    if trigger.event_target() != instance.root {
        return;
    }

    let children_of = |entity: Entity| -> Vec<Entity> {
        children_query
            .get(entity)
            .map(|children| (**children).to_vec())
            .unwrap_or_default()
    };
    let top_level = top_level_nodes(instance.root, children_of, |e| name_query.contains(e));

    let mut nodes = Vec::with_capacity(top_level.len());
    part_entities.parts.clear();
    for entity in top_level {
        let name = name_query.get(entity).ok().map(|n| n.as_str().to_string());
        if let Some(name) = &name {
            let meshes = descendants(entity, children_of)
                .into_iter()
                .filter(|&e| mesh_query.contains(e))
                .collect();
            part_entities.insert(
                name,
                PartMeshes {
                    node: entity,
                    meshes,
                },
            );
        }
        nodes.push(SceneNode { name });
    }

    tracing::info!("Model ready with {} top-level node(s)", nodes.len());
    pending.push(Action::InitializeParts(nodes));
}

// ============================================================================
// Hierarchy helpers
// ============================================================================

/// Find the model's top-level nodes below a scene root.
///
/// glTF scenes are instantiated under one or more unnamed wrapper entities;
/// this descends through levels where no entity is named and returns the
/// first level that contains a named node.
fn top_level_nodes<T: Copy>(
    root: T,
    children_of: impl Fn(T) -> Vec<T>,
    is_named: impl Fn(T) -> bool,
) -> Vec<T> {
    let mut level = children_of(root);
    while !level.is_empty() && !level.iter().any(|&node| is_named(node)) {
        level = level.into_iter().flat_map(&children_of).collect();
    }
    level
}

/// A node and all of its descendants, depth first.
fn descendants<T: Copy>(root: T, children_of: impl Fn(T) -> Vec<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(children_of(node).into_iter().rev());
    }
    out
}
