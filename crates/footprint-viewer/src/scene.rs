//! Footprint scene construction and lifecycle.
//!
//! The response is built once on startup through a Bevy-backed
//! [`MeshHost`]. Pressing Space releases the scene, pressing it again
//! rebuilds it from the same response.

use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use bevy::prelude::*;
use footprint::{Construction, ConstructionReport, FaceGeometry, MeshHost, Response, TileScale};

use crate::camera::OrbitCamera;
use crate::launch_params::LaunchParams;
use crate::mesh::convert_face;

/// Plugin for building and toggling the footprint scene.
pub struct FootprintScenePlugin;

impl Plugin for FootprintScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene)
            .add_systems(Update, toggle_scene);
    }
}

/// The parsed response being displayed.
#[derive(Resource)]
pub struct FootprintData {
    pub response: Response,
}

/// Nodes built from [`FootprintData`] and the material they derive from.
#[derive(Resource)]
pub struct FootprintScene {
    construction: Construction<Entity>,
    base_material: Handle<StandardMaterial>,
}

/// [`MeshHost`] over Bevy entities and assets.
///
/// Nodes are entities; geometry becomes a [`Mesh3d`]; each face gets its own
/// [`StandardMaterial`] cloned from the base with the tile scale applied as
/// its UV transform.
pub struct BevyMeshHost<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
}

impl MeshHost for BevyMeshHost<'_, '_, '_> {
    type Handle = Entity;
    type Material = Handle<StandardMaterial>;

    fn create_child(&mut self, parent: Option<&Entity>, name: &str) -> Entity {
        let mut entity = self.commands.spawn((
            Name::new(name.to_owned()),
            Transform::default(),
            Visibility::default(),
        ));
        if let Some(&parent) = parent {
            entity.insert(ChildOf(parent));
        }
        entity.id()
    }

    fn attach_geometry(&mut self, handle: &Entity, geometry: &FaceGeometry) {
        let mesh = self.meshes.add(convert_face(geometry));
        self.commands.entity(*handle).insert(Mesh3d(mesh));
    }

    fn attach_material(
        &mut self,
        handle: &Entity,
        material: &Handle<StandardMaterial>,
        tile_scale: TileScale,
    ) {
        let mut instance = self.materials.get(material).cloned().unwrap_or_default();
        instance.uv_transform =
            Affine2::from_scale(Vec2::new(tile_scale.horizontal, tile_scale.vertical));
        let instance = self.materials.add(instance);
        self.commands
            .entity(*handle)
            .insert(MeshMaterial3d(instance));
    }

    fn destroy(&mut self, handle: Entity) {
        self.commands.entity(handle).despawn();
    }
}

/// Build the scene, then frame it with the camera and a light.
fn setup_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<LaunchParams>,
    data: Res<FootprintData>,
) {
    // The tile scale repeats the atlas vertically, so the sampler must wrap.
    let atlas = (!params.untextured).then(|| {
        asset_server.load_with_settings(params.atlas.clone(), |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        })
    });

    let base_material = materials.add(StandardMaterial {
        base_color_texture: atlas,
        perceptual_roughness: 0.9,
        cull_mode: None,
        double_sided: true,
        ..default()
    });

    let mut construction = Construction::new();
    let report = {
        let mut host = BevyMeshHost {
            commands: &mut commands,
            meshes: &mut meshes,
            materials: &mut materials,
        };
        construction.build(&data.response, &mut host, &base_material)
    };

    spawn_camera(&mut commands, &report);
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(1.0, 2.0, 0.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(FootprintScene {
        construction,
        base_material,
    });

    tracing::info!("Scene setup complete - arrows orbit, PageUp/PageDown zoom, Space toggles");
}

/// Centre and bounding radius of the built geometry.
fn framing(report: &ConstructionReport) -> (Vec3, f32) {
    report.bounds.map_or((Vec3::ZERO, 50.0), |(min, max)| {
        ((min + max) * 0.5, ((max - min).length() * 0.5).max(1.0))
    })
}

/// Place the orbit camera so the built geometry fills the view.
fn spawn_camera(commands: &mut Commands, report: &ConstructionReport) {
    let (focus, radius) = framing(report);
    let orbit = OrbitCamera::new(focus, radius * 2.5);
    commands.spawn((Camera3d::default(), orbit.transform(), orbit));
}

/// Release or rebuild the scene on Space.
#[allow(clippy::needless_pass_by_value)]
fn toggle_scene(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Option<ResMut<FootprintScene>>,
    data: Res<FootprintData>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let Some(mut scene) = scene else {
        return;
    };

    let scene = &mut *scene;
    let mut host = BevyMeshHost {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: &mut materials,
    };

    if scene.construction.is_empty() {
        scene
            .construction
            .build(&data.response, &mut host, &scene.base_material);
    } else {
        scene.construction.release(&mut host);
        tracing::info!("Scene released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_centres_on_bounds() {
        let report = ConstructionReport {
            bounds: Some((Vec3::new(-2.0, 0.0, 1.0), Vec3::new(2.0, 6.0, 1.0))),
            ..Default::default()
        };
        let (focus, radius) = framing(&report);

        assert_eq!(focus, Vec3::new(0.0, 3.0, 1.0));
        assert!((radius - 13.0f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_framing_without_geometry() {
        let (focus, radius) = framing(&ConstructionReport::default());
        assert_eq!(focus, Vec3::ZERO);
        assert_eq!(radius, 50.0);
    }

    #[test]
    fn test_framing_tiny_bounds_keeps_min_radius() {
        let report = ConstructionReport {
            bounds: Some((Vec3::ONE, Vec3::ONE)),
            ..Default::default()
        };
        assert_eq!(framing(&report).1, 1.0);
    }
}
