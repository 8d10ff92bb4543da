// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Scene: headless 3D scene description for the room walkthrough.
//!
//! [`layout_scene`] turns a set of screen and room dimensions into a plain
//! data description of a perspective scene: the room shell (floor, back
//! wall, left wall), the screen slab mounted on the back wall, reference
//! furniture, a camera pose, and lighting. A 3D collaborator (a WebGL
//! embedding, a game engine, a ray tracer) consumes the description; this
//! crate never talks to a GPU.
//!
//! All lengths are centimeters. The coordinate frame is y-up with the room's
//! inner corner at the origin: +x runs along the back wall, +z into the
//! room, so the back wall sits at `z = 0` and the floor at `y = 0`.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use peniko::Color;

use sightline_model::room::RoomDimensions;
use sightline_model::screen::ScreenDimensions;

/// Thickness of the wall slabs, in centimeters.
pub const WALL_THICKNESS: f64 = 10.0;

/// Thickness of the floor slab, in centimeters.
pub const FLOOR_THICKNESS: f64 = 5.0;

/// Thickness of the screen slab, in centimeters.
pub const SCREEN_THICKNESS: f64 = 5.0;

/// Gap between the back wall face and the screen slab, in centimeters.
pub const SCREEN_WALL_GAP: f64 = 2.0;

/// Vertical camera field of view, in degrees.
pub const CAMERA_FOV_DEGREES: f64 = 75.0;

/// A point or direction in scene space, y up, centimeters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// Along the back wall.
    pub x: f64,
    /// Up.
    pub y: f64,
    /// Into the room.
    pub z: f64,
}

impl Vec3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// A vector from components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An axis-aligned box given by its center and full extents.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Box3 {
    /// Center of the box.
    pub center: Vec3,
    /// Full width, height, and depth.
    pub size: Vec3,
}

impl Box3 {
    /// The box's minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        Vec3::new(
            self.center.x - self.size.x / 2.0,
            self.center.y - self.size.y / 2.0,
            self.center.z - self.size.z / 2.0,
        )
    }

    /// The box's maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        Vec3::new(
            self.center.x + self.size.x / 2.0,
            self.center.y + self.size.y / 2.0,
            self.center.z + self.size.z / 2.0,
        )
    }
}

/// What a scene node represents, for pickers and styling overrides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The floor slab.
    Floor,
    /// The wall the screen hangs on, at `z = 0`.
    BackWall,
    /// The side wall at `x = 0`.
    SideWall,
    /// The mounted screen slab.
    Screen,
    /// Reference furniture (table, chairs).
    Furniture,
}

/// Phong-style surface description.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Diffuse color.
    pub color: Color,
    /// Specular shininess exponent; `0.0` for matte surfaces.
    pub shininess: f64,
}

/// One box mesh in the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// What the box represents.
    pub kind: NodeKind,
    /// Geometry.
    pub shape: Box3,
    /// Surface.
    pub material: Material,
    /// Whether the node casts shadows.
    pub casts_shadow: bool,
    /// Whether the node receives shadows.
    pub receives_shadow: bool,
}

/// Perspective camera pose.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub eye: Vec3,
    /// Look-at target; also the orbit center for interactive collaborators.
    pub target: Vec3,
    /// Vertical field of view, in degrees.
    pub fov_degrees: f64,
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
}

/// The key (shadow-casting, directional) light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyLight {
    /// Light position; the light aims at the origin.
    pub position: Vec3,
    /// Intensity in `0.0..=1.0`.
    pub intensity: f64,
    /// Half-extent of the orthographic shadow frustum along x.
    pub shadow_extent_x: f64,
    /// Half-extent of the orthographic shadow frustum along y.
    pub shadow_extent_y: f64,
    /// Shadow camera near distance.
    pub shadow_near: f64,
    /// Shadow camera far distance.
    pub shadow_far: f64,
}

/// The ceiling fill light, just under the ceiling at the room center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FillLight {
    /// Light position.
    pub position: Vec3,
    /// Intensity in `0.0..=1.0`.
    pub intensity: f64,
}

/// Scene lighting: one ambient term plus key and fill lights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lighting {
    /// Ambient intensity in `0.0..=1.0`.
    pub ambient_intensity: f64,
    /// The key light.
    pub key: KeyLight,
    /// The fill light.
    pub fill: FillLight,
}

/// Complete scene description.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    /// Scene background color.
    pub background: Color,
    /// Camera pose.
    pub camera: CameraPose,
    /// Lighting setup.
    pub lighting: Lighting,
    /// Box meshes, room shell first, then the screen, then furniture.
    pub nodes: Vec<SceneNode>,
}

impl SceneLayout {
    /// The screen node, if the screen has any extent.
    #[must_use]
    pub fn screen(&self) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Screen)
    }
}

const WALL_COLOR: Color = Color::from_rgba8(204, 204, 204, 255);
const FLOOR_COLOR: Color = Color::from_rgba8(128, 128, 128, 255);
const SCREEN_COLOR: Color = Color::from_rgba8(51, 51, 51, 255);
const FURNITURE_COLOR: Color = Color::from_rgba8(139, 69, 19, 255);
const BACKGROUND: Color = Color::from_rgba8(240, 240, 240, 255);

/// Builds the scene for the given dimensions.
///
/// Pure and infallible; degenerate dimensions produce degenerate boxes, and
/// the collaborator decides what to do with them. The camera orbits the room
/// center from outside the front-right corner, high enough to look down into
/// the shell.
#[must_use]
pub fn layout_scene(screen: &ScreenDimensions, room: &RoomDimensions) -> SceneLayout {
    let (w, h, d) = (room.width_cm, room.height_cm, room.depth_cm);
    let room_center = Vec3::new(w / 2.0, h / 2.0, d / 2.0);

    let camera = CameraPose {
        eye: Vec3::new(w * 1.5, h * 1.2, d * 1.5),
        target: room_center,
        fov_degrees: CAMERA_FOV_DEGREES,
        near: 0.1,
        far: 2_000.0,
    };

    let lighting = Lighting {
        ambient_intensity: 0.5,
        key: KeyLight {
            position: Vec3::new(w, h * 1.5, d),
            intensity: 0.8,
            shadow_extent_x: w,
            shadow_extent_y: h,
            shadow_near: 0.5,
            shadow_far: 3_000.0,
        },
        fill: FillLight {
            position: Vec3::new(w / 2.0, h - 1.0, d / 2.0),
            intensity: 0.5,
        },
    };

    let mut nodes = Vec::with_capacity(7);

    // Room shell: floor below y = 0, walls behind z = 0 and left of x = 0,
    // so the inner faces line up with the coordinate planes.
    nodes.push(SceneNode {
        kind: NodeKind::Floor,
        shape: Box3 {
            center: Vec3::new(w / 2.0, -FLOOR_THICKNESS / 2.0, d / 2.0),
            size: Vec3::new(w, FLOOR_THICKNESS, d),
        },
        material: Material {
            color: FLOOR_COLOR,
            shininess: 0.0,
        },
        casts_shadow: false,
        receives_shadow: true,
    });
    let wall = Material {
        color: WALL_COLOR,
        shininess: 0.0,
    };
    nodes.push(SceneNode {
        kind: NodeKind::BackWall,
        shape: Box3 {
            center: Vec3::new(w / 2.0, h / 2.0, -WALL_THICKNESS / 2.0),
            size: Vec3::new(w, h, WALL_THICKNESS),
        },
        material: wall,
        casts_shadow: false,
        receives_shadow: true,
    });
    nodes.push(SceneNode {
        kind: NodeKind::SideWall,
        shape: Box3 {
            center: Vec3::new(-WALL_THICKNESS / 2.0, h / 2.0, d / 2.0),
            size: Vec3::new(WALL_THICKNESS, h, d),
        },
        material: wall,
        casts_shadow: false,
        receives_shadow: true,
    });

    // Screen slab, centered on the back wall, bottom edge at mount height.
    nodes.push(SceneNode {
        kind: NodeKind::Screen,
        shape: Box3 {
            center: Vec3::new(
                w / 2.0,
                room.mount_height_cm + screen.height_cm / 2.0,
                SCREEN_THICKNESS / 2.0 + SCREEN_WALL_GAP,
            ),
            size: Vec3::new(screen.width_cm, screen.height_cm, SCREEN_THICKNESS),
        },
        material: Material {
            color: SCREEN_COLOR,
            shininess: 30.0,
        },
        casts_shadow: true,
        receives_shadow: true,
    });

    // Reference furniture at fixed real-world sizes: a table at the room
    // center and two chairs behind it.
    let furniture = Material {
        color: FURNITURE_COLOR,
        shininess: 30.0,
    };
    nodes.push(SceneNode {
        kind: NodeKind::Furniture,
        shape: Box3 {
            center: Vec3::new(w / 2.0, 30.0, d / 2.0),
            size: Vec3::new(120.0, 5.0, 60.0),
        },
        material: furniture,
        casts_shadow: true,
        receives_shadow: true,
    });
    for dx in [-30.0, 30.0] {
        nodes.push(SceneNode {
            kind: NodeKind::Furniture,
            shape: Box3 {
                center: Vec3::new(w / 2.0 + dx, 25.0, d / 2.0 + 40.0),
                size: Vec3::new(40.0, 50.0, 40.0),
            },
            material: furniture,
            casts_shadow: true,
            receives_shadow: true,
        });
    }

    SceneLayout {
        background: BACKGROUND,
        camera,
        lighting,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_screen() -> ScreenDimensions {
        ScreenDimensions {
            width_cm: 121.8,
            height_cm: 68.5,
            diagonal_cm: 139.7,
        }
    }

    fn test_room() -> RoomDimensions {
        RoomDimensions {
            width_cm: 400.0,
            depth_cm: 500.0,
            height_cm: 243.8,
            mount_height_cm: 100.0,
        }
    }

    #[test]
    fn camera_orbits_the_room_center() {
        let scene = layout_scene(&test_screen(), &test_room());
        assert_eq!(scene.camera.eye, Vec3::new(600.0, 243.8 * 1.2, 750.0));
        assert_eq!(scene.camera.target, Vec3::new(200.0, 121.9, 250.0));
        assert_eq!(scene.camera.fov_degrees, 75.0);
    }

    #[test]
    fn screen_hangs_on_the_back_wall_at_mount_height() {
        let scene = layout_scene(&test_screen(), &test_room());
        let screen = scene.screen().expect("screen node present");

        // Bottom edge at the mount height, centered along the wall.
        assert!((screen.shape.min().y - 100.0).abs() < 1e-9);
        assert!((screen.shape.center.x - 200.0).abs() < 1e-9);
        // Just proud of the wall's inner face.
        assert!(screen.shape.min().z > 0.0);
        assert!(screen.shape.min().z < WALL_THICKNESS);
    }

    #[test]
    fn room_shell_inner_faces_sit_on_the_coordinate_planes() {
        let scene = layout_scene(&test_screen(), &test_room());
        let of_kind = |kind: NodeKind| {
            scene
                .nodes
                .iter()
                .find(|n| n.kind == kind)
                .expect("node present")
        };

        assert_eq!(of_kind(NodeKind::Floor).shape.max().y, 0.0);
        assert_eq!(of_kind(NodeKind::BackWall).shape.max().z, 0.0);
        assert_eq!(of_kind(NodeKind::SideWall).shape.max().x, 0.0);
    }

    #[test]
    fn key_light_shadow_frustum_covers_the_room() {
        let scene = layout_scene(&test_screen(), &test_room());
        assert_eq!(scene.lighting.key.shadow_extent_x, 400.0);
        assert_eq!(scene.lighting.key.shadow_extent_y, 243.8);
        assert_eq!(scene.lighting.ambient_intensity, 0.5);
        assert!(scene.lighting.fill.position.y < 243.8);
    }

    #[test]
    fn furniture_keeps_fixed_real_world_sizes() {
        let small = RoomDimensions {
            width_cm: 200.0,
            depth_cm: 200.0,
            height_cm: 200.0,
            mount_height_cm: 50.0,
        };
        let scene = layout_scene(&test_screen(), &small);
        let table = scene
            .nodes
            .iter()
            .find(|n| n.kind == NodeKind::Furniture)
            .expect("table present");
        assert_eq!(table.shape.size, Vec3::new(120.0, 5.0, 60.0));
    }

    #[test]
    fn degenerate_dimensions_still_describe_a_scene() {
        let scene = layout_scene(&ScreenDimensions::ZERO, &RoomDimensions::ZERO);
        assert_eq!(scene.nodes.len(), 7);
        assert_eq!(scene.camera.eye, Vec3::ZERO);
    }
}
