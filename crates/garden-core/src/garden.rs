//! Procedural memory garden.
//!
//! Builds the scene graph the page shows: a ground and path, flowers that
//! carry memories, and decorative trees, benches, rocks, bushes, clouds,
//! hearts and fireflies. Only flowers are interactive.

use crate::constants::*;
use crate::error::SceneError;
use crate::memory::MemoryPayload;
use crate::scene::{NodeId, SceneGraph, Shape, Transform};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// A memory before validation.
#[derive(Clone, Debug)]
pub struct MemorySeed {
    pub text: String,
    pub image: Option<String>,
}

impl MemorySeed {
    pub fn new(text: &str, image: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            image: image.map(str::to_string),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GardenConfig {
    pub seed: u64,
    pub flowers: usize,
    pub trees: usize,
    pub benches: usize,
    pub rocks: usize,
    pub bushes: usize,
    pub hearts: usize,
    pub clouds: usize,
    pub fireflies: usize,
    /// Handed out to flowers round-robin.
    pub memories: Vec<MemorySeed>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            seed: 14,
            flowers: 60,
            trees: 10,
            benches: 4,
            rocks: 10,
            bushes: 12,
            hearts: 15,
            clouds: 12,
            fireflies: 100,
            memories: vec![
                MemorySeed::new(
                    "the night we got lost looking for the lake",
                    Some("assets/lake.png"),
                ),
                MemorySeed::new(
                    "your laugh when the cake slid off the plate",
                    Some("assets/cake.png"),
                ),
                MemorySeed::new("walking home in the first snow", Some("assets/snow.jpg")),
                MemorySeed::new("the song you hummed all summer", None),
                MemorySeed::new("you and your favorite flower <3", Some("assets/lily.jpg")),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowerKind {
    Daisy,
    Tulip,
}

#[derive(Clone, Debug)]
pub struct Flower {
    pub group: NodeId,
    pub kind: FlowerKind,
    pub base: Vec3,
}

#[derive(Clone, Debug)]
pub struct Tree {
    pub group: NodeId,
    pub leaves: NodeId,
    pub base: Vec3,
}

#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient: f32,
    pub sun: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            sun: SUN_BASE_INTENSITY,
        }
    }
}

pub struct Garden {
    pub seed: u64,
    pub scene: SceneGraph,
    pub ground: NodeId,
    pub path: NodeId,
    pub sky: NodeId,
    pub flowers: Vec<Flower>,
    pub trees: Vec<Tree>,
    pub benches: Vec<NodeId>,
    pub rocks: Vec<NodeId>,
    pub bushes: Vec<(NodeId, Vec3)>,
    pub clouds: Vec<NodeId>,
    pub hearts: Vec<NodeId>,
    pub fireflies: NodeId,
    /// Firefly points relative to the swarm node.
    pub firefly_points: Vec<Vec3>,
    pub lighting: Lighting,
}

impl Garden {
    pub fn build(config: &GardenConfig) -> Result<Self, SceneError> {
        if config.memories.is_empty() && config.flowers > 0 {
            return Err(SceneError::NoMemories);
        }
        let memories = config
            .memories
            .iter()
            .map(|m| MemoryPayload::new(m.text.clone(), m.image.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut scene = SceneGraph::new();
        let e = SCATTER_HALF_EXTENT;

        let sky = scene.add_root("sky", Transform::default(), Some(Shape::Sphere { radius: SKY_RADIUS }));
        let ground = scene.add_root(
            "ground",
            Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            Some(Shape::Plane {
                width: GROUND_SIZE,
                height: GROUND_SIZE,
            }),
        );
        let path = scene.add_root(
            "path",
            Transform::at(Vec3::new(0.0, 0.01, 0.0)).with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            Some(Shape::Plane {
                width: PATH_WIDTH,
                height: GROUND_SIZE,
            }),
        );

        let mut flowers = Vec::with_capacity(config.flowers);
        for i in 0..config.flowers {
            let base = Vec3::new(rng.gen_range(-e..e), 0.0, rng.gen_range(-e..e));
            let kind = if rng.gen_bool(0.5) {
                FlowerKind::Tulip
            } else {
                FlowerKind::Daisy
            };
            let group = add_flower(&mut scene, base, kind)?;
            scene.attach_payload(group, memories[i % memories.len()].clone())?;
            scene.mark_interactive(group)?;
            flowers.push(Flower { group, kind, base });
        }

        let mut benches = Vec::with_capacity(config.benches);
        for i in 0..config.benches {
            let base = Vec3::new(-30.0 + i as f32 * 20.0, 0.0, -5.0 + rng.gen::<f32>() * 10.0);
            benches.push(add_bench(&mut scene, base)?);
        }

        let mut rocks = Vec::with_capacity(config.rocks);
        for _ in 0..config.rocks {
            let pos = Vec3::new(rng.gen_range(-e..e), 0.5, rng.gen_range(-e..e));
            let rot = Vec3::new(rng.gen(), rng.gen(), rng.gen());
            let radius = 1.0 + rng.gen::<f32>() * 0.5;
            rocks.push(scene.add_root(
                "rock",
                Transform::at(pos).with_rotation(rot),
                Some(Shape::Dodecahedron { radius }),
            ));
        }

        let mut trees = Vec::with_capacity(config.trees);
        for _ in 0..config.trees {
            let base = Vec3::new(rng.gen_range(-e..e), 0.0, rng.gen_range(-e..e));
            let size = 2.5 + rng.gen::<f32>();
            trees.push(add_tree(&mut scene, base, size)?);
        }

        let mut bushes = Vec::with_capacity(config.bushes);
        for _ in 0..config.bushes {
            let base = Vec3::new(rng.gen_range(-e..e), 0.9, rng.gen_range(-e..e));
            let id = scene.add_root("bush", Transform::at(base), Some(Shape::Sphere { radius: 1.2 }));
            bushes.push((id, base));
        }

        let mut hearts = Vec::with_capacity(config.hearts);
        for _ in 0..config.hearts {
            let pos = Vec3::new(
                rng.gen_range(-e..e),
                rng.gen::<f32>() * 5.0 + 5.0,
                rng.gen_range(-e..e),
            );
            hearts.push(scene.add_root(
                "heart",
                Transform::at(pos).with_scale(Vec3::splat(1.5)),
                None,
            ));
        }

        let c = CLOUD_HALF_EXTENT;
        let mut clouds = Vec::with_capacity(config.clouds);
        for _ in 0..config.clouds {
            let pos = Vec3::new(rng.gen_range(-c..c), CLOUD_HEIGHT, rng.gen_range(-c..c));
            clouds.push(scene.add_root(
                "cloud",
                Transform::at(pos),
                Some(Shape::Plane {
                    width: 10.0,
                    height: 6.0,
                }),
            ));
        }

        let fireflies = scene.add_root("fireflies", Transform::default(), None);
        let firefly_points = (0..config.fireflies)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-e..e),
                    rng.gen::<f32>() * 10.0 + 1.0,
                    rng.gen_range(-e..e),
                )
            })
            .collect();

        log::info!(
            "[garden] seed={} nodes={} flowers={} interactive={}",
            config.seed,
            scene.len(),
            flowers.len(),
            scene.interactive().len()
        );

        Ok(Self {
            seed: config.seed,
            scene,
            ground,
            path,
            sky,
            flowers,
            trees,
            benches,
            rocks,
            bushes,
            clouds,
            hearts,
            fireflies,
            firefly_points,
            lighting: Lighting::default(),
        })
    }

    /// Firefly points in world space, following the swarm's current bob.
    pub fn firefly_positions(&self) -> Vec<Vec3> {
        let m = self.scene.world_matrix(self.fireflies);
        self.firefly_points
            .iter()
            .map(|&p| m.transform_point3(p))
            .collect()
    }
}

fn add_flower(scene: &mut SceneGraph, base: Vec3, kind: FlowerKind) -> Result<NodeId, SceneError> {
    let group = scene.add_root("flower", Transform::at(base), None);
    scene.add_child(
        group,
        "stem",
        Transform::at(Vec3::new(0.0, 1.0, 0.0)),
        Some(Shape::Cylinder {
            radius_top: 0.1,
            radius_bottom: 0.1,
            height: 2.0,
        }),
    )?;
    match kind {
        FlowerKind::Daisy => {
            for i in 0..8 {
                let angle = i as f32 / 8.0 * TAU;
                scene.add_child(
                    group,
                    "petal",
                    Transform::at(Vec3::new(angle.cos() * 0.3, 2.0, angle.sin() * 0.3))
                        .with_rotation(Vec3::new(PI / 8.0, angle, 0.0)),
                    Some(Shape::Cuboid {
                        size: Vec3::new(0.15, 0.5, 0.1),
                    }),
                )?;
            }
        }
        FlowerKind::Tulip => {
            for i in 0..6 {
                let angle = i as f32 / 6.0 * TAU;
                scene.add_child(
                    group,
                    "petal",
                    Transform::at(Vec3::new(angle.cos() * 0.4, 2.0, angle.sin() * 0.4)),
                    Some(Shape::Sphere { radius: 0.3 }),
                )?;
            }
        }
    }
    scene.add_child(
        group,
        "center",
        Transform::at(Vec3::new(0.0, 2.0, 0.0)),
        Some(Shape::Sphere { radius: 0.2 }),
    )?;
    Ok(group)
}

fn add_tree(scene: &mut SceneGraph, base: Vec3, size: f32) -> Result<Tree, SceneError> {
    let group = scene.add_root("tree", Transform::at(base), None);
    scene.add_child(
        group,
        "trunk",
        Transform::at(Vec3::new(0.0, 2.0, 0.0)),
        Some(Shape::Cylinder {
            radius_top: 0.3,
            radius_bottom: 0.5,
            height: 4.0,
        }),
    )?;
    let leaves = scene.add_child(
        group,
        "leaves",
        Transform::at(Vec3::new(0.0, 5.0, 0.0)),
        Some(Shape::Sphere { radius: size }),
    )?;
    Ok(Tree { group, leaves, base })
}

fn add_bench(scene: &mut SceneGraph, base: Vec3) -> Result<NodeId, SceneError> {
    let bench = scene.add_root("bench", Transform::at(base), None);
    scene.add_child(
        bench,
        "seat",
        Transform::at(Vec3::new(0.0, 0.5, 0.0)),
        Some(Shape::Cuboid {
            size: Vec3::new(3.0, 0.2, 1.0),
        }),
    )?;
    scene.add_child(
        bench,
        "back",
        Transform::at(Vec3::new(0.0, 1.0, -0.45)),
        Some(Shape::Cuboid {
            size: Vec3::new(3.0, 1.0, 0.1),
        }),
    )?;
    let leg = Shape::Cylinder {
        radius_top: 0.1,
        radius_bottom: 0.1,
        height: 0.5,
    };
    for x in [-1.0, 1.0] {
        for z in [-0.4, 0.4] {
            scene.add_child(bench, "leg", Transform::at(Vec3::new(x, 0.25, z)), Some(leg))?;
        }
    }
    Ok(bench)
}
