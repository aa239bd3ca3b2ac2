use glam::Vec3;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::math::{BRIGHT_GOLD, GOLD, SILVER, WHITE};
use crate::types::{PhongMaterial, Transform};

pub const PRIMARY_RADIUS: f32 = 10.0;
pub const SECONDARY_RADIUS: f32 = 6.0;

const PHI: f32 = 1.618_034;

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICOSAHEDRON_FACES: [[u16; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

const OCTAHEDRON_VERTICES: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const OCTAHEDRON_FACES: [[u16; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PolyhedronKind {
    Icosahedron,
    Octahedron,
}

/// Unsubdivided regular polyhedron inscribed in a sphere of `radius`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Polyhedron {
    pub kind: PolyhedronKind,
    pub radius: f32,
}

impl Polyhedron {
    pub fn icosahedron(radius: f32) -> Self {
        Self {
            kind: PolyhedronKind::Icosahedron,
            radius,
        }
    }

    pub fn octahedron(radius: f32) -> Self {
        Self {
            kind: PolyhedronKind::Octahedron,
            radius,
        }
    }

    fn base(&self) -> (&'static [[f32; 3]], &'static [[u16; 3]]) {
        match self.kind {
            PolyhedronKind::Icosahedron => (&ICOSAHEDRON_VERTICES, &ICOSAHEDRON_FACES),
            PolyhedronKind::Octahedron => (&OCTAHEDRON_VERTICES, &OCTAHEDRON_FACES),
        }
    }

    /// Vertices projected onto the bounding sphere
    pub fn vertices(&self) -> Vec<Vec3> {
        let (vertices, _) = self.base();
        vertices
            .iter()
            .map(|&v| Vec3::from_array(v).normalize() * self.radius)
            .collect()
    }

    pub fn faces(&self) -> &'static [[u16; 3]] {
        self.base().1
    }

    /// Unique undirected edges, sorted, for wireframe drawing
    pub fn edges(&self) -> Vec<[u16; 2]> {
        self.faces()
            .iter()
            .flat_map(|&[a, b, c]| [[a, b], [b, c], [c, a]])
            .map(|[a, b]| if a < b { [a, b] } else { [b, a] })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeshRole {
    Primary,
    Secondary,
}

/// A single wireframe polyhedron in the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub role: MeshRole,
    pub shape: Polyhedron,
    pub material: PhongMaterial,
    pub transform: Transform,
}

/// Gold icosahedron at the center of the hero
pub fn primary_mesh() -> Mesh {
    Mesh {
        role: MeshRole::Primary,
        shape: Polyhedron::icosahedron(PRIMARY_RADIUS),
        material: PhongMaterial::wireframe(GOLD, BRIGHT_GOLD, 0.4, 0.8).with_shininess(100.0),
        transform: Transform::default(),
    }
}

/// Smaller white octahedron that counter-orbits the primary
pub fn secondary_mesh() -> Mesh {
    Mesh {
        role: MeshRole::Secondary,
        shape: Polyhedron::octahedron(SECONDARY_RADIUS),
        material: PhongMaterial::wireframe(WHITE, SILVER, 0.2, 0.5),
        transform: Transform::default(),
    }
}
