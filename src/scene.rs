use serde::Serialize;

use crate::scenes::{Mesh, MeshRole, ParticleCloud};
use crate::types::{Fog, Light, Transform};

/// Stable handle to an entity in a [`SceneGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityId(u32);

/// A drawable in the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Mesh(Mesh),
    Particles(ParticleCloud),
}

impl Primitive {
    pub fn transform(&self) -> &Transform {
        match self {
            Primitive::Mesh(mesh) => &mesh.transform,
            Primitive::Particles(cloud) => &cloud.transform,
        }
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        match self {
            Primitive::Mesh(mesh) => &mut mesh.transform,
            Primitive::Particles(cloud) => &mut cloud.transform,
        }
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Primitive::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_particles(&self) -> Option<&ParticleCloud> {
        match self {
            Primitive::Particles(cloud) => Some(cloud),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Entity {
    Primitive(Primitive),
    Light(Light),
}

/// Owns every primitive and light of a scene
///
/// Entries keep insertion order so renders and tests are deterministic; the
/// order carries no other meaning.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneGraph {
    entries: Vec<(EntityId, Entity)>,
    next_id: u32,
    fog: Option<Fog>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entity));
        id
    }

    pub fn add_primitive(&mut self, primitive: Primitive) -> EntityId {
        self.insert(Entity::Primitive(primitive))
    }

    pub fn add_light(&mut self, light: Light) -> EntityId {
        self.insert(Entity::Light(light))
    }

    /// Remove an entity; unknown ids are ignored
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub fn primitive(&self, id: EntityId) -> Option<&Primitive> {
        self.entries.iter().find_map(|(entry_id, entity)| match entity {
            Entity::Primitive(p) if *entry_id == id => Some(p),
            _ => None,
        })
    }

    pub fn primitive_mut(&mut self, id: EntityId) -> Option<&mut Primitive> {
        self.entries.iter_mut().find_map(|(entry_id, entity)| match entity {
            Entity::Primitive(p) if *entry_id == id => Some(p),
            _ => None,
        })
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.entries.iter().filter_map(|(_, entity)| match entity {
            Entity::Primitive(p) => Some(p),
            _ => None,
        })
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.entries.iter().filter_map(|(_, entity)| match entity {
            Entity::Light(l) => Some(l),
            _ => None,
        })
    }

    /// First mesh with the given role
    pub fn mesh(&self, role: MeshRole) -> Option<&Mesh> {
        self.primitives()
            .filter_map(Primitive::as_mesh)
            .find(|mesh| mesh.role == role)
    }

    /// First particle cloud
    pub fn particles(&self) -> Option<&ParticleCloud> {
        self.primitives().find_map(Primitive::as_particles)
    }

    pub fn set_fog(&mut self, fog: Fog) {
        self.fog = Some(fog);
    }

    pub fn fog(&self) -> Option<&Fog> {
        self.fog.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
