use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec, in spawn order.
/// A solar system is a few dozen meshes; linear lookups are fine.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Find all entities with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.tag == tag).collect()
    }

    /// Iterate mutably over every entity carrying the given tag.
    pub fn tagged_mut<'a>(&'a mut self, tag: &'a str) -> impl Iterator<Item = &'a mut Entity> + 'a {
        self.entities.iter_mut().filter(move |e| e.tag == tag)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Rgba;
    use crate::components::mesh::MeshComponent;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(10.0, 0.0, -20.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec3::new(10.0, 0.0, -20.0));
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("orbit-guide"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("orbit-guide"));
        let sun = scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.id, EntityId(1));
        assert_eq!(scene.find_all_by_tag("orbit-guide").len(), 2);
    }

    #[test]
    fn tagged_mut_recolors_only_matching_entities() {
        let mut scene = Scene::new();
        let ring = MeshComponent::ring(1.0, 2.0, 8);
        scene.spawn(Entity::new(EntityId(1)).with_tag("orbit-guide").with_mesh(ring));
        scene.spawn(Entity::new(EntityId(2)).with_tag("planet").with_mesh(ring));

        for e in scene.tagged_mut("orbit-guide") {
            if let Some(mesh) = e.mesh.as_mut() {
                mesh.color = Rgba::BLACK;
            }
        }

        assert_eq!(scene.get(EntityId(1)).unwrap().mesh.unwrap().color, Rgba::BLACK);
        assert_eq!(scene.get(EntityId(2)).unwrap().mesh.unwrap().color, Rgba::WHITE);
    }
}
