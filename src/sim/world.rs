//! World-facing queries
//!
//! The world owns the entities; this module only reads their boxes.

use glam::DVec2;

use super::aabb::Aabb;

/// Anything that exposes its bounding box by reference
pub trait Bounded {
    fn aabb(&self) -> &Aabb;
}

impl Bounded for Aabb {
    #[inline]
    fn aabb(&self) -> &Aabb {
        self
    }
}

/// Read-only view of the collidable entities in a world
pub trait World {
    type Entity: Bounded;

    /// Current entity set, in stable order
    fn entities(&self) -> impl Iterator<Item = &Self::Entity>;
}

impl Aabb {
    /// Whether `point` is outside every entity box in `world`
    ///
    /// Linear scan over all entities. Box boundaries count as blocked.
    pub fn open_point<W: World + ?Sized>(point: DVec2, world: &W) -> bool {
        !world
            .entities()
            .any(|e| Aabb::inside_point(point, e.aabb()))
    }
}

/// A collidable entity
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: u32,
    pub aabb: Aabb,
}

impl Bounded for Entity {
    #[inline]
    fn aabb(&self) -> &Aabb {
        &self.aabb
    }
}

/// Simple owned world: entities in spawn order, ids never reused
#[derive(Debug, Clone, Default)]
pub struct EntityWorld {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntityWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity with the given box, returning its id
    pub fn spawn(&mut self, aabb: Aabb) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity { id, aabb });
        id
    }

    /// Remove an entity, returning it if it existed
    pub fn despawn(&mut self, id: u32) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl World for EntityWorld {
    type Entity = Entity;

    fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }
}

/// A bare list of boxes is also a world
impl World for [Aabb] {
    type Entity = Aabb;

    fn entities(&self) -> impl Iterator<Item = &Aabb> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: i32) -> Aabb {
        Aabb::from_top_left_and_size(DVec2::new(x, y), size, size).unwrap()
    }

    #[test]
    fn test_open_point_single_entity() {
        let mut world = EntityWorld::new();
        world.spawn(square(0.0, 0.0, 10));

        assert!(!Aabb::open_point(DVec2::new(5.0, 5.0), &world));
        assert!(Aabb::open_point(DVec2::new(50.0, 50.0), &world));
        // Boundary is blocked
        assert!(!Aabb::open_point(DVec2::new(10.0, 0.0), &world));
    }

    #[test]
    fn test_open_point_empty_world() {
        let world = EntityWorld::new();
        assert!(Aabb::open_point(DVec2::ZERO, &world));
    }

    #[test]
    fn test_open_point_sees_moved_entity() {
        let mut world = EntityWorld::new();
        let id = world.spawn(square(0.0, 0.0, 10));
        world.spawn(square(100.0, 100.0, 10));

        assert!(Aabb::open_point(DVec2::new(55.0, 55.0), &world));
        world.get_mut(id).unwrap().aabb.move_to_xy(50, 50);
        assert!(!Aabb::open_point(DVec2::new(55.0, 55.0), &world));
        assert!(Aabb::open_point(DVec2::new(5.0, 5.0), &world));
    }

    #[test]
    fn test_open_point_slice_world() {
        let boxes = [square(0.0, 0.0, 10), square(20.0, 0.0, 10)];
        assert!(Aabb::open_point(DVec2::new(15.0, 5.0), &boxes[..]));
        assert!(!Aabb::open_point(DVec2::new(25.0, 5.0), &boxes[..]));
    }

    #[test]
    fn test_spawn_despawn_ids() {
        let mut world = EntityWorld::new();
        let a = world.spawn(square(0.0, 0.0, 1));
        let b = world.spawn(square(5.0, 0.0, 1));
        assert_ne!(a, b);
        assert_eq!(world.len(), 2);

        let removed = world.despawn(a).unwrap();
        assert_eq!(removed.id, a);
        assert!(world.get(a).is_none());
        assert!(world.despawn(a).is_none());

        let c = world.spawn(square(9.0, 0.0, 1));
        assert_ne!(c, a);
        assert_eq!(world.iter().map(|e| e.id).collect::<Vec<_>>(), vec![b, c]);
    }

    #[test]
    fn test_ids_not_reused_after_despawning_newest() {
        let mut world = EntityWorld::new();
        world.spawn(square(0.0, 0.0, 1));
        let newest = world.spawn(square(5.0, 0.0, 1));
        world.despawn(newest);

        let next = world.spawn(square(9.0, 0.0, 1));
        assert_ne!(next, newest);
        let mut ids: Vec<u32> = world.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), world.len());
    }
}
