//! Collision detection between the player and the obstacle set
//!
//! Everything uses AABB (Axis-Aligned Bounding Box) tests on the hitboxes
//! returned by `Entity::bounds()`. A hit ends the run, and the obstacle set is
//! emptied in the same call so nothing from the finished run survives into
//! the next one.

use crate::entity::Entity;
use crate::obstacle::ObstacleManager;
use crate::player::Player;
use sdl2::rect::Rect;

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes. Edges
/// are exclusive, so rectangles that only touch do not intersect.
///
/// # Example
///
/// ```rust
/// let player_bounds = Rect::new(10, 10, 32, 32);
/// let snail_bounds = Rect::new(20, 20, 32, 32);
///
/// assert!(aabb_intersect(&player_bounds, &snail_bounds));
/// ```
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the indices of every entity in `entities` that overlaps `entity`.
pub fn check_collisions_with_collection<T: Entity>(entity: &impl Entity, entities: &[T]) -> Vec<usize> {
    let entity_bounds = entity.bounds();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.bounds()))
        .map(|(index, _)| index)
        .collect()
}

/// True if the player overlaps any live obstacle.
///
/// On a hit the obstacle set is cleared before returning, so a `true` result
/// always leaves `obstacles` empty.
pub fn check_collision(player: &Player, obstacles: &mut ObstacleManager) -> bool {
    let hit = !check_collisions_with_collection(player, obstacles.obstacles()).is_empty();

    if hit {
        obstacles.clear_all();
    }
    hit
}
