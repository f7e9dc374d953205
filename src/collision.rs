/// Axis-aligned hitboxes and the overlap test used for every collision.
///
/// Gameplay is flat: only x and y take part, z is ignored.

use glam::{Vec2, Vec3};

use crate::entities::{Alien, EntityKind, Projectile, RenderItem, Ship};

/// Subtracted from each hitbox's edge length.
pub const COLLISION_MARGIN: f32 = 0.07;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Open-interval overlap: boxes that only touch do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Anything that can take part in a collision test.
pub trait Collider {
    fn position(&self) -> Vec3;

    /// `None` opts out: such a thing never collides with anything.
    fn kind(&self) -> Option<EntityKind>;
}

/// Half width and half height of a kind's hitbox.
pub fn half_extents(kind: EntityKind) -> Vec2 {
    let edge = kind.base_size() * kind.scale() - COLLISION_MARGIN;
    Vec2::splat(edge / 2.0)
}

pub fn hitbox(kind: EntityKind, position: Vec3) -> Aabb {
    let center = position.truncate();
    let half = half_extents(kind);
    Aabb {
        min: center - half,
        max: center + half,
    }
}

/// True when both things have a kind and their hitboxes overlap on x and y.
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    let (Some(a_kind), Some(b_kind)) = (a.kind(), b.kind()) else {
        return false;
    };
    hitbox(a_kind, a.position()).overlaps(&hitbox(b_kind, b.position()))
}

impl Collider for Ship {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn kind(&self) -> Option<EntityKind> {
        Some(EntityKind::Ship)
    }
}

impl Collider for Alien {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn kind(&self) -> Option<EntityKind> {
        Some(EntityKind::Alien)
    }
}

impl Collider for Projectile {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn kind(&self) -> Option<EntityKind> {
        Some(Projectile::kind(self))
    }
}

impl Collider for RenderItem {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn kind(&self) -> Option<EntityKind> {
        Some(self.kind)
    }
}
