use super::{Rect, Vec2};

/// A moving body with a hitbox that can be smaller than its art. The
/// velocity is a one-tick impulse written by input handling each frame
/// and consumed (and zeroed) by [`Actor::apply_movement`]; there is no
/// gravity or acceleration in this model. `visual_offset` only affects
/// where the owner draws its sprite relative to the hitbox.
#[derive(Debug, Clone)]
pub struct Actor {
    pub rect: Rect,
    pub velocity: Vec2,
    pub facing_right: bool,
    pub visual_offset: Vec2,
}

impl Actor {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            facing_right: true,
            visual_offset: Vec2::ZERO,
        }
    }

    pub fn with_visual_offset(mut self, visual_offset: Vec2) -> Self {
        self.visual_offset = visual_offset;
        self
    }

    /// Moves the hitbox by the current velocity, resolving penetration
    /// against the static collision set one axis at a time: X first,
    /// then Y. The sequential order is intentional: diagonal movement
    /// into a concave corner resolves by that order rather than
    /// simultaneously, and game feel depends on it.
    ///
    /// Horizontal clamping keys off the facing flag (last nonzero
    /// horizontal direction), vertical clamping off the sign of the
    /// vertical velocity. Always terminates: the obstacle set is
    /// static and finite.
    pub fn apply_movement(&mut self, solids: &[Rect]) {
        if self.velocity.x > 0.0 {
            self.facing_right = true;
        } else if self.velocity.x < 0.0 {
            self.facing_right = false;
        }

        self.rect.x += self.velocity.x;
        for solid in solids {
            if !self.rect.overlaps(solid) {
                continue;
            }
            if self.facing_right {
                self.rect.set_right(solid.left());
            } else {
                self.rect.set_left(solid.right());
            }
        }

        self.rect.y += self.velocity.y;
        for solid in solids {
            if !self.rect.overlaps(solid) {
                continue;
            }
            if self.velocity.y < 0.0 {
                self.rect.set_top(solid.bottom());
            } else {
                self.rect.set_bottom(solid.top());
            }
        }

        self.velocity = Vec2::ZERO;
    }
}
