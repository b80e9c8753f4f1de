use runtime::{
    Actor, AnimationSequence, InputAction, InputSnapshot, Rect, Sprite, Vec2, VirtualCanvas,
};

pub(crate) const PLAYER_SPEED_PX_PER_TICK: f32 = 3.0;
const PLAYER_HITBOX_SIZE: Vec2 = Vec2 { x: 5.0, y: 4.0 };
const PLAYER_VISUAL_OFFSET: Vec2 = Vec2 { x: 1.0, y: 0.0 };
const HITBOX_OUTLINE_COLOR: [u8; 4] = [255, 0, 0, 255];

/// The controllable character. The hitbox is a small box at the
/// sprite's feet, not the sprite's full image; `visual_offset` bridges
/// the misalignment when drawing. Drawing anchors the sprite's bottom
/// edge to the hitbox's bottom edge and mirrors the art when facing
/// left.
pub(crate) struct Player {
    pub(crate) actor: Actor,
    idle_sprite: Sprite,
    walk_cycle: AnimationSequence,
    moving: bool,
}

impl Player {
    pub(crate) fn new(spawn: Vec2, idle_sprite: Sprite, walk_cycle: AnimationSequence) -> Self {
        let hitbox = Rect::new(spawn.x, spawn.y, PLAYER_HITBOX_SIZE.x, PLAYER_HITBOX_SIZE.y);
        Self {
            actor: Actor::new(hitbox).with_visual_offset(PLAYER_VISUAL_OFFSET),
            idle_sprite,
            walk_cycle,
            moving: false,
        }
    }

    /// One tick: translate held movement keys into this tick's
    /// velocity impulse, resolve movement against the collision set,
    /// and run the walk animation while in motion.
    pub(crate) fn update(&mut self, input: &InputSnapshot, solids: &[Rect]) {
        if input.is_down(InputAction::MoveUp) {
            self.actor.velocity.y -= PLAYER_SPEED_PX_PER_TICK;
        }
        if input.is_down(InputAction::MoveDown) {
            self.actor.velocity.y += PLAYER_SPEED_PX_PER_TICK;
        }
        if input.is_down(InputAction::MoveLeft) {
            self.actor.velocity.x -= PLAYER_SPEED_PX_PER_TICK;
        }
        if input.is_down(InputAction::MoveRight) {
            self.actor.velocity.x += PLAYER_SPEED_PX_PER_TICK;
        }

        self.moving = self.actor.velocity != Vec2::ZERO;
        self.actor.apply_movement(solids);

        if self.moving {
            self.walk_cycle.advance();
        } else {
            self.walk_cycle.reset();
        }
    }

    pub(crate) fn is_moving(&self) -> bool {
        self.moving
    }

    pub(crate) fn draw(&self, canvas: &mut VirtualCanvas, offset: Vec2, show_hitbox: bool) {
        let sprite = if self.moving {
            self.walk_cycle.current_frame()
        } else {
            &self.idle_sprite
        };
        let x = (self.actor.rect.x + offset.x - self.actor.visual_offset.x).round() as i32;
        let y = (self.actor.rect.bottom() + offset.y
            - sprite.height() as f32
            - self.actor.visual_offset.y)
            .round() as i32;
        if self.actor.facing_right {
            canvas.blit(sprite, x, y);
        } else {
            canvas.blit_flipped(sprite, x, y);
        }

        if show_hitbox {
            canvas.outline_rect(
                (self.actor.rect.x + offset.x).round() as i32,
                (self.actor.rect.y + offset.y).round() as i32,
                self.actor.rect.width.round() as u32,
                self.actor.rect.height.round() as u32,
                HITBOX_OUTLINE_COLOR,
            );
        }
    }
}
