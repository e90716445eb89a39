use glam::Vec2;

use crate::renderer::{Sprite, SpriteHandle};

/// Simulation state attached to a renderer-owned sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Pixels per tick
    pub velocity: Vec2,
    /// Subtracted from both scale axes each tick
    pub scale_speed: f32,
    /// Subtracted from alpha each tick
    pub alpha_speed: f32,
    /// Added to rotation each tick
    pub rotation_speed: f32,
}

/// Individual particle: a sprite plus the state that animates it
#[derive(Debug)]
pub struct Particle<S> {
    pub sprite: SpriteHandle<S>,
    pub state: SimulationState,
}

impl<S: Sprite> Particle<S> {
    pub fn new(sprite: SpriteHandle<S>, state: SimulationState) -> Self {
        Self { sprite, state }
    }

    /// Advance one tick. Returns `false` once the particle has faded out.
    pub fn step(&mut self, gravity: f32) -> bool {
        self.state.velocity.y += gravity;

        let mut sprite = self.sprite.borrow_mut();

        let position = sprite.position() + self.state.velocity;
        sprite.set_position(position);

        // Scale stops shrinking instead of crossing zero
        let mut scale = sprite.scale();
        if scale.x - self.state.scale_speed > 0.0 {
            scale.x -= self.state.scale_speed;
        }
        if scale.y - self.state.scale_speed > 0.0 {
            scale.y -= self.state.scale_speed;
        }
        sprite.set_scale(scale);

        let rotation = sprite.rotation() + self.state.rotation_speed;
        sprite.set_rotation(rotation);

        let alpha = sprite.alpha() - self.state.alpha_speed;
        sprite.set_alpha(alpha);

        alpha > 0.0
    }

    /// Check if particle is still visible
    pub fn is_alive(&self) -> bool {
        self.sprite.borrow().alpha() > 0.0
    }
}
