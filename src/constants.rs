// Sprite Dust Constants
//
// Default emission parameters. `EmitConfig::default()` and the serde defaults
// both read from here.

/// Emission geometry defaults
pub mod emission {
    /// Particles per `create` call
    pub const PARTICLE_COUNT: usize = 20;
    pub const GRAVITY: f32 = 0.0;
    pub const RANDOM_SPACING: bool = true;

    /// Angular range in radians
    pub const MIN_ANGLE: f32 = 0.0;
    pub const MAX_ANGLE: f32 = 6.28;
}

/// Per-particle visual and kinematic defaults
pub mod particle {
    /// Square sprite size in pixels
    pub const MIN_SIZE: u32 = 4;
    pub const MAX_SIZE: u32 = 16;

    /// Pixels per tick
    pub const MIN_SPEED: f32 = 0.3;
    pub const MAX_SPEED: f32 = 3.0;

    /// Per-tick decay rates
    pub const MIN_SCALE_SPEED: f32 = 0.01;
    pub const MAX_SCALE_SPEED: f32 = 0.05;
    pub const MIN_ALPHA_SPEED: f32 = 0.02;
    pub const MAX_ALPHA_SPEED: f32 = 0.02;
    pub const MIN_ROTATION_SPEED: f32 = 0.01;
    pub const MAX_ROTATION_SPEED: f32 = 0.03;

    /// Anchor placed at the sprite centre
    pub const CENTER_ANCHOR: f32 = 0.5;
}
