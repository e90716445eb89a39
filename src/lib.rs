//! Sprite-based particle effects for 2D renderers
//!
//! `ParticleSystem::create` spawns a burst of sprites with randomized
//! direction, speed, size and decay rates. `ParticleSystem::update`, called
//! once per frame, moves them, shrinks, spins and fades them, and removes each
//! particle from its container the tick it becomes invisible. An `Emitter`
//! repeats a burst on a timer.
//!
//! The host's renderer plugs in through the traits in [`renderer`]; the
//! bundled [`renderer::headless`] backend runs effects without drawing.
//!
//! ```
//! use sprite_dust::{EmitConfig, HeadlessEngine, HeadlessSprite, ParticleSystem};
//!
//! let mut dust = ParticleSystem::new(HeadlessEngine::new());
//! let burst = EmitConfig::default().with_origin(64.0, 64.0).with_count(12);
//! let batch = dust.create(&burst, || Ok(HeadlessSprite::new()), None)?;
//!
//! dust.update();
//! assert_eq!(batch.borrow().len(), 12);
//! # Ok::<(), sprite_dust::DustError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod particles;
pub mod random;
pub mod renderer;

pub use config::EmitConfig;
pub use error::{DustError, DustResult};
pub use particles::{
    BatchHandle, Emitter, Particle, ParticleBatch, ParticleStats, ParticleSystem, ParticleUpdate,
    SimulationState,
};
pub use random::ParticleRng;
pub use renderer::{
    Container, ContainerFactory, ContainerHandle, HeadlessContainer, HeadlessEngine, HeadlessSprite,
    RenderingEngine, Sprite, SpriteHandle,
};
