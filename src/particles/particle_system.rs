use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::EmitConfig;
use crate::constants::particle::CENTER_ANCHOR;
use crate::error::{DustError, DustResult};
use crate::particles::{emission_angles, Emitter, Particle, ParticleBatch, SimulationState};
use crate::random::ParticleRng;
use crate::renderer::{container_handle, sprite_handle, ContainerHandle, RenderingEngine, Sprite};

/// Live handle to a batch, shared between the registry and the caller
pub type BatchHandle<C> = Rc<RefCell<ParticleBatch<C>>>;

/// Particle system update result
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParticleUpdate {
    pub active_batches: usize,
    pub active_particles: usize,
    pub removed_particles: usize,
    pub removed_batches: usize,
}

/// Statistics about the particle system
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParticleStats {
    pub batches: usize,
    pub particles: usize,
}

/// Main particle system that manages all particle batches
///
/// Hosts call `create` to spawn a burst and `update` once per frame. Batches
/// returned by `create` stay live: the registry and the caller share them, so
/// callers must not hold a `borrow_mut` across `update`.
pub struct ParticleSystem<E: RenderingEngine> {
    engine: E,
    /// Renderer identifier; empty when the engine builds no containers
    renderer: String,
    batches: Vec<BatchHandle<E::Container>>,
    rng: ParticleRng,
}

impl<E: RenderingEngine> ParticleSystem<E> {
    /// Create a new particle system bound to `engine`
    pub fn new(engine: E) -> Self {
        Self::with_rng(engine, ParticleRng::from_entropy())
    }

    /// Create a particle system with a deterministic random source
    pub fn with_seed(engine: E, seed: u64) -> Self {
        Self::with_rng(engine, ParticleRng::seeded(seed))
    }

    /// Create a particle system from an optional engine handle
    pub fn try_new(engine: Option<E>) -> DustResult<Self> {
        engine
            .map(Self::new)
            .ok_or(DustError::MissingRenderingEngine)
    }

    fn with_rng(engine: E, rng: ParticleRng) -> Self {
        let renderer = if engine.container_factory().is_some() {
            engine.name().to_string()
        } else {
            String::new()
        };

        if renderer.is_empty() {
            log::debug!(
                "Particle system using `{}` without a container factory; containers must be supplied",
                engine.name()
            );
        } else {
            log::debug!("Particle system bound to renderer `{}`", renderer);
        }

        Self {
            engine,
            renderer,
            batches: Vec::new(),
            rng,
        }
    }

    /// Renderer identifier, empty when unbound
    pub fn renderer(&self) -> &str {
        &self.renderer
    }

    pub fn is_bound(&self) -> bool {
        !self.renderer.is_empty()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// All live batches, oldest first
    pub fn batches(&self) -> &[BatchHandle<E::Container>] {
        &self.batches
    }

    /// Uniform float in `[min, max)`
    pub fn random_float(&mut self, min: f32, max: f32) -> f32 {
        self.rng.random_float(min, max)
    }

    /// Uniform integer in `[min, max]`
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_int(min, max)
    }

    /// Spawn a burst of particles
    ///
    /// `make_sprite` is called once per particle. Without an explicit
    /// `container` the engine's container factory builds a fresh one. The
    /// returned batch is already registered and is updated in place by
    /// `update`.
    pub fn create<F>(
        &mut self,
        config: &EmitConfig,
        mut make_sprite: F,
        container: Option<ContainerHandle<E::Container>>,
    ) -> DustResult<BatchHandle<E::Container>>
    where
        F: FnMut() -> DustResult<E::Sprite>,
    {
        let container = match container {
            Some(container) => container,
            None => self.new_container()?,
        };

        let batch = Rc::new(RefCell::new(ParticleBatch::new(container, config.gravity)));
        self.batches.push(batch.clone());

        let (min_angle, max_angle) = config.angle_range;
        let angles = emission_angles(
            &mut self.rng,
            config.count,
            min_angle,
            max_angle,
            config.random_spacing,
        );

        if angles.is_empty() {
            log::warn!("Created an empty particle batch at {:?}", config.origin);
        }

        for angle in angles {
            let mut sprite = make_sprite()?;
            let state = self.init_sprite(&mut sprite, config, angle);
            batch
                .borrow_mut()
                .push(Particle::new(sprite_handle(sprite), state));
        }

        log::debug!(
            "Created batch of {} particles at {:?} ({} live batches)",
            batch.borrow().len(),
            config.origin,
            self.batches.len()
        );

        Ok(batch)
    }

    fn new_container(&self) -> DustResult<ContainerHandle<E::Container>> {
        self.engine
            .container_factory()
            .map(|factory| container_handle(factory.create_container()))
            .ok_or_else(|| DustError::no_container(self.engine.name()))
    }

    /// Apply the randomized visual setup and return the particle's motion
    fn init_sprite(&mut self, sprite: &mut E::Sprite, config: &EmitConfig, angle: f32) -> SimulationState {
        let frames = sprite.total_frames();
        if frames > 0 {
            let frame = self.rng.random_int(0, frames as i32 - 1);
            sprite.goto_and_stop(frame as u32);
        }

        let (min_size, max_size) = config.size_range;
        let size = self.rng.random_int(min_size as i32, max_size as i32) as f32;
        sprite.set_size(size, size);
        sprite.set_anchor(Vec2::splat(CENTER_ANCHOR));
        sprite.set_position(config.origin);

        let (min, max) = config.scale_speed_range;
        let scale_speed = self.rng.random_float(min, max);
        let (min, max) = config.alpha_speed_range;
        let alpha_speed = self.rng.random_float(min, max);
        let (min, max) = config.rotation_speed_range;
        let rotation_speed = self.rng.random_float(min, max);

        let (min, max) = config.speed_range;
        let speed = self.rng.random_float(min, max);

        SimulationState {
            velocity: Vec2::new(speed * angle.cos(), speed * angle.sin()),
            scale_speed,
            alpha_speed,
            rotation_speed,
        }
    }

    /// Build an emitter that spawns into this system every `interval`
    pub fn emitter<F>(&self, interval: Duration, emit: F) -> Emitter<Self>
    where
        F: FnMut(&mut Self) -> DustResult<()> + 'static,
    {
        Emitter::new(interval, emit)
    }

    /// Advance every particle one tick and prune what faded out
    ///
    /// A batch left without particles is dropped from the registry in the
    /// same call.
    pub fn update(&mut self) -> ParticleUpdate {
        let mut result = ParticleUpdate::default();
        if self.batches.is_empty() {
            return result;
        }

        self.batches.retain(|batch| {
            let mut batch = batch.borrow_mut();
            if !batch.is_empty() {
                result.removed_particles += batch.step();
            }

            if batch.is_empty() {
                result.removed_batches += 1;
                false
            } else {
                result.active_particles += batch.len();
                true
            }
        });
        result.active_batches = self.batches.len();

        if result.removed_particles > 0 || result.removed_batches > 0 {
            log::trace!(
                "Particle update removed {} particles and {} batches",
                result.removed_particles,
                result.removed_batches
            );
        }

        result
    }

    /// Detach every sprite and drop every batch
    pub fn clear(&mut self) {
        for batch in self.batches.drain(..) {
            batch.borrow_mut().clear();
        }
    }

    /// Get particle count
    pub fn particle_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.borrow().len()).sum()
    }

    /// Get statistics about the particle system
    pub fn stats(&self) -> ParticleStats {
        ParticleStats {
            batches: self.batches.len(),
            particles: self.particle_count(),
        }
    }
}
