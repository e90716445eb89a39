pub mod angles;
pub mod batch;
pub mod emitter;
pub mod particle;
pub mod particle_system;

pub use angles::emission_angles;
pub use batch::ParticleBatch;
pub use emitter::{EmitFn, Emitter, IntervalTimer};
pub use particle::{Particle, SimulationState};
pub use particle_system::{BatchHandle, ParticleStats, ParticleSystem, ParticleUpdate};
