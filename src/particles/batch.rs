use crate::particles::Particle;
use crate::renderer::{Container, ContainerHandle};

/// Particles spawned by one `create` call
///
/// The batch and its container always agree: a particle is pushed into both
/// at once and detached from both in the same step.
pub struct ParticleBatch<C: Container> {
    particles: Vec<Particle<C::Sprite>>,
    container: ContainerHandle<C>,
    gravity: f32,
}

impl<C: Container> ParticleBatch<C> {
    pub fn new(container: ContainerHandle<C>, gravity: f32) -> Self {
        Self {
            particles: Vec::new(),
            container,
            gravity,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle<C::Sprite>] {
        &self.particles
    }

    pub fn container(&self) -> &ContainerHandle<C> {
        &self.container
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Attach a particle to the batch and its sprite to the container
    pub(crate) fn push(&mut self, particle: Particle<C::Sprite>) {
        self.container.borrow_mut().add_child(particle.sprite.clone());
        self.particles.push(particle);
    }

    /// Advance every particle one tick and drop the ones that faded out.
    /// Returns the number removed.
    pub fn step(&mut self) -> usize {
        let before = self.particles.len();
        let gravity = self.gravity;
        let container = &self.container;

        self.particles.retain_mut(|particle| {
            if particle.step(gravity) {
                true
            } else {
                container.borrow_mut().remove_child(&particle.sprite);
                false
            }
        });

        before - self.particles.len()
    }

    /// Detach every sprite from the container and empty the batch
    pub fn clear(&mut self) {
        let mut container = self.container.borrow_mut();
        for particle in self.particles.drain(..) {
            container.remove_child(&particle.sprite);
        }
    }
}
