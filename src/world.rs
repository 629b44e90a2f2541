//! A world owning particles and their force bindings, stepped once per tick.

use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::ForceGenerator;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::registry::ForceRegistry;
use crate::vec::Vec3;
use alloc::vec::Vec;

/// Owns a set of particles plus the force registry binding generators to
/// them, and runs the per-tick sequence: update forces, then integrate
/// every particle.
///
/// A world is a convenience aggregate; embedders that want to own their
/// particles directly can drive a bare [`ForceRegistry`] and call
/// [`Particle::integrate`] themselves in the same order.
pub struct ParticleWorld<F: Float> {
    particles: Vec<Particle<F>>,
    registry: ForceRegistry<F>,
    config: WorldConfig<F>,
}

impl<F: Float> ParticleWorld<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        ParticleWorld {
            particles: Vec::new(),
            registry: ForceRegistry::new(),
            config,
        }
    }

    /// Add a fully-specified particle, returning its index.
    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let index = self.particles.len();
        self.particles.push(particle);
        index
    }

    /// Create a particle of the given mass at `position` with the world's
    /// configured defaults (base acceleration = gravity, damping), returning
    /// its index.
    pub fn spawn(&mut self, position: Vec3<F>, mass: F) -> usize {
        let particle = Particle::new(position, mass)
            .with_acceleration(self.config.gravity)
            .with_damping(self.config.damping);
        self.add_particle(particle)
    }

    /// Bind a force generator to the particle at `particle`.
    pub fn bind(&mut self, particle: usize, generator: ForceGenerator<F>) {
        self.registry.add(particle, generator);
    }

    /// Remove the first binding matching the given pair. Returns whether a
    /// binding was removed.
    pub fn unbind(&mut self, particle: usize, generator: &ForceGenerator<F>) -> bool {
        self.registry.remove(particle, generator)
    }

    /// Advance the world by `dt` seconds: run the force registry, then
    /// integrate every particle, `sub_steps` times.
    ///
    /// `dt` must be positive; in release builds a non-positive `dt` is a
    /// no-op. Fails if any binding references a particle that does not
    /// exist.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        debug_assert!(dt > F::zero(), "stepping requires a positive time step");
        if dt <= F::zero() {
            return Ok(());
        }

        let sub_dt = dt / F::from_f32(self.config.sub_steps as f32);

        for _sub in 0..self.config.sub_steps {
            self.registry.update_forces(&mut self.particles, sub_dt)?;
            observer.on_forces_applied();

            for p in self.particles.iter_mut() {
                p.integrate(sub_dt);
            }
            observer.on_integrate();
        }

        observer.on_step_complete();
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> {
        &mut self.particles[index]
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn registry(&self) -> &ForceRegistry<F> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ForceRegistry<F> {
        &mut self.registry
    }

    pub fn config(&self) -> &WorldConfig<F> {
        &self.config
    }

    pub fn positions(&self) -> Vec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }
}

impl<F: Float> Default for ParticleWorld<F> {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}
