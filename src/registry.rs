//! Registry binding force generators to the particles they act on.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::ForceGenerator;
use crate::particle::Particle;
use alloc::vec::Vec;

/// One (particle, generator) pairing.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding<F: Float> {
    /// Index of the bound particle in the caller's particle slice.
    pub particle: usize,
    pub generator: ForceGenerator<F>,
}

/// Holds the set of force bindings and drives generator evaluation once per
/// tick.
///
/// The registry owns its binding records but not the particles they point
/// at; those live in a slice the caller passes to
/// [`ForceRegistry::update_forces`]. Bindings are evaluated in registration
/// order, which keeps runs reproducible. Force accumulation commutes, so
/// the order never changes the physics for a single particle.
#[derive(Clone, Debug, Default)]
pub struct ForceRegistry<F: Float> {
    bindings: Vec<Binding<F>>,
}

impl<F: Float> ForceRegistry<F> {
    pub fn new() -> Self {
        ForceRegistry { bindings: Vec::new() }
    }

    /// Bind `generator` to the particle at `particle`. The same generator
    /// value may be bound to any number of particles.
    pub fn add(&mut self, particle: usize, generator: ForceGenerator<F>) {
        self.bindings.push(Binding { particle, generator });
    }

    /// Remove the first binding matching the given pair, preserving the
    /// order of the remaining bindings. Returns whether a binding was
    /// removed. Takes effect on the next `update_forces` call.
    pub fn remove(&mut self, particle: usize, generator: &ForceGenerator<F>) -> bool {
        let found = self
            .bindings
            .iter()
            .position(|b| b.particle == particle && b.generator == *generator);
        match found {
            Some(index) => {
                self.bindings.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop all bindings. The particles themselves are unaffected.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// The current bindings, in registration order.
    pub fn bindings(&self) -> &[Binding<F>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Evaluate every binding in registration order, accumulating each
    /// generator's force into its bound particle.
    ///
    /// `dt` must be positive; in release builds a non-positive `dt` is a
    /// no-op. A binding whose particle index (or whose generator's far-end
    /// index) is out of bounds fails with
    /// [`PhysicsError::ParticleOutOfBounds`] rather than being skipped
    /// silently.
    pub fn update_forces(
        &self,
        particles: &mut [Particle<F>],
        dt: F,
    ) -> Result<(), PhysicsError> {
        debug_assert!(dt > F::zero(), "force update requires a positive time step");
        if dt <= F::zero() {
            return Ok(());
        }

        for binding in &self.bindings {
            binding.generator.apply(particles, binding.particle, dt)?;
        }
        Ok(())
    }
}
