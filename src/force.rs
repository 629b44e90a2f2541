//! Force generators: gravity, drag, the spring family, and buoyancy.
//!
//! Each generator computes a force for one particle and deposits it through
//! [`Particle::add_force`]; none of them touch position or velocity
//! directly. Generators that tether a particle to another one refer to it
//! by index into the caller's particle slice, the same non-owning handle
//! scheme the registry uses for its target particles.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Look up a particle for mutation, reporting a stale index as an error
/// instead of panicking.
fn fetch<F: Float>(
    particles: &mut [Particle<F>],
    index: usize,
) -> Result<&mut Particle<F>, PhysicsError> {
    let count = particles.len();
    particles
        .get_mut(index)
        .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
}

/// A constant gravitational field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gravity<F: Float> {
    pub gravity: Vec3<F>,
}

impl<F: Float> Gravity<F> {
    pub fn new(gravity: Vec3<F>) -> Self {
        Gravity { gravity }
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        // Infinite-mass particles are unaffected by gravity.
        let Some(mass) = particle.mass() else { return };
        particle.add_force(self.gravity * mass);
    }
}

/// Velocity-dependent drag with linear and quadratic coefficients.
///
/// The drag force is `-norm(v) * (k1*|v| + k2*|v|^2)`. At zero velocity the
/// normalize guard leaves the direction zero, so no force results.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drag<F: Float> {
    pub k1: F,
    pub k2: F,
}

impl<F: Float> Drag<F> {
    pub fn new(k1: F, k2: F) -> Self {
        Drag { k1, k2 }
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        let speed = particle.velocity.magnitude();
        let coeff = self.k1 * speed + self.k2 * speed * speed;

        let mut force = particle.velocity;
        force.normalize();
        particle.add_force(force * -coeff);
    }
}

/// A spring tethering the target particle to another particle.
///
/// Restores toward `rest_length` in both stretch and compression.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    /// Index of the particle at the spring's far end.
    pub other: usize,
    pub spring_constant: F,
    pub rest_length: F,
}

impl<F: Float> Spring<F> {
    pub fn new(other: usize, spring_constant: F, rest_length: F) -> Self {
        Spring { other, spring_constant, rest_length }
    }

    pub fn apply(
        &self,
        particles: &mut [Particle<F>],
        target: usize,
    ) -> Result<(), PhysicsError> {
        let other_position = fetch(particles, self.other)?.position;
        let particle = fetch(particles, target)?;

        let mut d = particle.position - other_position;
        let magnitude = self.spring_constant * (d.magnitude() - self.rest_length);

        d.normalize();
        particle.add_force(d * -magnitude);
        Ok(())
    }
}

/// A spring tethering the particle to a fixed point in space.
///
/// The sign arrangement differs from [`Spring`] but the resulting force is
/// the same restoring behavior: `(rest - |d|)*k` along `+d` equals
/// `(|d| - rest)*k` along `-d`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorSpring<F: Float> {
    pub anchor: Vec3<F>,
    pub spring_constant: F,
    pub rest_length: F,
}

impl<F: Float> AnchorSpring<F> {
    pub fn new(anchor: Vec3<F>, spring_constant: F, rest_length: F) -> Self {
        AnchorSpring { anchor, spring_constant, rest_length }
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        let mut d = particle.position - self.anchor;
        let magnitude = (self.rest_length - d.magnitude()) * self.spring_constant;

        d.normalize();
        particle.add_force(d * magnitude);
    }
}

/// A one-directional spring: pulls while stretched, slack while compressed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bungee<F: Float> {
    /// Index of the particle at the bungee's far end.
    pub other: usize,
    pub spring_constant: F,
    pub rest_length: F,
}

impl<F: Float> Bungee<F> {
    pub fn new(other: usize, spring_constant: F, rest_length: F) -> Self {
        Bungee { other, spring_constant, rest_length }
    }

    pub fn apply(
        &self,
        particles: &mut [Particle<F>],
        target: usize,
    ) -> Result<(), PhysicsError> {
        let other_position = fetch(particles, self.other)?.position;
        let particle = fetch(particles, target)?;

        let mut d = particle.position - other_position;
        let length = d.magnitude();

        // Slack: a compressed bungee exerts nothing at all.
        if length <= self.rest_length {
            return Ok(());
        }

        let magnitude = self.spring_constant * (self.rest_length - length);
        d.normalize();
        particle.add_force(d * magnitude);
        Ok(())
    }
}

/// Buoyancy for a particle floating on a liquid plane at `water_height`.
///
/// `max_depth` is the submersion depth at which the particle displaces its
/// full `volume`; between surfaced and fully submerged the upward force
/// interpolates linearly between zero and `liquid_density * volume`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Buoyancy<F: Float> {
    pub max_depth: F,
    pub volume: F,
    pub water_height: F,
    pub liquid_density: F,
}

impl<F: Float> Buoyancy<F> {
    pub fn new(max_depth: F, volume: F, water_height: F, liquid_density: F) -> Self {
        Buoyancy { max_depth, volume, water_height, liquid_density }
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        let depth = particle.position.y;

        // Fully out of the water: nothing to add.
        if depth >= self.water_height + self.max_depth {
            return;
        }

        let mut force = Vec3::zero();

        // At or below maximum depth: full displacement.
        if depth <= self.water_height - self.max_depth {
            force.y = self.liquid_density * self.volume;
            particle.add_force(force);
            return;
        }

        // Partially submerged: zero force at the surfaced threshold, full
        // displacement at the submerged threshold.
        force.y = self.liquid_density * self.volume
            * (self.water_height + self.max_depth - depth)
            / (F::two() * self.max_depth);
        particle.add_force(force);
    }
}

/// A stiff spring to a fixed anchor, evaluated analytically.
///
/// Instead of letting the explicit integrator step a stiff spring (which
/// blows up at ordinary step sizes), this solves the damped harmonic
/// oscillator in closed form for where the particle should be after `dt`,
/// then emits the force that sends it there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FakeSpring<F: Float> {
    pub anchor: Vec3<F>,
    pub spring_constant: F,
    pub damping: F,
}

impl<F: Float> FakeSpring<F> {
    pub fn new(anchor: Vec3<F>, spring_constant: F, damping: F) -> Self {
        FakeSpring { anchor, spring_constant, damping }
    }

    pub fn apply(&self, particle: &mut Particle<F>, dt: F) {
        if dt <= F::zero() {
            return;
        }
        let Some(mass) = particle.mass() else { return };

        let rel = particle.position - self.anchor;

        // 4k - d^2 <= 0 covers critical damping (gamma exactly zero) and the
        // overdamped range, where the oscillatory closed form is undefined.
        let discriminant =
            F::from_f32(4.0) * self.spring_constant - self.damping * self.damping;
        if discriminant <= F::zero() {
            return;
        }
        let gamma = F::half() * discriminant.sqrt();

        let c = rel * (self.damping / (F::two() * gamma))
            + particle.velocity * (F::one() / gamma);
        let target = (rel * (gamma * dt).cos() + c * (gamma * dt).sin())
            * (-F::half() * dt * self.damping).exp();

        // Recover the acceleration that carries the particle from `rel` to
        // `target` over dt, then express it as a force.
        let accel = (target - rel) * (F::one() / (dt * dt))
            - particle.velocity * (F::one() / dt);
        particle.add_force(accel * mass);
    }
}

/// The closed set of force generators the registry can bind to a particle.
///
/// The registry never inspects which variant it holds; it only asks the
/// generator to compute and deposit its force for one target particle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ForceGenerator<F: Float> {
    Gravity(Gravity<F>),
    Drag(Drag<F>),
    Spring(Spring<F>),
    AnchorSpring(AnchorSpring<F>),
    Bungee(Bungee<F>),
    Buoyancy(Buoyancy<F>),
    FakeSpring(FakeSpring<F>),
}

impl<F: Float> ForceGenerator<F> {
    /// Compute this generator's force for `particles[target]` over `dt` and
    /// add it to that particle's accumulator.
    ///
    /// Fails with [`PhysicsError::ParticleOutOfBounds`] if `target`, or the
    /// far-end particle of a spring-family generator, no longer exists.
    pub fn apply(
        &self,
        particles: &mut [Particle<F>],
        target: usize,
        dt: F,
    ) -> Result<(), PhysicsError> {
        match self {
            ForceGenerator::Gravity(g) => {
                g.apply(fetch(particles, target)?);
                Ok(())
            }
            ForceGenerator::Drag(g) => {
                g.apply(fetch(particles, target)?);
                Ok(())
            }
            ForceGenerator::Spring(g) => g.apply(particles, target),
            ForceGenerator::AnchorSpring(g) => {
                g.apply(fetch(particles, target)?);
                Ok(())
            }
            ForceGenerator::Bungee(g) => g.apply(particles, target),
            ForceGenerator::Buoyancy(g) => {
                g.apply(fetch(particles, target)?);
                Ok(())
            }
            ForceGenerator::FakeSpring(g) => {
                g.apply(fetch(particles, target)?, dt);
                Ok(())
            }
        }
    }
}
