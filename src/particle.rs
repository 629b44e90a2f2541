//! Point-mass particle state and Newton-Euler integration.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// A point mass: the simplest object the physics core simulates.
///
/// Holds linear kinematic state plus a per-tick force accumulator. Force
/// generators deposit forces through [`Particle::add_force`] between ticks;
/// [`Particle::integrate`] advances the state one step and drains the
/// accumulator.
///
/// Mass is stored inverted: an `inverse_mass` of zero encodes infinite
/// mass, i.e. an immovable particle. That representation keeps static
/// bodies cheap and avoids dividing by zero in the integrator.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    /// Linear position in world space.
    pub position: Vec3<F>,
    /// Linear velocity in world space.
    pub velocity: Vec3<F>,
    /// Constant base acceleration (typically gravity), applied every step
    /// on top of whatever the force accumulator contributes.
    pub acceleration: Vec3<F>,
    /// Velocity retained per unit time, in [0, 1]. Applied as
    /// `damping^dt` so the decay is frame-rate independent.
    pub damping: F,
    inverse_mass: F,
    force_accum: Vec3<F>,
}

impl<F: Float> Particle<F> {
    /// Create a particle of the given (positive) mass at `position`, at
    /// rest, undamped.
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        debug_assert!(mass > F::zero() && mass.is_finite(),
            "mass must be positive and finite; use Particle::immovable for infinite mass");
        Particle {
            position,
            velocity: Vec3::zero(),
            acceleration: Vec3::zero(),
            damping: F::one(),
            inverse_mass: F::one() / mass,
            force_accum: Vec3::zero(),
        }
    }

    /// Create an immovable (infinite-mass) particle. It accepts forces but
    /// never moves under integration.
    pub fn immovable(position: Vec3<F>) -> Self {
        Particle {
            position,
            velocity: Vec3::zero(),
            acceleration: Vec3::zero(),
            damping: F::one(),
            inverse_mass: F::zero(),
            force_accum: Vec3::zero(),
        }
    }

    /// Create a particle directly from an inverse mass (zero = infinite).
    pub fn from_inverse_mass(position: Vec3<F>, inverse_mass: F) -> Self {
        debug_assert!(inverse_mass >= F::zero() && inverse_mass.is_finite(),
            "inverse mass must be non-negative and finite");
        Particle {
            position,
            velocity: Vec3::zero(),
            acceleration: Vec3::zero(),
            damping: F::one(),
            inverse_mass,
            force_accum: Vec3::zero(),
        }
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec3<F>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the base acceleration.
    pub fn with_acceleration(mut self, acceleration: Vec3<F>) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        debug_assert!(damping >= F::zero() && damping <= F::one(),
            "damping must be in [0, 1]");
        self.damping = damping;
        self
    }

    /// The particle's mass, or `None` for an infinite-mass particle.
    pub fn mass(&self) -> Option<F> {
        if self.has_finite_mass() {
            Some(F::one() / self.inverse_mass)
        } else {
            None
        }
    }

    /// The particle's inverse mass (zero = infinite mass).
    pub fn inverse_mass(&self) -> F {
        self.inverse_mass
    }

    /// Whether the particle can be moved by forces.
    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > F::zero()
    }

    /// Replace the mass. Fails unless the new mass is positive and finite.
    pub fn set_mass(&mut self, mass: F) -> Result<(), PhysicsError> {
        if mass > F::zero() && mass.is_finite() {
            self.inverse_mass = F::one() / mass;
            Ok(())
        } else {
            Err(PhysicsError::InvalidMass)
        }
    }

    /// Replace the inverse mass. Fails unless non-negative and finite.
    pub fn set_inverse_mass(&mut self, inverse_mass: F) -> Result<(), PhysicsError> {
        if inverse_mass >= F::zero() && inverse_mass.is_finite() {
            self.inverse_mass = inverse_mass;
            Ok(())
        } else {
            Err(PhysicsError::InvalidMass)
        }
    }

    /// Replace the damping coefficient. Fails unless in [0, 1].
    pub fn set_damping(&mut self, damping: F) -> Result<(), PhysicsError> {
        if damping >= F::zero() && damping <= F::one() {
            self.damping = damping;
            Ok(())
        } else {
            Err(PhysicsError::InvalidDamping)
        }
    }

    /// Add a force to be applied at the next integration step only.
    pub fn add_force(&mut self, force: Vec3<F>) {
        self.force_accum += force;
    }

    /// The force accumulated since the last integration step.
    pub fn force_accum(&self) -> Vec3<F> {
        self.force_accum
    }

    /// Zero the accumulated force. Called automatically by `integrate`.
    pub fn clear_accumulator(&mut self) {
        self.force_accum = Vec3::zero();
    }

    /// Advance the particle one step of `dt` seconds.
    ///
    /// Newton-Euler: position moves along the old velocity, then velocity
    /// picks up `dt` worth of the base acceleration plus the accumulated
    /// force converted through the inverse mass, then damping decays the
    /// velocity as `damping^dt`. The accumulator is cleared on the way out.
    ///
    /// `dt` must be positive. That is asserted in debug builds; in release
    /// builds a non-positive `dt` is a no-op that leaves all state,
    /// including the accumulator, untouched.
    pub fn integrate(&mut self, dt: F) {
        debug_assert!(dt > F::zero(), "integration requires a positive time step");
        if dt <= F::zero() {
            return;
        }

        // Infinite mass: immovable, but stale forces must not leak into a
        // later step.
        if self.inverse_mass <= F::zero() {
            self.clear_accumulator();
            return;
        }

        self.position.add_scaled(self.velocity, dt);

        let mut total_accel = self.acceleration;
        total_accel.add_scaled(self.force_accum, self.inverse_mass);
        self.velocity.add_scaled(total_accel, dt);

        self.velocity *= self.damping.powf(dt);

        self.clear_accumulator();
    }
}
