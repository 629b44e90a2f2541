//! Configuration types for the particle world.

use crate::float::Float;
use crate::vec::Vec3;

/// Configuration for a [`ParticleWorld`](crate::world::ParticleWorld).
///
/// # Builder Pattern
/// ```
/// use pointmass::config::WorldConfig;
/// use pointmass::vec::Vec3;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_damping(0.995)
///     .with_sub_steps(2);
/// ```
pub struct WorldConfig<F: Float> {
    /// Base acceleration given to particles created through
    /// `ParticleWorld::spawn`. Default: zero (no ambient gravity).
    pub gravity: Vec3<F>,
    /// Damping coefficient for spawned particles, in [0, 1].
    /// 1.0 = no decay. Default: 0.995.
    pub damping: F,
    /// Number of sub-steps each `step` call is divided into. Higher = more
    /// stable for stiff setups. Default: 1.
    pub sub_steps: usize,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            gravity: Vec3::zero(),
            damping: F::from_f32(0.995),
            sub_steps: 1,
        }
    }

    /// Set the ambient gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the default damping for spawned particles.
    pub fn with_damping(mut self, damping: F) -> Self {
        debug_assert!(damping >= F::zero() && damping <= F::one(),
            "damping must be in [0, 1]");
        self.damping = damping;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
