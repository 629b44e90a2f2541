//! Point-mass particle physics for simulation loops.
//!
//! `pointmass` provides 3D vector algebra, explicit Newton-Euler
//! integration of point masses, and a catalog of force generators bound to
//! particles through a registry. A surrounding simulation loop drives the
//! core once per discrete time step.
//!
//! # Features
//!
//! - **Vector algebra**: `Vec3` with dot/cross/component products and
//!   in-place mutators for hot paths
//! - **Particles**: damped point masses with a per-tick force accumulator;
//!   inverse mass zero encodes immovable bodies
//! - **Force generators**: gravity, drag, springs, anchored springs,
//!   bungees, buoyancy, and an analytically-evaluated stiff spring
//! - **Force registry**: ordered (particle, generator) bindings evaluated
//!   once per tick
//! - **Observable**: monitor ticks via the `StepObserver` trait
//! - **Precision-generic**: every type is generic over `f32`/`f64`
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Tick order
//!
//! Once per tick, in this order: `ForceRegistry::update_forces(dt)`, then
//! `Particle::integrate(dt)` for each particle. [`ParticleWorld`] packages
//! that sequence for embedders that do not need to own the particles
//! themselves.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod force;
pub mod registry;
pub mod world;
pub mod config;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use force::{ForceGenerator, Gravity, Drag, Spring, AnchorSpring, Bungee, Buoyancy, FakeSpring};
pub use registry::{ForceRegistry, Binding};
pub use world::ParticleWorld;
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
