use pointmass::{Particle, PhysicsError, Vec3};

#[test]
fn free_fall_tracks_gravity() {
    let mut p: Particle<f32> = Particle::new(Vec3::new(0.0, 100.0, 0.0), 1.0)
        .with_acceleration(Vec3::new(0.0, -9.81, 0.0));
    let dt = 1.0 / 60.0;

    for _ in 0..60 {
        p.integrate(dt);
    }

    let expected_y = 100.0 - 0.5 * 9.81;
    assert!(
        (p.position.y - expected_y).abs() < 1.0,
        "position.y = {}, expected ~ {}",
        p.position.y,
        expected_y
    );
    assert!((p.velocity.y - (-9.81)).abs() < 0.01);
}

#[test]
fn accumulated_force_converts_through_inverse_mass() {
    // Mass 2 under a 2 N force for one second gains 1 m/s.
    let mut p: Particle<f64> = Particle::new(Vec3::zero(), 2.0);
    p.add_force(Vec3::new(2.0, 0.0, 0.0));
    p.integrate(1.0);
    assert!((p.velocity.x - 1.0).abs() < 1e-12, "velocity.x = {}", p.velocity.x);
}

#[test]
fn infinite_mass_is_immovable_but_accumulator_clears() {
    let mut p: Particle<f32> = Particle::immovable(Vec3::new(5.0, 5.0, 5.0));
    p.add_force(Vec3::new(1000.0, 1000.0, 1000.0));
    p.add_force(Vec3::new(-40.0, 0.0, 12.5));
    p.integrate(1.0 / 60.0);

    assert_eq!(p.position, Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(p.velocity, Vec3::zero());
    assert_eq!(p.force_accum(), Vec3::zero());
}

#[test]
fn forces_accumulate_until_integration() {
    let mut p: Particle<f32> = Particle::new(Vec3::zero(), 1.0);
    p.add_force(Vec3::new(1.0, 0.0, 0.0));
    p.add_force(Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(p.force_accum(), Vec3::new(1.0, 2.0, 0.0));

    p.integrate(1.0 / 60.0);
    assert_eq!(p.force_accum(), Vec3::zero());
}

#[test]
fn unit_damping_preserves_speed() {
    let mut p: Particle<f32> = Particle::new(Vec3::zero(), 1.0)
        .with_velocity(Vec3::new(3.0, 0.0, 0.0));

    for _ in 0..120 {
        p.integrate(1.0 / 60.0);
    }

    assert!((p.velocity.magnitude() - 3.0).abs() < 1e-4);
}

#[test]
fn damping_is_frame_rate_independent() {
    let mut coarse: Particle<f64> = Particle::new(Vec3::zero(), 1.0)
        .with_velocity(Vec3::new(1.0, 0.0, 0.0))
        .with_damping(0.5);
    let mut fine = coarse.clone();

    coarse.integrate(1.0);
    fine.integrate(0.5);
    fine.integrate(0.5);

    assert!(
        (coarse.velocity.x - fine.velocity.x).abs() < 1e-12,
        "coarse {} vs fine {}",
        coarse.velocity.x,
        fine.velocity.x
    );
    assert!((coarse.velocity.x - 0.5).abs() < 1e-12);
}

#[test]
fn mass_accessors_round_trip() {
    let p: Particle<f32> = Particle::new(Vec3::zero(), 4.0);
    assert!(p.has_finite_mass());
    assert_eq!(p.mass(), Some(4.0));
    assert!((p.inverse_mass() - 0.25).abs() < 1e-6);

    let fixed: Particle<f32> = Particle::immovable(Vec3::zero());
    assert!(!fixed.has_finite_mass());
    assert_eq!(fixed.mass(), None);
}

#[test]
fn setters_reject_invalid_values() {
    let mut p: Particle<f32> = Particle::new(Vec3::zero(), 1.0);

    assert_eq!(p.set_mass(-1.0), Err(PhysicsError::InvalidMass));
    assert_eq!(p.set_mass(0.0), Err(PhysicsError::InvalidMass));
    assert_eq!(p.set_mass(f32::INFINITY), Err(PhysicsError::InvalidMass));
    assert_eq!(p.set_inverse_mass(-0.5), Err(PhysicsError::InvalidMass));
    assert_eq!(p.set_damping(1.5), Err(PhysicsError::InvalidDamping));
    assert_eq!(p.set_damping(-0.1), Err(PhysicsError::InvalidDamping));

    // Valid updates go through.
    assert_eq!(p.set_mass(2.0), Ok(()));
    assert_eq!(p.mass(), Some(2.0));
    assert_eq!(p.set_inverse_mass(0.0), Ok(()));
    assert!(!p.has_finite_mass());
    assert_eq!(p.set_damping(0.9), Ok(()));
}
