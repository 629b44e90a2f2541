use pointmass::{
    Bungee, Drag, ForceGenerator, Gravity, NoOpStepObserver, Particle, ParticleWorld, Spring,
    Vec3, WorldConfig,
};

fn run_scene() -> Vec<Vec3<f32>> {
    let config = WorldConfig::new().with_gravity(Vec3::new(0.0, -9.81, 0.0));
    let mut world = ParticleWorld::new(config);

    let anchor = world.add_particle(Particle::immovable(Vec3::new(0.0, 10.0, 0.0)));
    let bob = world.add_particle(
        Particle::new(Vec3::new(3.0, 8.0, 0.5), 2.0)
            .with_damping(0.98)
            .with_acceleration(Vec3::new(0.0, -9.81, 0.0)),
    );
    let weight =
        world.add_particle(Particle::new(Vec3::new(-2.0, 12.0, 0.0), 0.5).with_damping(0.95));

    world.bind(bob, ForceGenerator::Spring(Spring::new(anchor, 12.0, 2.0)));
    world.bind(bob, ForceGenerator::Drag(Drag::new(0.1, 0.02)));
    world.bind(weight, ForceGenerator::Bungee(Bungee::new(anchor, 6.0, 3.0)));
    world.bind(weight, ForceGenerator::Gravity(Gravity::new(Vec3::new(0.0, -9.81, 0.0))));

    for _ in 0..300 {
        world.step(1.0 / 60.0, &mut NoOpStepObserver).unwrap();
    }
    world.positions()
}

#[test]
fn repeated_runs_are_bitwise_identical() {
    let results: Vec<_> = (0..5).map(|_| run_scene()).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}
