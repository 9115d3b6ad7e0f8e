//! Scene builders shared by the physics benchmarks.

use polycollide::{PhysicsConfig, Polygon, PolygonSpec, Vector2, World};

/// Axis-aligned square of half-width `half` centered at `(x, y)`.
pub fn square(x: f64, y: f64, half: f64) -> Polygon {
    let vertices = vec![
        Vector2::new(-half, -half),
        Vector2::new(half, -half),
        Vector2::new(half, half),
        Vector2::new(-half, half),
    ];
    match Polygon::new(Vector2::new(x, y), vertices, 1.0) {
        Ok(polygon) => polygon,
        Err(err) => panic!("benchmark square: {err}"),
    }
}

/// `n` regular polygons on a loose grid, with cycling side counts and
/// overlapping neighbours.
pub fn setup_world(n: usize) -> World {
    let mut world = World::new();
    let columns = (n as f64).sqrt().ceil().max(1.0) as usize;

    for i in 0..n {
        let (row, col) = (i / columns, i % columns);
        let sides = 3 + i % 5;
        let spec = PolygonSpec::regular(
            Vector2::new(col as f64 * 80.0, row as f64 * 80.0),
            sides,
            45.0,
        );
        if let Err(err) = world.add_polygon(spec) {
            panic!("benchmark scene: {err}");
        }
    }

    // flush the queue so benches start from a populated world
    if let Err(err) = world.step(&PhysicsConfig::new().enable_resolution(false)) {
        panic!("benchmark scene: {err}");
    }
    world
}

/// Config used for the step benches.
pub fn bench_config() -> PhysicsConfig {
    PhysicsConfig::new()
        .gravity(Vector2::new(0.0, 0.1))
        .friction(0.001)
        .angular_friction(0.0005)
}
