use gridbonk::*;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut world = CollisionWorld::new(WorldConfig::with_cell_sizes([100.0, 50.0]));

    world.add(Rect::new("player", 0.0, 0.0, 1.0, 1.0)).ok();
    world.add(Rect::new("enemy1", 0.0, 0.0, 1.0, 1.0)).ok();
    world.add(Rect::new("enemy2", 60.0, 0.0, 1.0, 1.0)).ok();

    // Re-submit the player's state so its neighbours get queued.
    if let Err(e) = world.update("player", 0.0, 0.0, 1.0, 1.0) {
        eprintln!("update failed: {e}");
    }
    // Unknown ids are reported back, not fatal.
    if let Err(e) = world.update("ghost", 5.0, 5.0, 1.0, 1.0) {
        eprintln!("update failed: {e}");
    }

    let reported = world.process_collisions(&mut LogSink);
    println!("reports: {} stats: {:?}", reported, world.debug_stats());

    // enemy2 steps into the player's fine cell as well.
    world.update("enemy2", 0.5, 0.5, 1.0, 1.0).ok();
    for ev in world.collect_collisions() {
        println!("grid {}: {} vs {}", ev.grid, ev.a, ev.b);
    }
}
