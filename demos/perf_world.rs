use gridbonk::*;
use std::time::Instant;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn unit(seed: &mut u32) -> f32 {
    lcg(seed) as f32 / u32::MAX as f32
}

fn main() {
    env_logger::init();

    let mut world = CollisionWorld::new(WorldConfig {
        cell_sizes: vec![8.0, 5.0],
        enable_timing: true,
    });

    let n = 20_000usize; // number of boxes
    let steps = 10_000usize; // number of moves
    let mut seed = 1u32;
    for i in 0..n {
        let x = unit(&mut seed) * 400.0 - 200.0;
        let y = unit(&mut seed) * 400.0 - 200.0;
        world.add(Rect::new(i.to_string(), x, y, 1.0, 1.0)).ok();
    }

    let t0 = Instant::now();
    let mut reports = 0usize;
    for _ in 0..steps {
        let id = ((lcg(&mut seed) as usize) % n).to_string();
        let Some(r) = world.get(&id) else { continue };
        let (x, y) = (r.x + unit(&mut seed) * 4.0 - 2.0, r.y + unit(&mut seed) * 4.0 - 2.0);
        world.update(&id, x, y, 1.0, 1.0).ok();
        reports += world.process_collisions(&mut |_: &str, _: &str| {});
    }
    let elapsed = t0.elapsed();

    println!(
        "N={} steps={} cell_sizes={:?} total={:?} reports={} stats={:?}",
        n,
        steps,
        world.cfg.cell_sizes,
        elapsed,
        reports,
        world.debug_stats()
    );
    if let Some(t) = world.timing() {
        println!(
            "last: update={:.3}ms process={:.3}ms pairs={} reports={}",
            t.update_ms, t.process_ms, t.pairs_tested, t.reports_emitted
        );
    }
}
