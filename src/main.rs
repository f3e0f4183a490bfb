//! Native demo: scatter obstacles in a seeded world and sweep a box into each

use glam::DVec2;
use pixel_aabb::renderer::{VertexCanvas, colors};
use pixel_aabb::{Aabb, EntityWorld, GeomError, SweepSettings};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const ARENA_WIDTH: i32 = 640;
const ARENA_HEIGHT: i32 = 480;
const OBSTACLE_COUNT: usize = 8;
const MOVER_SIZE: i32 = 16;

fn main() {
    env_logger::init();
    log::info!("Pixel AABB demo starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => SweepSettings::load_or_default(path),
        None => SweepSettings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    log::info!("World seed: {}", seed);

    if let Err(e) = run(&settings, seed) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(settings: &SweepSettings, seed: u64) -> Result<(), GeomError> {
    let mover_start = DVec2::new(
        ((ARENA_WIDTH - MOVER_SIZE) / 2) as f64,
        ((ARENA_HEIGHT - MOVER_SIZE) / 2) as f64,
    );
    let mover = Aabb::from_top_left_and_size(mover_start, MOVER_SIZE, MOVER_SIZE)?;
    let world = scatter_obstacles(&mover, seed)?;
    log::info!("Spawned {} obstacles", world.len());

    for entity in world.iter() {
        let target = entity.aabb;
        let velocity = box_center(&target) - box_center(&mover);

        match mover.swept(velocity, &target) {
            Ok((moved, rest)) => {
                let gap = moved.distance_to(&target);
                log::info!(
                    "Obstacle {}: rest at {} (gap {}, {})",
                    entity.id,
                    rest,
                    gap.x,
                    gap.y
                );
            }
            Err(GeomError::MotionUnresolved { steps, .. }) => {
                log::warn!("Obstacle {}: unreachable within {} steps", entity.id, steps);
            }
            Err(e) => return Err(e),
        }
    }

    // Probe a coarse grid for placement
    let open = (0..ARENA_HEIGHT)
        .step_by(40)
        .flat_map(|y| (0..ARENA_WIDTH).step_by(40).map(move |x| (x, y)))
        .filter(|&(x, y)| Aabb::open_point(DVec2::new(x as f64, y as f64), &world))
        .count();
    log::info!("{} open grid points", open);

    let mut capped = mover;
    if let Some(first) = world.iter().next() {
        let velocity = box_center(&first.aabb) - box_center(&capped);
        match capped.move_towards_with(velocity, &first.aabb, settings) {
            Ok(rest) => log::info!("Mover settled at {} under step cap", rest),
            Err(e) => log::warn!("{}", e),
        }
    }

    if settings.debug_draw {
        let mut canvas = VertexCanvas::new();
        for entity in world.iter() {
            entity.aabb.draw_with(&mut canvas, settings.debug_color);
        }
        capped.draw_with(&mut canvas, colors::DEBUG_MOVER);
        log::info!(
            "Debug overlay: {} vertices ({} bytes)",
            canvas.vertices.len(),
            canvas.as_bytes().len()
        );
    }

    Ok(())
}

/// Place obstacles at random, rejecting any that would overlap the mover
fn scatter_obstacles(mover: &Aabb, seed: u64) -> Result<EntityWorld, GeomError> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut world = EntityWorld::new();

    while world.len() < OBSTACLE_COUNT {
        let w = rng.random_range(16..64);
        let h = rng.random_range(16..64);
        let x = rng.random_range(0..ARENA_WIDTH - w);
        let y = rng.random_range(0..ARENA_HEIGHT - h);
        let aabb = Aabb::from_top_left_and_size(DVec2::new(x as f64, y as f64), w, h)?;
        if !aabb.overlaps(mover) {
            world.spawn(aabb);
        }
    }

    Ok(world)
}

fn box_center(aabb: &Aabb) -> DVec2 {
    (aabb.top_left() + aabb.bottom_right()) * 0.5
}
