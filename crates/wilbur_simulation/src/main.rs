//! Headless прогон лобби
//!
//! Игрок кликает в случайные точки сцены (seeded RNG), симуляция
//! ходит по navmesh без рендера. Полезно для проверки, что walker
//! не застревает за краем пола.

use bevy::prelude::*;
use rand::Rng;
use wilbur_simulation::logger::{set_log_level, LogLevel};
use wilbur_simulation::{
    create_headless_app, log_info, DeterministicRng, InteractRequest, LobbyScenePlugin,
    MoveRequest, Player, SceneItem, ScenePosition, SimulationPlugin, WalkFinished, Walker,
};

/// Кадров между кликами (~2 sec)
const CLICK_EVERY: u32 = 120;
const FRAMES: u32 = 3000;

fn main() {
    let seed = 42;
    println!("Starting Wilbur headless lobby (seed: {})", seed);

    let mut app = create_headless_app(seed);
    // Per-walk debug строки на 3000 кадров не нужны
    set_log_level(LogLevel::Info);
    app.add_plugins((SimulationPlugin, LobbyScenePlugin));

    // Startup: спавн игрока и стойки
    app.update();

    let Some(player) = find_single::<Player>(app.world_mut()) else {
        eprintln!("Lobby has no player, aborting");
        return;
    };
    let desk = find_single::<SceneItem>(app.world_mut());

    let mut finished = 0;
    for frame in 1..=FRAMES {
        if frame % CLICK_EVERY == 0 {
            click(&mut app, player, desk, frame);
        }

        app.update();

        finished += app
            .world_mut()
            .resource_mut::<Events<WalkFinished>>()
            .drain()
            .count();

        if frame % 600 == 0 {
            let position = app.world().get::<ScenePosition>(player).map(|p| p.0);
            let moving = app.world().get::<Walker>(player).is_some_and(Walker::is_moving);
            log_info(&format!(
                "Frame {}: player at {:?}, moving: {}, walks finished: {}",
                frame, position, moving, finished
            ));
        }
    }

    println!("Simulation complete! Walks finished: {}", finished);
}

/// Каждый пятый клик — по стойке, остальные — в случайную точку
fn click(app: &mut App, player: Entity, desk: Option<Entity>, frame: u32) {
    let world = app.world_mut();

    if let Some(desk) = desk.filter(|_| (frame / CLICK_EVERY) % 5 == 0) {
        world.send_event(InteractRequest { actor: player, item: desk });
        return;
    }

    let destination = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        Vec2::new(rng.rng.gen_range(80.0..720.0), rng.rng.gen_range(230.0..580.0))
    };
    world.send_event(MoveRequest {
        entity: player,
        destination,
    });
}

fn find_single<T: Component>(world: &mut World) -> Option<Entity> {
    let mut query = world.query_filtered::<Entity, With<T>>();
    query.iter(world).next()
}
