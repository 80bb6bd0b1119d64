//! Grasslands entry point
//!
//! Headless demo shell: drives the session machine and the fixed-tick
//! simulation with a scripted input tape, standing in for the render, input
//! and audio collaborators. A real front end replaces this file and nothing
//! else.

use grasslands::consts::FPS;
use grasslands::level::LevelSpec;
use grasslands::session::Session;
use grasslands::sim::{FireSprites, GameEvent, Player, PlayerSprites, TickInput, World, tick};

fn main() {
    env_logger::init();
    log::info!("grasslands (headless) starting");

    let level = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match LevelSpec::from_json(&json) {
                Ok(level) => level,
                Err(e) => {
                    log::error!("bad level spec {path}: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("cannot read {path}: {e}");
                std::process::exit(1);
            }
        },
        None => LevelSpec::demo(),
    };

    let obstacles = level.build(&FireSprites::placeholder());
    let player = Player::new(100.0, 100.0, PlayerSprites::placeholder());
    let mut world = World::new(player, obstacles);
    log::info!("level built: {} obstacles", world.obstacles.len());

    let mut session = Session::new();
    session.start();

    // Up to a minute of scripted play: run right with periodic jumps; the
    // fire row on the floor ends the run well before the tape does.
    let mut events_seen = 0u32;
    for t in 0..(FPS as u64 * 60) {
        if !session.is_playing() {
            break;
        }
        let input = scripted_input(t);
        if input.quit {
            break;
        }
        let now_ms = t * 1000 / FPS as u64;
        for event in tick(&mut world, &input, now_ms) {
            log::info!("tick {t}: {event:?}");
            if event == GameEvent::Death {
                log::info!("tick {t}: out of lives");
            }
            events_seen += 1;
            session.apply(&event);
        }
    }

    log::info!(
        "done: {:?}, {} events, player at ({:.0}, {:.0}) with {} lives, camera ({:.0}, {:.0})",
        session.phase,
        events_seen,
        world.player.rect.x,
        world.player.rect.y,
        world.player.lives,
        world.camera.offset.x,
        world.camera.offset.y,
    );
}

/// Input tape for the demo run
fn scripted_input(t: u64) -> TickInput {
    TickInput {
        quit: false,
        jump: t % 90 == 30,
        move_left: false,
        move_right: t < FPS as u64 * 45,
    }
}
