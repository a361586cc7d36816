//! Lava Leap entry point
//!
//! The native binary runs the simulation headless with a scripted input
//! sequence and logs what a presentation shell would consume: HUD values,
//! sprite counts and fire-and-forget event cues. Rendering, audio and real
//! input live in external shells built on the library API.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use lava_leap::consts::TICK_HZ;
    use lava_leap::sim::{TickInput, World, tick};
    use lava_leap::{HighScores, Settings};

    env_logger::init();
    log::info!("Lava Leap (native) starting...");

    let settings = Settings::load();
    log::info!(
        "sfx volume {:.2}, music volume {:.2}",
        settings.effective_sfx_volume(),
        settings.effective_music_volume()
    );

    let mut high_scores = HighScores::load();
    let mut world = World::new()?;

    // Scripted demo: run right, hopping every half second, for up to 30s
    // of simulated time. A jump press while dead doubles as the restart
    // button, so the script keeps the session going after a death.
    for frame in 0..(30 * TICK_HZ) {
        let input = TickInput {
            right: true,
            jump: frame % (TICK_HZ / 2) < 5,
            ..Default::default()
        };
        tick(&mut world, &input)?;

        for event in world.drain_events() {
            log::info!("cue: {event:?}");
        }
        if frame % TICK_HZ == 0 {
            let hud = world.hud();
            log::debug!(
                "t={}s level {} score {} high {} alive {} sprites {}",
                frame / TICK_HZ,
                hud.level,
                hud.score,
                hud.high_score,
                hud.alive,
                world.sprites().len()
            );
        }
        if world.end {
            break;
        }
    }

    let hud = world.hud();
    if let Some(rank) = high_scores.add_score(hud.high_score, hud.level) {
        log::info!(
            "session best {} entered the leaderboard at #{rank}",
            hud.high_score
        );
        high_scores.save();
    }
    println!(
        "level {} score {} high score {} (leaderboard best {:?})",
        hud.level,
        hud.score,
        hud.high_score,
        high_scores.top_score()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM shells drive the simulation through the library API instead.
}
