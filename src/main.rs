/// Headless particle demo
/// Plays an emitter for one second of simulated 60 FPS frames, then lets the
/// remaining particles fade out. Pass a `.toml` or `.json` effect file to
/// override the default burst.
use anyhow::{Context, Result};
use std::time::Duration;

use sprite_dust::{EmitConfig, HeadlessEngine, HeadlessSprite, ParticleSystem};

const FRAME: Duration = Duration::from_millis(16);
const EMIT_FRAMES: u32 = 60;
const MAX_FRAMES: u32 = 600;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let burst = match std::env::args().nth(1) {
        Some(path) => EmitConfig::load(&path).with_context(|| format!("loading effect {}", path))?,
        None => EmitConfig::default()
            .with_origin(160.0, 120.0)
            .with_count(24)
            .with_gravity(0.05),
    };

    let mut dust = ParticleSystem::new(HeadlessEngine::new());
    log::info!("Renderer: {}", dust.renderer());

    let mut emitter = dust.emitter(Duration::from_millis(100), move |dust| {
        dust.create(&burst, || Ok(HeadlessSprite::with_frames(4)), None)?;
        Ok(())
    });

    emitter.play(&mut dust)?;

    for frame in 1..=MAX_FRAMES {
        emitter.advance(FRAME, &mut dust)?;
        if frame == EMIT_FRAMES {
            emitter.stop();
            log::info!("Emitter stopped at frame {}", frame);
        }

        let update = dust.update();
        if frame % 10 == 0 {
            log::info!(
                "Frame {:>3}: {} particles in {} batches",
                frame,
                update.active_particles,
                update.active_batches
            );
        }

        if !emitter.playing() && update.active_batches == 0 {
            log::info!("All particles faded out after {} frames", frame);
            return Ok(());
        }
    }

    log::warn!("{} particles still alive after {} frames", dust.particle_count(), MAX_FRAMES);
    Ok(())
}
