// Emitter integration tests
//
// An emitter bound to a particle system, pumped the way a host game loop
// would: advance the timer, then update the particles.

use std::time::Duration;

use sprite_dust::{EmitConfig, HeadlessEngine, HeadlessSprite, ParticleSystem};

const FRAME: Duration = Duration::from_millis(25);

#[test]
fn test_emitter_spawns_until_stopped() {
    let mut dust = ParticleSystem::with_seed(HeadlessEngine::new(), 3);
    let burst = EmitConfig::default().with_count(4);

    let mut emitter = dust.emitter(Duration::from_millis(100), move |dust| {
        dust.create(&burst, || Ok(HeadlessSprite::new()), None)?;
        Ok(())
    });

    emitter.play(&mut dust).unwrap();
    assert_eq!(dust.batches().len(), 1);

    // Eight 25ms frames: bursts at 100ms and 200ms
    let mut fired = 0;
    for _ in 0..8 {
        fired += emitter.advance(FRAME, &mut dust).unwrap();
        dust.update();
    }
    assert_eq!(fired, 2);
    assert_eq!(dust.batches().len(), 3);
    assert_eq!(dust.particle_count(), 12);

    emitter.stop();
    assert!(!emitter.playing());
    for _ in 0..20 {
        assert_eq!(emitter.advance(FRAME, &mut dust).unwrap(), 0);
    }
    assert_eq!(dust.batches().len(), 3);
}

#[test]
fn test_emitter_burst_fades_out_after_stop() {
    let mut dust = ParticleSystem::with_seed(HeadlessEngine::new(), 12);
    let burst = EmitConfig::default().with_count(5).with_alpha_speed(0.25, 0.25);

    let mut emitter = dust.emitter(Duration::from_millis(50), move |dust| {
        dust.create(&burst, || Ok(HeadlessSprite::new()), None)?;
        Ok(())
    });

    emitter.play(&mut dust).unwrap();
    emitter.stop();

    for _ in 0..4 {
        emitter.advance(FRAME, &mut dust).unwrap();
        dust.update();
    }
    assert_eq!(dust.stats().batches, 0);
    assert_eq!(dust.particle_count(), 0);
}

#[test]
fn test_emitter_surfaces_missing_container() {
    let mut dust = ParticleSystem::new(HeadlessEngine::unbound());
    let mut emitter = dust.emitter(Duration::from_millis(50), |dust| {
        dust.create(&EmitConfig::default(), || Ok(HeadlessSprite::new()), None)?;
        Ok(())
    });

    assert!(emitter.play(&mut dust).is_err());
    assert!(!emitter.playing());
}
