use std::time::Duration;

use crate::error::DustResult;

/// Callback run by an emitter on every tick of its timer
pub type EmitFn<C> = Box<dyn FnMut(&mut C) -> DustResult<()>>;

/// Recurring timer pumped by the host loop
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `dt` and return how many whole intervals have completed.
    /// The remainder carries over to the next call.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return u32::from(!dt.is_zero());
        }

        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// Repeatedly runs a creation callback while playing
///
/// The callback receives the context passed to `play`/`advance`, normally the
/// `ParticleSystem` it spawns into.
pub struct Emitter<C> {
    interval: Duration,
    emit: EmitFn<C>,
    playing: bool,
    timer: Option<IntervalTimer>,
}

impl<C> Emitter<C> {
    pub fn new<F>(interval: Duration, emit: F) -> Self
    where
        F: FnMut(&mut C) -> DustResult<()> + 'static,
    {
        Self {
            interval,
            emit: Box::new(emit),
            playing: false,
            timer: None,
        }
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Emit once right away, then start the timer. Does nothing if already playing.
    pub fn play(&mut self, ctx: &mut C) -> DustResult<()> {
        if self.playing {
            return Ok(());
        }

        (self.emit)(ctx)?;
        self.timer = Some(IntervalTimer::new(self.interval));
        self.playing = true;
        log::debug!("Emitter started ({:?} interval)", self.interval);
        Ok(())
    }

    /// Cancel the timer. Does nothing if not playing.
    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }

        self.timer = None;
        self.playing = false;
        log::debug!("Emitter stopped");
    }

    /// Pump the timer by `dt`, emitting once per elapsed interval.
    /// Returns the number of emissions.
    pub fn advance(&mut self, dt: Duration, ctx: &mut C) -> DustResult<u32> {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return Ok(0),
        };

        for _ in 0..fired {
            (self.emit)(ctx)?;
        }
        Ok(fired)
    }
}

impl<C> std::fmt::Debug for Emitter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("interval", &self.interval)
            .field("playing", &self.playing)
            .field("timer", &self.timer)
            .finish()
    }
}
