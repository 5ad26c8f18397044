//! Collaborator interfaces consumed by the simulation
//!
//! Every collaborator is optional. A `Simulation` with no hooks at all runs
//! the same rules; it just has nobody to tell.

use crate::sim::{GameEvent, SoundCue};

/// Per-frame scheduler (e.g. `requestAnimationFrame`)
pub trait Driver {
    /// Ask for one more `tick` on the next frame
    fn schedule_next_tick(&mut self);
    /// Stop scheduling; must be a no-op when nothing is scheduled
    fn cancel_tick(&mut self);
}

/// Fire-and-forget sound playback
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Best-score storage
pub trait ScoreStore {
    /// Previously saved best, 0 when nothing is stored or storage is broken
    fn load_best_score(&mut self) -> u32;
    fn save_best_score(&mut self, score: u32);
}

/// UI/medal display listening to game events
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Optional ad/banner SDK capability
pub trait AdHooks {
    fn show_banner(&mut self);
    fn show_interstitial(&mut self);
}

/// The set of collaborators injected into a `Simulation`
#[derive(Default)]
pub struct Hooks {
    pub driver: Option<Box<dyn Driver>>,
    pub audio: Option<Box<dyn AudioSink>>,
    pub scores: Option<Box<dyn ScoreStore>>,
    pub observer: Option<Box<dyn GameObserver>>,
    pub ads: Option<Box<dyn AdHooks>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_driver(mut self, driver: impl Driver + 'static) -> Self {
        self.driver = Some(Box::new(driver));
        self
    }

    pub fn with_audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    pub fn with_scores(mut self, scores: impl ScoreStore + 'static) -> Self {
        self.scores = Some(Box::new(scores));
        self
    }

    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn with_ads(mut self, ads: impl AdHooks + 'static) -> Self {
        self.ads = Some(Box::new(ads));
        self
    }

    pub(crate) fn play(&mut self, cue: SoundCue) {
        if let Some(audio) = self.audio.as_mut() {
            audio.play(cue);
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }

    pub(crate) fn schedule(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            driver.schedule_next_tick();
        }
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            driver.cancel_tick();
        }
    }
}

/// Driver that only records whether a tick is pending
///
/// Used by headless runs, which poll `is_scheduled` after each tick.
#[derive(Debug, Clone, Default)]
pub struct ManualDriver {
    pending: std::rc::Rc<std::cell::Cell<bool>>,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.get()
    }

    /// Consume the pending request, as a frame callback would
    pub fn take_scheduled(&self) -> bool {
        self.pending.replace(false)
    }
}

impl Driver for ManualDriver {
    fn schedule_next_tick(&mut self) {
        self.pending.set(true);
    }

    fn cancel_tick(&mut self) {
        self.pending.set(false);
    }
}
